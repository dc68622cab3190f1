pub mod form;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod typewriter;

pub use form::{ContactForm, Field, Outcome, StatusKind};
pub use nav::Navigator;
pub use particles::{Particle, ParticleField, ParticleLink};
pub use reveal::RevealTracker;
pub use typewriter::Typewriter;
