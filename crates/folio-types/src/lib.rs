pub mod content;
pub mod domain;
pub mod error;
pub mod glyph;
pub mod theme;

pub use content::portfolio;
pub use domain::*;
pub use error::{Error, Result};
pub use glyph::{Glyph, GlyphSize, Icon};
pub use theme::{Rgb, Theme};
