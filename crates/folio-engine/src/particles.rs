//! The backdrop particle field: N points drifting inside the viewport,
//! bouncing off its edges, with faint lines joining nearby pairs.

use rand::Rng;

/// Peak opacity of a pair link; decays linearly to zero at the
/// link distance.
pub const MAX_LINK_ALPHA: f64 = 0.15;

/// Default particle population
pub const DEFAULT_COUNT: usize = 80;

/// Default pair distance below which a link is drawn, in canvas units
pub const DEFAULT_LINK_DISTANCE: f64 = 24.0;

const MAX_SPEED: f64 = 0.15;

/// An ambient decorative point. Position advances by velocity each
/// tick; the velocity component flips sign on boundary contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

/// A line between two particles closer than the link distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleLink {
    pub from: (f64, f64),
    pub to: (f64, f64),
    /// In (0, MAX_LINK_ALPHA]; zero-opacity pairs are not emitted
    pub alpha: f64,
}

/// The whole field. Owned by the view that renders it and dropped
/// with it; nothing else observes the particles.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    link_distance: f64,
}

impl ParticleField {
    pub fn new<R: Rng>(count: usize, width: f64, height: f64, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen_range(0.0..width.max(f64::MIN_POSITIVE)),
                y: rng.gen_range(0.0..height.max(f64::MIN_POSITIVE)),
                vx: rng.gen_range(-MAX_SPEED..MAX_SPEED),
                vy: rng.gen_range(-MAX_SPEED..MAX_SPEED),
                radius: rng.gen_range(0.3..0.9),
            })
            .collect();
        Self {
            particles,
            width,
            height,
            link_distance: DEFAULT_LINK_DISTANCE,
        }
    }

    /// Build a field from explicit particles when deterministic
    /// placement is needed; interactive callers go through `new`.
    pub fn with_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
        Self {
            particles,
            width,
            height,
            link_distance: DEFAULT_LINK_DISTANCE,
        }
    }

    pub fn set_link_distance(&mut self, distance: f64) {
        self.link_distance = distance.max(0.0);
    }

    pub fn link_distance(&self) -> f64 {
        self.link_distance
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn extent(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Advance every particle by one tick, bouncing off the bounds
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if (p.x < 0.0 && p.vx < 0.0) || (p.x > self.width && p.vx > 0.0) {
                p.vx = -p.vx;
            }
            if (p.y < 0.0 && p.vy < 0.0) || (p.y > self.height && p.vy > 0.0) {
                p.vy = -p.vy;
            }
            p.x = p.x.clamp(0.0, self.width);
            p.y = p.y.clamp(0.0, self.height);
        }
    }

    /// Links for every unordered pair closer than the link distance.
    /// Opacity decays linearly with distance and reaches zero at the
    /// threshold, so threshold-distance pairs produce nothing.
    pub fn links(&self) -> Vec<ParticleLink> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance < self.link_distance {
                    let alpha = MAX_LINK_ALPHA * (1.0 - distance / self.link_distance);
                    if alpha > 0.0 {
                        links.push(ParticleLink {
                            from: (a.x, a.y),
                            to: (b.x, b.y),
                            alpha,
                        });
                    }
                }
            }
        }
        links
    }

    /// Resynchronize the field extent after a viewport resize. Existing
    /// positions are not renormalized; out-of-range particles bounce
    /// back within a few ticks.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}
