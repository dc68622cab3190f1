//! The decorative canvas behind the content column: drifting particles
//! and faint links between nearby pairs, tinted by a slow hue drift.

use crate::presentation::style::faded;
use folio_engine::particles::{MAX_LINK_ALPHA, ParticleField};
use folio_types::{Rgb, Theme};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Line};
use ratatui::widgets::Widget;

/// Strongest tint applied to a particle dot
const PARTICLE_ALPHA: f64 = 0.65;

/// Strongest tint applied to a link line
const LINK_TINT_CEILING: f64 = 0.5;

pub struct BackdropView<'a> {
    field: &'a ParticleField,
    theme: &'a Theme,
    /// Hue drift phase in [0, 1)
    drift: f64,
}

impl<'a> BackdropView<'a> {
    pub fn new(field: &'a ParticleField, theme: &'a Theme, drift: f64) -> Self {
        Self { field, theme, drift }
    }

    /// Particle tint for the current drift phase, wandering between the
    /// base tint and the gradient midpoint and back.
    fn tint(&self) -> Rgb {
        let t = 1.0 - (2.0 * self.drift - 1.0).abs();
        self.theme.particle.lerp(self.theme.accent_mid, t)
    }
}

impl Widget for BackdropView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.field.extent();
        let tint = self.tint();

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, width.max(1.0)])
            .y_bounds([0.0, height.max(1.0)])
            .paint(|ctx| {
                for link in self.field.links() {
                    let strength = link.alpha / MAX_LINK_ALPHA * LINK_TINT_CEILING;
                    ctx.draw(&Line {
                        x1: link.from.0,
                        y1: link.from.1,
                        x2: link.to.0,
                        y2: link.to.1,
                        color: faded(self.theme, tint, strength),
                    });
                }
                ctx.layer();
                for particle in self.field.particles() {
                    ctx.draw(&Circle {
                        x: particle.x,
                        y: particle.y,
                        radius: particle.radius,
                        color: faded(self.theme, tint, PARTICLE_ALPHA),
                    });
                }
            });

        canvas.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_engine::particles::Particle;

    #[test]
    fn test_backdrop_renders_into_a_buffer() {
        let particles = vec![
            Particle { x: 10.0, y: 10.0, vx: 0.0, vy: 0.0, radius: 0.5 },
            Particle { x: 14.0, y: 10.0, vx: 0.0, vy: 0.0, radius: 0.5 },
        ];
        let field = ParticleField::with_particles(particles, 40.0, 40.0);
        let theme = Theme::midnight();
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));

        BackdropView::new(&field, &theme, 0.0).render(buf.area, &mut buf);

        let drawn = buf
            .content
            .iter()
            .any(|cell| cell.symbol() != " ");
        assert!(drawn, "expected braille output in the buffer");
    }

    #[test]
    fn test_tint_stays_between_theme_roles() {
        let field = ParticleField::with_particles(Vec::new(), 10.0, 10.0);
        let theme = Theme::midnight();
        let start = BackdropView::new(&field, &theme, 0.0).tint();
        let mid = BackdropView::new(&field, &theme, 0.5).tint();
        assert_eq!(start, theme.particle);
        assert_eq!(mid, theme.accent_mid);
    }
}
