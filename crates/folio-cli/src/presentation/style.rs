//! Color plumbing between the theme's role values and ratatui styles.

use folio_types::{Rgb, Theme};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// A role color blended toward the page background; `alpha` 1.0 is the
/// full role color, 0.0 disappears into the background.
pub fn faded(theme: &Theme, rgb: Rgb, alpha: f64) -> Color {
    color(theme.background.lerp(rgb, alpha))
}

/// Sample the heading gradient at `t` in [0, 1]
pub fn accent_ramp(theme: &Theme, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        theme.accent_start.lerp(theme.accent_mid, t * 2.0)
    } else {
        theme.accent_mid.lerp(theme.accent_end, (t - 0.5) * 2.0)
    }
}

/// Per-character gradient text, dimmed by `alpha` during entrance
pub fn gradient_spans(text: &str, theme: &Theme, alpha: f64) -> Vec<Span<'static>> {
    let chars: Vec<char> = text.chars().collect();
    let last = chars.len().saturating_sub(1).max(1) as f64;
    chars
        .iter()
        .enumerate()
        .map(|(i, ch)| {
            let rgb = accent_ramp(theme, i as f64 / last);
            Span::styled(
                ch.to_string(),
                Style::default()
                    .fg(faded(theme, rgb, alpha))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

pub fn gradient_line(text: &str, theme: &Theme, alpha: f64) -> Line<'static> {
    Line::from(gradient_spans(text, theme, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_ramp_hits_all_three_stops() {
        let theme = Theme::midnight();
        assert_eq!(accent_ramp(&theme, 0.0), theme.accent_start);
        assert_eq!(accent_ramp(&theme, 0.5), theme.accent_mid);
        assert_eq!(accent_ramp(&theme, 1.0), theme.accent_end);
    }

    #[test]
    fn test_faded_zero_is_background() {
        let theme = Theme::midnight();
        assert_eq!(faded(&theme, theme.text, 0.0), color(theme.background));
        assert_eq!(faded(&theme, theme.text, 1.0), color(theme.text));
    }

    #[test]
    fn test_gradient_spans_one_per_character() {
        let theme = Theme::midnight();
        let spans = gradient_spans("About", &theme, 1.0);
        assert_eq!(spans.len(), 5);
    }
}
