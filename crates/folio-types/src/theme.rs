use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A 24-bit color role value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear interpolation toward `other`, `t` in [0, 1]
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

/// The style declarations for one rendition of the page.
///
/// Every color role is resolved here at startup; nothing installs
/// styles at runtime. The two presets are the two historical variants
/// of the page, now parameters of a single renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    /// Page background behind the content column
    pub background: Rgb,
    pub text: Rgb,
    pub text_muted: Rgb,
    /// Heading gradient endpoints and midpoint
    pub accent_start: Rgb,
    pub accent_mid: Rgb,
    pub accent_end: Rgb,
    pub panel_border: Rgb,
    /// Particle and link tint of the backdrop
    pub particle: Rgb,
    pub status_ok: Rgb,
    pub status_err: Rgb,
    pub badge: Rgb,
}

impl Theme {
    /// Indigo-on-slate, the original page's palette
    pub fn midnight() -> Theme {
        Theme {
            name: "midnight".to_string(),
            background: Rgb(15, 23, 42),
            text: Rgb(226, 232, 240),
            text_muted: Rgb(148, 163, 184),
            accent_start: Rgb(129, 140, 248),
            accent_mid: Rgb(192, 132, 252),
            accent_end: Rgb(34, 211, 238),
            panel_border: Rgb(71, 85, 105),
            particle: Rgb(99, 102, 241),
            status_ok: Rgb(74, 222, 128),
            status_err: Rgb(248, 113, 113),
            badge: Rgb(165, 180, 252),
        }
    }

    /// Teal-and-violet variant
    pub fn aurora() -> Theme {
        Theme {
            name: "aurora".to_string(),
            background: Rgb(9, 18, 24),
            text: Rgb(230, 240, 240),
            text_muted: Rgb(130, 158, 158),
            accent_start: Rgb(45, 212, 191),
            accent_mid: Rgb(110, 231, 183),
            accent_end: Rgb(167, 139, 250),
            panel_border: Rgb(51, 85, 85),
            particle: Rgb(45, 212, 191),
            status_ok: Rgb(110, 231, 183),
            status_err: Rgb(251, 113, 133),
            badge: Rgb(153, 246, 228),
        }
    }

    /// Look up a built-in preset by name
    pub fn by_name(name: &str) -> Result<Theme> {
        match name.to_ascii_lowercase().as_str() {
            "midnight" => Ok(Theme::midnight()),
            "aurora" => Ok(Theme::aurora()),
            other => Err(Error::UnknownTheme(other.to_string())),
        }
    }

    pub const PRESETS: [&'static str; 2] = ["midnight", "aurora"];
}

impl Default for Theme {
    fn default() -> Theme {
        Theme::midnight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_finds_every_preset() {
        for name in Theme::PRESETS {
            assert_eq!(Theme::by_name(name).unwrap().name, name);
        }
    }

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert_eq!(Theme::by_name("Aurora").unwrap().name, "aurora");
    }

    #[test]
    fn test_by_name_rejects_unknown() {
        assert!(Theme::by_name("neon").is_err());
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgb(0, 100, 200);
        let b = Rgb(200, 100, 0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb(100, 100, 100));
    }

    #[test]
    fn test_lerp_clamps_t() {
        let a = Rgb(10, 10, 10);
        let b = Rgb(20, 20, 20);
        assert_eq!(a.lerp(b, -1.0), a);
        assert_eq!(a.lerp(b, 2.0), b);
    }
}
