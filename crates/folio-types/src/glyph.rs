use serde::Serialize;

/// Rendering size for a glyph. `Badge` is the inline form used next to
/// labels; `Large` is the card-face form with trailing padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphSize {
    Badge,
    Large,
}

/// A renderable glyph with a size parameter.
///
/// Each icon variant supplies its own rendition per size instead of a
/// single rendition being cloned and resized downstream.
pub trait Glyph {
    fn render(&self, size: GlyphSize) -> &'static str;
}

/// The fixed icon set used across the portfolio's cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    GraduationCap,
    ChartBoard,
    School,
    ShoppingCart,
    MusicNote,
    CurrencyExchange,
    Code,
    Database,
    BarChart,
    Brain,
    Person,
    Mail,
    Phone,
    MapPin,
    Briefcase,
    Link,
}

impl Glyph for Icon {
    fn render(&self, size: GlyphSize) -> &'static str {
        match size {
            GlyphSize::Badge => match self {
                Icon::GraduationCap => "🎓",
                Icon::ChartBoard => "📊",
                Icon::School => "🏫",
                Icon::ShoppingCart => "🛒",
                Icon::MusicNote => "🎵",
                Icon::CurrencyExchange => "💱",
                Icon::Code => "</>",
                Icon::Database => "🗄",
                Icon::BarChart => "📈",
                Icon::Brain => "🧠",
                Icon::Person => "👤",
                Icon::Mail => "📧",
                Icon::Phone => "📱",
                Icon::MapPin => "🌍",
                Icon::Briefcase => "💼",
                Icon::Link => "↗",
            },
            GlyphSize::Large => match self {
                Icon::GraduationCap => "🎓 ",
                Icon::ChartBoard => "📊 ",
                Icon::School => "🏫 ",
                Icon::ShoppingCart => "🛒 ",
                Icon::MusicNote => "🎵 ",
                Icon::CurrencyExchange => "💱 ",
                Icon::Code => "</> ",
                Icon::Database => "🗄  ",
                Icon::BarChart => "📈 ",
                Icon::Brain => "🧠 ",
                Icon::Person => "👤 ",
                Icon::Mail => "📧 ",
                Icon::Phone => "📱 ",
                Icon::MapPin => "🌍 ",
                Icon::Briefcase => "💼 ",
                Icon::Link => "↗ ",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_renders_at_both_sizes() {
        let icons = [
            Icon::GraduationCap,
            Icon::ChartBoard,
            Icon::School,
            Icon::ShoppingCart,
            Icon::MusicNote,
            Icon::CurrencyExchange,
            Icon::Code,
            Icon::Database,
            Icon::BarChart,
            Icon::Brain,
            Icon::Person,
            Icon::Mail,
            Icon::Phone,
            Icon::MapPin,
            Icon::Briefcase,
            Icon::Link,
        ];
        for icon in icons {
            assert!(!icon.render(GlyphSize::Badge).is_empty());
            assert!(!icon.render(GlyphSize::Large).is_empty());
        }
    }
}
