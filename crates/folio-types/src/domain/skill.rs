use crate::glyph::Icon;
use serde::Serialize;

/// A labelled group of skills with its category glyph
#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub label: &'static str,
    pub icon: Icon,
    pub items: Vec<&'static str>,
}
