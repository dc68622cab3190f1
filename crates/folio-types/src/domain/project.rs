use crate::glyph::Icon;
use serde::Serialize;

/// A project card: title, copy, technology badges, and an optional
/// external link. Authored at build time, immutable afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: Vec<&'static str>,
    pub icon: Icon,
    pub period: Option<&'static str>,
    pub link: Option<&'static str>,
}

impl ProjectRecord {
    /// Badges shown on the card face; the remainder collapses into a
    /// "+N more" pill, as many as fit three across.
    pub const VISIBLE_TECHNOLOGIES: usize = 3;

    pub fn visible_technologies(&self) -> &[&'static str] {
        let n = self.technologies.len().min(Self::VISIBLE_TECHNOLOGIES);
        &self.technologies[..n]
    }

    pub fn overflow_technologies(&self) -> usize {
        self.technologies
            .len()
            .saturating_sub(Self::VISIBLE_TECHNOLOGIES)
    }
}
