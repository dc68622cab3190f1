use crate::glyph::Icon;
use serde::Serialize;

/// One education entry, newest first
#[derive(Debug, Clone, Serialize)]
pub struct EducationRecord {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub icon: Icon,
}

/// One professional engagement with its highlight bullets
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceRecord {
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub highlights: Vec<&'static str>,
}
