use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for one of the portfolio's declared sections.
///
/// The set is fixed at build time; the navigation menu, anchor
/// resolution, and reveal tracking are all keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Hero,
    About,
    Education,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    /// All sections in document order
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Education,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// Menu label shown in the navigation bar
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Education => "Education",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }

    /// Stable lowercase name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            SectionId::Hero => "home",
            SectionId::About => "about",
            SectionId::Education => "education",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    /// Parse a command-line section name
    pub fn from_name(name: &str) -> Result<SectionId> {
        let needle = name.to_ascii_lowercase();
        SectionId::ALL
            .into_iter()
            .find(|s| s.name() == needle)
            .ok_or_else(|| Error::UnknownSection(name.to_string()))
    }

    /// Zero-based position in document order
    pub fn index(&self) -> usize {
        SectionId::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Static metadata driving the navigation menu. The anchor itself is
/// resolved at layout time as the heading's line offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub title: &'static str,
}

impl SectionDescriptor {
    pub fn new(id: SectionId) -> Self {
        Self { id, title: id.title() }
    }
}

/// Descriptors for every declared section, in document order
pub fn section_descriptors() -> Vec<SectionDescriptor> {
    SectionId::ALL.into_iter().map(SectionDescriptor::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order_is_stable() {
        let sections = section_descriptors();
        assert_eq!(sections.len(), 7);
        assert_eq!(sections[0].id, SectionId::Hero);
        assert_eq!(sections[6].id, SectionId::Contact);
    }

    #[test]
    fn test_from_name_roundtrip() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_name(id.name()).unwrap(), id);
        }
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(SectionId::from_name("Projects").unwrap(), SectionId::Projects);
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert!(SectionId::from_name("blog").is_err());
    }
}
