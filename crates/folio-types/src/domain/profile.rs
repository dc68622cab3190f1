use crate::glyph::Icon;
use serde::Serialize;

/// The author's identity and the hero/about/contact copy.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    /// Rotating headlines cycled by the hero typewriter
    pub headlines: Vec<&'static str>,
    pub tagline: &'static str,
    /// About-section paragraphs
    pub summary: Vec<&'static str>,
    pub stats: Vec<Stat>,
    pub info: Vec<InfoEntry>,
    pub links: Vec<OutboundLink>,
    pub footer: &'static str,
}

/// A headline figure shown as a small card ("3+ Projects")
#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub figure: &'static str,
    pub label: &'static str,
}

/// One labelled line of the about-section info column
#[derive(Debug, Clone, Serialize)]
pub struct InfoEntry {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
}

/// Where an outbound link points. External profiles open in a new
/// context; mail and tel use the platform handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    CodeHosting,
    ProfessionalNetwork,
    Email,
    Telephone,
}

/// A fixed external URL rendered in the contact section
#[derive(Debug, Clone, Serialize)]
pub struct OutboundLink {
    pub kind: LinkKind,
    pub icon: Icon,
    pub label: &'static str,
    pub url: &'static str,
}
