//! Plain-text section rendering for the non-interactive surface.
//! Everything returns owned lines so handlers just print them.

use folio_types::content::Portfolio;
use folio_types::{Glyph, GlyphSize, Rgb, SectionId, Theme};
use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    pub color: bool,
    pub width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { color: true, width: 80 }
    }
}

/// Greedy word wrap. Words longer than the width get a line of their
/// own rather than being split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn format_section(
    content: &Portfolio,
    id: SectionId,
    theme: &Theme,
    opts: &FormatOptions,
) -> Vec<String> {
    match id {
        SectionId::Hero => format_hero(content, theme, opts),
        SectionId::About => format_about(content, theme, opts),
        SectionId::Education => format_education(content, theme, opts),
        SectionId::Experience => format_experience(content, theme, opts),
        SectionId::Projects => format_projects(content, theme, opts),
        SectionId::Skills => format_skills(content, theme, opts),
        SectionId::Contact => format_contact(content, theme, opts),
    }
}

pub fn format_section_list(opts: &FormatOptions) -> Vec<String> {
    let mut lines = Vec::new();
    for descriptor in folio_types::section_descriptors() {
        let name = format!("{:<12}", descriptor.id.name());
        let name = if opts.color {
            name.bold().to_string()
        } else {
            name
        };
        lines.push(format!("{}{}", name, descriptor.title));
    }
    lines
}

fn accent(text: &str, theme: &Theme, opts: &FormatOptions) -> String {
    paint(text, theme.accent_start, opts)
}

fn paint(text: &str, rgb: Rgb, opts: &FormatOptions) -> String {
    if opts.color {
        text.truecolor(rgb.0, rgb.1, rgb.2).bold().to_string()
    } else {
        text.to_string()
    }
}

fn muted(text: &str, theme: &Theme, opts: &FormatOptions) -> String {
    if opts.color {
        text.truecolor(theme.text_muted.0, theme.text_muted.1, theme.text_muted.2)
            .to_string()
    } else {
        text.to_string()
    }
}

fn heading(title: &str, theme: &Theme, opts: &FormatOptions) -> Vec<String> {
    vec![accent(&format!("━━ {} ━━", title), theme, opts), String::new()]
}

fn format_hero(content: &Portfolio, theme: &Theme, opts: &FormatOptions) -> Vec<String> {
    let profile = &content.profile;
    let mut lines = vec![
        accent(profile.name, theme, opts),
        muted(&profile.headlines.join(" · "), theme, opts),
        String::new(),
    ];
    lines.extend(wrap(profile.tagline, opts.width));
    lines
}

fn format_about(content: &Portfolio, theme: &Theme, opts: &FormatOptions) -> Vec<String> {
    let profile = &content.profile;
    let mut lines = heading("About Me", theme, opts);
    for paragraph in &profile.summary {
        lines.extend(wrap(paragraph, opts.width));
        lines.push(String::new());
    }

    let stats: Vec<String> = profile
        .stats
        .iter()
        .map(|s| format!("{} {}", accent(s.figure, theme, opts), s.label))
        .collect();
    lines.push(stats.join("   "));
    lines.push(String::new());

    for entry in &profile.info {
        lines.push(format!(
            "{} {} {}",
            entry.icon.render(GlyphSize::Badge),
            muted(&format!("{:<10}", entry.label), theme, opts),
            entry.value
        ));
    }
    lines
}

fn format_education(content: &Portfolio, theme: &Theme, opts: &FormatOptions) -> Vec<String> {
    let mut lines = heading("Education", theme, opts);
    for record in &content.education {
        lines.push(format!(
            "{}{}",
            record.icon.render(GlyphSize::Large),
            paint(record.degree, theme.text, opts)
        ));
        lines.push(format!("   {}", record.institution));
        lines.push(format!("   {}", muted(record.period, theme, opts)));
        lines.push(String::new());
    }
    lines.pop();
    lines
}

fn format_experience(content: &Portfolio, theme: &Theme, opts: &FormatOptions) -> Vec<String> {
    let mut lines = heading("Experience", theme, opts);
    for record in &content.experience {
        lines.push(paint(record.role, theme.text, opts));
        lines.push(record.organization.to_string());
        lines.push(muted(record.period, theme, opts));
        lines.push(String::new());
        for highlight in &record.highlights {
            for (i, piece) in wrap(highlight, opts.width.saturating_sub(2).max(10))
                .into_iter()
                .enumerate()
            {
                let prefix = if i == 0 { "• " } else { "  " };
                lines.push(format!("{}{}", prefix, piece));
            }
        }
    }
    lines
}

fn format_projects(content: &Portfolio, theme: &Theme, opts: &FormatOptions) -> Vec<String> {
    let mut lines = heading("Projects", theme, opts);
    for project in &content.projects {
        lines.push(format!(
            "{}{}",
            project.icon.render(GlyphSize::Large),
            paint(project.title, theme.text, opts)
        ));
        if let Some(period) = project.period {
            lines.push(muted(period, theme, opts));
        }
        lines.extend(wrap(project.description, opts.width));

        let mut badges: Vec<String> = project
            .visible_technologies()
            .iter()
            .map(|t| format!("[{}]", t))
            .collect();
        if project.overflow_technologies() > 0 {
            badges.push(format!("+{} more", project.overflow_technologies()));
        }
        lines.push(badges.join(" "));

        if let Some(link) = project.link {
            lines.push(format!("↗ {}", link));
        }
        lines.push(String::new());
    }
    lines.pop();
    lines
}

fn format_skills(content: &Portfolio, theme: &Theme, opts: &FormatOptions) -> Vec<String> {
    let mut lines = heading("Skills & Technologies", theme, opts);
    for category in &content.skills {
        lines.push(format!(
            "{} {}",
            category.icon.render(GlyphSize::Badge),
            paint(category.label, theme.text, opts)
        ));
        lines.push(format!("   {}", category.items.join(" · ")));
        lines.push(String::new());
    }
    lines.push(muted("Additional Tools & Platforms", theme, opts));
    lines.push(format!("   {}", content.tools.join(" · ")));
    lines
}

fn format_contact(content: &Portfolio, theme: &Theme, opts: &FormatOptions) -> Vec<String> {
    let mut lines = heading("Get In Touch", theme, opts);
    for link in &content.profile.links {
        lines.push(format!(
            "{} {} {}",
            link.icon.render(GlyphSize::Badge),
            muted(&format!("{:<9}", link.label), theme, opts),
            link.url
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "The contact form lives in the TUI: {}",
        accent("folio view", theme, opts)
    ));
    lines
}
