//! Assembles the whole portfolio into one scrollable column of styled
//! lines, recording the line offset of every section heading as that
//! section's anchor.

use crate::presentation::formatters::wrap;
use crate::presentation::style::{color, faded, gradient_line};
use folio_engine::form::{ContactForm, Field, StatusKind};
use folio_engine::reveal::RevealTracker;
use folio_types::content::Portfolio;
use folio_types::{Glyph, GlyphSize, Rgb, SectionId, Theme};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Everything the document needs from the live app state
pub struct DocumentState<'a> {
    pub typed_headline: &'a str,
    pub cursor_on: bool,
    pub form: &'a ContactForm,
    pub focus: Option<Field>,
    pub reveal: &'a RevealTracker,
}

pub struct DocumentModel {
    pub lines: Vec<Line<'static>>,
    pub anchors: Vec<(SectionId, u16)>,
}

impl DocumentModel {
    pub fn height(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }
}

/// Entrance floor: a section is never dimmed below this once laid out
const REVEAL_FLOOR: f64 = 0.25;

pub fn build_document(
    content: &Portfolio,
    theme: &Theme,
    state: &DocumentState<'_>,
    width: u16,
) -> DocumentModel {
    let mut doc = DocumentBuilder {
        theme,
        width: width.max(20) as usize,
        lines: Vec::new(),
        anchors: Vec::new(),
    };

    doc.hero(content, state);
    doc.about(content, state.reveal);
    doc.education(content, state.reveal);
    doc.experience(content, state.reveal);
    doc.projects(content, state.reveal);
    doc.skills(content, state.reveal);
    doc.contact(content, state);
    doc.footer(content);

    DocumentModel { lines: doc.lines, anchors: doc.anchors }
}

struct DocumentBuilder<'a> {
    theme: &'a Theme,
    width: usize,
    lines: Vec<Line<'static>>,
    anchors: Vec<(SectionId, u16)>,
}

impl DocumentBuilder<'_> {
    fn alpha(&self, reveal: &RevealTracker, id: SectionId) -> f64 {
        REVEAL_FLOOR + (1.0 - REVEAL_FLOOR) * reveal.progress(id)
    }

    fn anchor(&mut self, id: SectionId) {
        let line = self.lines.len().min(u16::MAX as usize) as u16;
        self.anchors.push((id, line));
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn heading(&mut self, id: SectionId, text: &str, alpha: f64) {
        self.anchor(id);
        self.lines
            .push(gradient_line(&format!("━━ {} ━━", text), self.theme, alpha).centered());
        self.blank();
    }

    fn styled(&mut self, text: impl Into<String>, rgb: Rgb, alpha: f64) {
        let style = Style::default().fg(faded(self.theme, rgb, alpha));
        self.lines.push(Line::from(Span::styled(text.into(), style)));
    }

    fn bold(&mut self, text: impl Into<String>, rgb: Rgb, alpha: f64) {
        let style = Style::default()
            .fg(faded(self.theme, rgb, alpha))
            .add_modifier(Modifier::BOLD);
        self.lines.push(Line::from(Span::styled(text.into(), style)));
    }

    fn wrapped(&mut self, text: &str, rgb: Rgb, alpha: f64) {
        for piece in wrap(text, self.width) {
            self.styled(piece, rgb, alpha);
        }
    }

    fn bullet(&mut self, text: &str, alpha: f64) {
        let pieces = wrap(text, self.width.saturating_sub(2).max(10));
        for (i, piece) in pieces.into_iter().enumerate() {
            if i == 0 {
                let marker = Span::styled(
                    "• ",
                    Style::default().fg(faded(self.theme, self.theme.accent_start, alpha)),
                );
                let body = Span::styled(
                    piece,
                    Style::default().fg(faded(self.theme, self.theme.text, alpha)),
                );
                self.lines.push(Line::from(vec![marker, body]));
            } else {
                self.styled(format!("  {}", piece), self.theme.text, alpha);
            }
        }
    }

    fn hero(&mut self, content: &Portfolio, state: &DocumentState<'_>) {
        let alpha = self.alpha(state.reveal, SectionId::Hero);
        self.anchor(SectionId::Hero);
        self.blank();

        // Letter-spaced name reads large in a monospace grid
        let spaced: String = content
            .profile
            .name
            .chars()
            .flat_map(|c| [c, ' '])
            .collect();
        self.lines
            .push(gradient_line(spaced.trim_end(), self.theme, alpha).centered());
        self.blank();

        let cursor = if state.cursor_on { "▌" } else { " " };
        let headline = Line::from(vec![
            Span::styled(
                state.typed_headline.to_string(),
                Style::default()
                    .fg(faded(self.theme, self.theme.accent_end, alpha))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                cursor.to_string(),
                Style::default().fg(faded(self.theme, self.theme.accent_end, alpha)),
            ),
        ])
        .centered();
        self.lines.push(headline);
        self.blank();

        for piece in wrap(content.profile.tagline, self.width.saturating_sub(8).max(20)) {
            let style = Style::default().fg(faded(self.theme, self.theme.text_muted, alpha));
            self.lines.push(Line::from(Span::styled(piece, style)).centered());
        }
        self.blank();

        let github = content
            .profile
            .links
            .iter()
            .find(|l| l.kind == folio_types::LinkKind::CodeHosting);
        let mut hint = String::from("[7] Get In Touch   [5] View Projects");
        if let Some(link) = github {
            hint.push_str("   ↗ ");
            hint.push_str(link.label);
        }
        let style = Style::default().fg(faded(self.theme, self.theme.badge, alpha));
        self.lines.push(Line::from(Span::styled(hint, style)).centered());
        self.blank();
        self.lines.push(
            Line::from(Span::styled(
                "⌄",
                Style::default().fg(faded(self.theme, self.theme.accent_start, alpha)),
            ))
            .centered(),
        );
        self.blank();
    }

    fn about(&mut self, content: &Portfolio, reveal: &RevealTracker) {
        let alpha = self.alpha(reveal, SectionId::About);
        self.heading(SectionId::About, "About Me", alpha);

        for paragraph in &content.profile.summary {
            self.wrapped(paragraph, self.theme.text, alpha);
            self.blank();
        }

        let mut spans = Vec::new();
        for (i, stat) in content.profile.stats.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(
                stat.figure.to_string(),
                Style::default()
                    .fg(faded(self.theme, self.theme.accent_start, alpha))
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}", stat.label),
                Style::default().fg(faded(self.theme, self.theme.text_muted, alpha)),
            ));
        }
        self.lines.push(Line::from(spans));
        self.blank();

        for entry in &content.profile.info {
            let label = format!("{} {:<10}", entry.icon.render(GlyphSize::Badge), entry.label);
            let line = Line::from(vec![
                Span::styled(
                    label,
                    Style::default().fg(faded(self.theme, self.theme.text_muted, alpha)),
                ),
                Span::styled(
                    entry.value.to_string(),
                    Style::default()
                        .fg(faded(self.theme, self.theme.text, alpha))
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            self.lines.push(line);
        }
        self.blank();
    }

    fn education(&mut self, content: &Portfolio, reveal: &RevealTracker) {
        let alpha = self.alpha(reveal, SectionId::Education);
        self.heading(SectionId::Education, "Education", alpha);

        for record in &content.education {
            let title = format!("{}{}", record.icon.render(GlyphSize::Large), record.degree);
            for (i, piece) in wrap(&title, self.width).into_iter().enumerate() {
                if i == 0 {
                    self.bold(piece, self.theme.text, alpha);
                } else {
                    self.bold(format!("   {}", piece), self.theme.text, alpha);
                }
            }
            self.styled(format!("   {}", record.institution), self.theme.accent_end, alpha);
            self.bold(format!("   {}", record.period), self.theme.accent_start, alpha);
            self.blank();
        }
    }

    fn experience(&mut self, content: &Portfolio, reveal: &RevealTracker) {
        let alpha = self.alpha(reveal, SectionId::Experience);
        self.heading(SectionId::Experience, "Experience", alpha);

        for record in &content.experience {
            self.bold(record.role, self.theme.text, alpha);
            self.styled(record.organization, self.theme.accent_end, alpha);
            self.bold(record.period, self.theme.accent_start, alpha);
            self.blank();
            for highlight in &record.highlights {
                self.bullet(highlight, alpha);
            }
            self.blank();
        }
    }

    fn projects(&mut self, content: &Portfolio, reveal: &RevealTracker) {
        let alpha = self.alpha(reveal, SectionId::Projects);
        self.heading(SectionId::Projects, "Projects", alpha);

        for project in &content.projects {
            let title = format!("{}{}", project.icon.render(GlyphSize::Large), project.title);
            self.bold(title, self.theme.text, alpha);
            if let Some(period) = project.period {
                self.styled(period, self.theme.text_muted, alpha);
            }
            self.wrapped(project.description, self.theme.text, alpha);

            let mut badges: Vec<String> = project
                .visible_technologies()
                .iter()
                .map(|t| format!("[{}]", t))
                .collect();
            let overflow = project.overflow_technologies();
            if overflow > 0 {
                badges.push(format!("+{} more", overflow));
            }
            self.styled(badges.join(" "), self.theme.badge, alpha);

            if let Some(link) = project.link {
                self.styled(format!("↗ {}", link), self.theme.accent_end, alpha);
            }
            self.blank();
        }
    }

    fn skills(&mut self, content: &Portfolio, reveal: &RevealTracker) {
        let alpha = self.alpha(reveal, SectionId::Skills);
        self.heading(SectionId::Skills, "Skills & Technologies", alpha);

        for category in &content.skills {
            let title = format!("{} {}", category.icon.render(GlyphSize::Badge), category.label);
            self.bold(title, self.theme.text, alpha);
            self.styled(category.items.join(" · "), self.theme.badge, alpha);
            self.blank();
        }

        self.styled("Additional Tools & Platforms", self.theme.text_muted, alpha);
        self.styled(content.tools.join(" · "), self.theme.badge, alpha);
        self.blank();
    }

    fn contact(&mut self, content: &Portfolio, state: &DocumentState<'_>) {
        let alpha = self.alpha(state.reveal, SectionId::Contact);
        self.heading(SectionId::Contact, "Get In Touch", alpha);

        for link in &content.profile.links {
            let line = Line::from(vec![
                Span::styled(
                    format!("{} {:<9}", link.icon.render(GlyphSize::Badge), link.label),
                    Style::default().fg(faded(self.theme, self.theme.text_muted, alpha)),
                ),
                Span::styled(
                    link.url.to_string(),
                    Style::default().fg(faded(self.theme, self.theme.accent_end, alpha)),
                ),
            ]);
            self.lines.push(line);
        }
        self.blank();

        for field in Field::ALL {
            self.form_field(state, field, alpha);
        }
        self.blank();

        self.lines.push(
            Line::from(Span::styled(
                "[ Send Message ⏎ ]",
                Style::default()
                    .fg(faded(self.theme, self.theme.accent_start, alpha))
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
        );
        self.lines.push(
            Line::from(Span::styled(
                "[Tab] focus the next field   [Enter] send   [Esc] leave the form",
                Style::default().fg(faded(self.theme, self.theme.text_muted, alpha)),
            ))
            .centered(),
        );

        if let Some((message, kind)) = state.form.status_line() {
            let rgb = match kind {
                StatusKind::Ok => self.theme.status_ok,
                StatusKind::Err => self.theme.status_err,
            };
            self.blank();
            self.lines.push(
                Line::from(Span::styled(
                    message.to_string(),
                    Style::default()
                        .fg(faded(self.theme, rgb, alpha))
                        .add_modifier(Modifier::BOLD),
                ))
                .centered(),
            );
        }
        self.blank();
    }

    fn form_field(&mut self, state: &DocumentState<'_>, field: Field, alpha: f64) {
        let focused = state.focus == Some(field);
        let label_rgb = if focused { self.theme.accent_start } else { self.theme.text_muted };
        self.styled(field.label(), label_rgb, alpha);

        let marker_rgb = if focused { self.theme.accent_start } else { self.theme.panel_border };
        let mut spans = vec![Span::styled(
            "› ",
            Style::default().fg(faded(self.theme, marker_rgb, alpha)),
        )];
        spans.push(Span::styled(
            state.form.value(field).to_string(),
            Style::default().fg(faded(self.theme, self.theme.text, alpha)),
        ));
        if focused && state.cursor_on {
            spans.push(Span::styled(
                "▏",
                Style::default().fg(faded(self.theme, self.theme.accent_end, alpha)),
            ));
        }
        self.lines.push(Line::from(spans));
    }

    fn footer(&mut self, content: &Portfolio) {
        let rule: String = "─".repeat(self.width.min(60));
        self.lines.push(
            Line::from(Span::styled(
                rule,
                Style::default().fg(color(self.theme.panel_border)),
            ))
            .centered(),
        );
        self.lines.push(
            Line::from(Span::styled(
                content.profile.footer.to_string(),
                Style::default().fg(color(self.theme.text_muted)),
            ))
            .centered(),
        );
        self.lines.push(
            Line::from(Span::styled(
                "Built with Rust, Ratatui & Crossterm",
                Style::default().fg(color(self.theme.text_muted)),
            ))
            .centered(),
        );
    }
}
