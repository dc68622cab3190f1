//! Top navigation bar: the author's name on the left, the section menu
//! on the right with the active section highlighted.

use crate::presentation::style::{color, gradient_spans};
use folio_types::{SectionId, Theme};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

pub struct NavBarView<'a> {
    theme: &'a Theme,
    active: SectionId,
}

impl<'a> NavBarView<'a> {
    pub fn new(theme: &'a Theme, active: SectionId) -> Self {
        Self { theme, active }
    }
}

impl Widget for NavBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(color(self.theme.background)));

        let chunks = Layout::horizontal([Constraint::Length(20), Constraint::Min(0)]).split(area);

        let brand = Line::from(gradient_spans("Abdullah Unaiz", self.theme, 1.0));
        Paragraph::new(brand).render(chunks[0], buf);

        let mut spans = Vec::new();
        for (i, id) in SectionId::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    "  ",
                    Style::default().fg(color(self.theme.text_muted)),
                ));
            }
            let style = if id == self.active {
                Style::default()
                    .fg(color(self.theme.accent_end))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color(self.theme.text_muted))
            };
            spans.push(Span::styled(format!("{} {}", i + 1, id.title()), style));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
