//! Bottom status bar: key hints on the left, the form status or the
//! footer line on the right.

use crate::presentation::style::color;
use folio_engine::form::StatusKind;
use folio_types::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

pub struct StatusBarView<'a> {
    theme: &'a Theme,
    status: Option<(&'static str, StatusKind)>,
    footer: &'a str,
}

impl<'a> StatusBarView<'a> {
    pub fn new(
        theme: &'a Theme,
        status: Option<(&'static str, StatusKind)>,
        footer: &'a str,
    ) -> Self {
        Self { theme, status, footer }
    }
}

impl Widget for StatusBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(color(self.theme.background)));

        let chunks =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(area);

        let hint_key = Style::default().fg(color(self.theme.accent_start));
        let hint_text = Style::default().fg(color(self.theme.text_muted));
        let hints = Line::from(vec![
            Span::styled("[1-7]", hint_key),
            Span::styled(" jump ", hint_text),
            Span::styled("[m]", hint_key),
            Span::styled(" menu ", hint_text),
            Span::styled("[↑/↓]", hint_key),
            Span::styled(" scroll ", hint_text),
            Span::styled("[Tab]", hint_key),
            Span::styled(" form ", hint_text),
            Span::styled("[q]", hint_key),
            Span::styled(" quit", hint_text),
        ]);
        Paragraph::new(hints).render(chunks[0], buf);

        let right = match self.status {
            Some((message, kind)) => {
                let rgb = match kind {
                    StatusKind::Ok => self.theme.status_ok,
                    StatusKind::Err => self.theme.status_err,
                };
                Line::from(Span::styled(
                    message,
                    Style::default().fg(color(rgb)).add_modifier(Modifier::BOLD),
                ))
            }
            None => Line::from(Span::styled(
                self.footer.to_string(),
                Style::default().fg(color(self.theme.text_muted)),
            )),
        };
        Paragraph::new(right)
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
