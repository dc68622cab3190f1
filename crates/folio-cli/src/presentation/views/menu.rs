//! The compact navigation overlay, the terminal cousin of the page's
//! collapsible mobile menu. Selecting an entry scrolls to that section
//! and closes the overlay.

use crate::presentation::style::color;
use folio_types::{SectionId, Theme};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

pub struct MenuOverlayView<'a> {
    theme: &'a Theme,
    selected: usize,
}

impl<'a> MenuOverlayView<'a> {
    pub fn new(theme: &'a Theme, selected: usize) -> Self {
        Self { theme, selected }
    }

    /// Centered popup area sized to the section list
    pub fn popup_area(area: Rect) -> Rect {
        let width = 30u16.min(area.width);
        let height = (SectionId::ALL.len() as u16 + 2).min(area.height);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width, height)
    }
}

impl Widget for MenuOverlayView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = Self::popup_area(area);
        Clear.render(popup, buf);
        buf.set_style(popup, Style::default().bg(color(self.theme.background)));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color(self.theme.panel_border)))
            .title(Span::styled(
                " Sections ",
                Style::default()
                    .fg(color(self.theme.accent_start))
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = SectionId::ALL
            .into_iter()
            .enumerate()
            .map(|(i, id)| {
                let marker = if i == self.selected { "› " } else { "  " };
                let style = if i == self.selected {
                    Style::default()
                        .fg(color(self.theme.accent_end))
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(color(self.theme.text))
                };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(color(self.theme.accent_start))),
                    Span::styled(format!("{} {}", i + 1, id.title()), style),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_area_is_centered_and_bounded() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = MenuOverlayView::popup_area(area);
        assert_eq!(popup.width, 30);
        assert_eq!(popup.height, 9);
        assert_eq!(popup.x, 35);
        assert!(popup.y > 0);
    }

    #[test]
    fn test_popup_area_clamps_to_tiny_terminals() {
        let area = Rect::new(0, 0, 10, 4);
        let popup = MenuOverlayView::popup_area(area);
        assert!(popup.width <= 10);
        assert!(popup.height <= 4);
    }
}
