//! Scroll navigation: section anchors, a smoothly-converging viewport
//! offset, and the menu-open flag.

use folio_types::SectionId;

const SECTION_COUNT: usize = SectionId::ALL.len();

/// Fraction of the remaining distance covered per tick
const SMOOTH_FACTOR: f64 = 0.25;

#[derive(Debug, Clone)]
pub struct Navigator {
    anchors: [Option<u16>; SECTION_COUNT],
    offset: f64,
    target: f64,
    menu_open: bool,
    document_height: u16,
    viewport_height: u16,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            anchors: [None; SECTION_COUNT],
            offset: 0.0,
            target: 0.0,
            menu_open: false,
            document_height: 0,
            viewport_height: 0,
        }
    }

    /// Record the document and viewport heights for the current layout,
    /// clamping any scroll state that the new extent invalidates.
    pub fn set_layout(&mut self, document_height: u16, viewport_height: u16) {
        self.document_height = document_height;
        self.viewport_height = viewport_height;
        let max = self.max_offset();
        self.target = self.target.min(max);
        self.offset = self.offset.min(max);
    }

    /// Record where a section's heading landed in the assembled document
    pub fn set_anchor(&mut self, id: SectionId, line: u16) {
        self.anchors[id.index()] = Some(line);
    }

    pub fn anchor(&self, id: SectionId) -> Option<u16> {
        self.anchors[id.index()]
    }

    /// Scroll toward a section and close the menu. An unresolved anchor
    /// leaves the offset alone; the menu closes either way.
    pub fn go_to(&mut self, id: SectionId) {
        if let Some(line) = self.anchors[id.index()] {
            self.target = (line as f64).min(self.max_offset());
        }
        self.menu_open = false;
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = self.target + delta as f64;
        self.target = next.clamp(0.0, self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.viewport_height.max(1) as i32));
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.viewport_height.max(1) as i32);
    }

    pub fn home(&mut self) {
        self.target = 0.0;
    }

    pub fn end(&mut self) {
        self.target = self.max_offset();
    }

    /// Move the offset a fraction of the way toward the target, always
    /// by at least one row so it converges.
    pub fn step(&mut self) {
        let diff = self.target - self.offset;
        if diff.abs() <= 0.5 {
            self.offset = self.target;
            return;
        }
        let mut delta = diff * SMOOTH_FACTOR;
        if delta.abs() < 1.0 {
            delta = diff.signum() * diff.abs().min(1.0);
        }
        self.offset += delta;
    }

    pub fn is_settled(&self) -> bool {
        self.offset == self.target
    }

    /// Rendered scroll offset in rows
    pub fn offset(&self) -> u16 {
        self.offset.round().max(0.0) as u16
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// The section whose anchor the viewport currently sits on
    pub fn active_section(&self) -> SectionId {
        let offset = self.offset() as i32;
        let mut active = SectionId::Hero;
        for id in SectionId::ALL {
            if let Some(line) = self.anchors[id.index()] {
                if line as i32 <= offset + 1 {
                    active = id;
                }
            }
        }
        active
    }

    /// Sections whose anchors fall inside the current viewport
    pub fn sections_in_view(&self) -> Vec<SectionId> {
        let top = self.offset();
        let bottom = top.saturating_add(self.viewport_height);
        SectionId::ALL
            .into_iter()
            .filter(|id| {
                self.anchors[id.index()]
                    .is_some_and(|line| line >= top && line < bottom)
            })
            .collect()
    }

    fn max_offset(&self) -> f64 {
        self.document_height.saturating_sub(self.viewport_height) as f64
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator() -> Navigator {
        let mut nav = Navigator::new();
        nav.set_layout(200, 40);
        nav.set_anchor(SectionId::Hero, 0);
        nav.set_anchor(SectionId::About, 30);
        nav.set_anchor(SectionId::Education, 60);
        nav.set_anchor(SectionId::Contact, 180);
        nav
    }

    fn settle(nav: &mut Navigator) {
        for _ in 0..500 {
            nav.step();
            if nav.is_settled() {
                break;
            }
        }
    }

    #[test]
    fn test_go_to_converges_on_the_anchor() {
        let mut nav = navigator();
        nav.go_to(SectionId::Education);
        settle(&mut nav);
        assert_eq!(nav.offset(), 60);
    }

    #[test]
    fn test_go_to_closes_the_menu() {
        let mut nav = navigator();
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.go_to(SectionId::About);
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_go_to_unresolved_anchor_no_ops_but_closes_menu() {
        let mut nav = navigator();
        nav.go_to(SectionId::Education);
        settle(&mut nav);
        nav.toggle_menu();
        nav.go_to(SectionId::Skills);
        assert!(!nav.menu_open());
        settle(&mut nav);
        assert_eq!(nav.offset(), 60, "offset must not move for a missing anchor");
    }

    #[test]
    fn test_go_to_clamps_to_document_end() {
        let mut nav = navigator();
        nav.go_to(SectionId::Contact);
        settle(&mut nav);
        assert_eq!(nav.offset(), 160);
    }

    #[test]
    fn test_scroll_by_clamps_to_extent() {
        let mut nav = navigator();
        nav.scroll_by(-10);
        settle(&mut nav);
        assert_eq!(nav.offset(), 0);
        nav.scroll_by(10_000);
        settle(&mut nav);
        assert_eq!(nav.offset(), 160);
    }

    #[test]
    fn test_smooth_scroll_moves_gradually() {
        let mut nav = navigator();
        nav.go_to(SectionId::Contact);
        nav.step();
        let first = nav.offset();
        assert!(first > 0 && first < 160);
        nav.step();
        assert!(nav.offset() > first);
    }

    #[test]
    fn test_active_section_tracks_offset() {
        let mut nav = navigator();
        assert_eq!(nav.active_section(), SectionId::Hero);
        nav.go_to(SectionId::About);
        settle(&mut nav);
        assert_eq!(nav.active_section(), SectionId::About);
    }

    #[test]
    fn test_sections_in_view_windows_the_anchors() {
        let mut nav = navigator();
        assert_eq!(
            nav.sections_in_view(),
            vec![SectionId::Hero, SectionId::About]
        );
        nav.go_to(SectionId::Education);
        settle(&mut nav);
        assert_eq!(nav.sections_in_view(), vec![SectionId::Education]);
    }

    #[test]
    fn test_layout_shrink_clamps_scroll_state() {
        let mut nav = navigator();
        nav.end();
        settle(&mut nav);
        assert_eq!(nav.offset(), 160);
        nav.set_layout(100, 40);
        assert_eq!(nav.offset(), 60);
    }
}
