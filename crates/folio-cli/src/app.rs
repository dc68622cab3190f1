//! TUI application state: one struct owning every engine state machine,
//! advanced by ticks and mutated by key events, drawn once per frame.

use crate::config::AnimationSettings;
use crate::presentation::document::{DocumentState, build_document};
use crate::presentation::style::color;
use crate::presentation::views::{BackdropView, MenuOverlayView, NavBarView, StatusBarView};
use folio_engine::form::{ContactForm, Field};
use folio_engine::nav::Navigator;
use folio_engine::particles::ParticleField;
use folio_engine::reveal::RevealTracker;
use folio_engine::typewriter::Typewriter;
use folio_types::content::{Portfolio, portfolio};
use folio_types::{SectionId, Theme};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};
use ratatui::style::Style;
use ratatui::text::Text;
use ratatui::widgets::{Block, Paragraph};
use std::time::{Duration, Instant};

// Braille resolution per terminal cell; the particle field runs in
// dot units so distances are roughly square on screen
const DOTS_X: f64 = 2.0;
const DOTS_Y: f64 = 4.0;

const MAX_CONTENT_WIDTH: u16 = 88;
const HUE_DRIFT_PER_TICK: f64 = 0.0015;

pub struct App {
    content: &'static Portfolio,
    theme: Theme,
    nav: Navigator,
    field: ParticleField,
    typer: Typewriter,
    form: ContactForm,
    reveal: RevealTracker,
    focus: Option<Field>,
    menu_cursor: usize,
    drift: f64,
    frame: u64,
    should_quit: bool,
}

impl App {
    pub fn new(theme: Theme, settings: AnimationSettings, cols: u16, rows: u16) -> Self {
        let content = portfolio();
        let mut rng = rand::thread_rng();
        let mut field = ParticleField::new(
            settings.particles,
            f64::from(cols) * DOTS_X,
            f64::from(rows) * DOTS_Y,
            &mut rng,
        );
        field.set_link_distance(settings.link_distance);

        Self {
            content,
            theme,
            nav: Navigator::new(),
            field,
            typer: Typewriter::new(content.profile.headlines.clone()),
            form: ContactForm::new(),
            reveal: RevealTracker::new(),
            focus: None,
            menu_cursor: 0,
            drift: 0.0,
            frame: 0,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Resynchronize the backdrop extent; particle positions are left
    /// alone and bounce back into range on their own.
    pub fn handle_resize(&mut self, cols: u16, rows: u16) {
        self.field
            .resize(f64::from(cols) * DOTS_X, f64::from(rows) * DOTS_Y);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.nav.menu_open() {
            self.handle_menu_key(key);
        } else if self.focus.is_some() {
            self.handle_form_key(key);
        } else {
            self.handle_document_key(key);
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        let count = SectionId::ALL.len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => self.nav.close_menu(),
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_cursor = (self.menu_cursor + count - 1) % count;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_cursor = (self.menu_cursor + 1) % count;
            }
            KeyCode::Enter => self.nav.go_to(SectionId::ALL[self.menu_cursor]),
            KeyCode::Char(c) => {
                if let Some(id) = section_for_digit(c) {
                    self.nav.go_to(id);
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(field) = self.focus else { return };
        match key.code {
            KeyCode::Esc => self.focus = None,
            KeyCode::Tab => self.focus = Some(field.next()),
            KeyCode::Enter => {
                self.form.submit(Instant::now());
            }
            KeyCode::Backspace => self.form.backspace(field),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.form.push(field, c);
            }
            _ => {}
        }
    }

    fn handle_document_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('m') => {
                self.menu_cursor = self.nav.active_section().index();
                self.nav.toggle_menu();
            }
            KeyCode::Tab => {
                self.nav.go_to(SectionId::Contact);
                self.focus = Some(Field::Name);
            }
            KeyCode::Up | KeyCode::Char('k') => self.nav.scroll_by(-2),
            KeyCode::Down | KeyCode::Char('j') => self.nav.scroll_by(2),
            KeyCode::PageUp => self.nav.page_up(),
            KeyCode::PageDown => self.nav.page_down(),
            KeyCode::Home | KeyCode::Char('g') => self.nav.home(),
            KeyCode::End | KeyCode::Char('G') => self.nav.end(),
            KeyCode::Char(c) => {
                if let Some(id) = section_for_digit(c) {
                    self.nav.go_to(id);
                }
            }
            _ => {}
        }
    }

    /// Advance every state machine by one frame
    pub fn on_tick(&mut self, now: Instant, dt: Duration) {
        self.frame = self.frame.wrapping_add(1);
        self.field.step();
        self.typer.advance(dt);
        self.nav.step();
        self.reveal.tick();
        self.form.tick(now);
        self.drift = (self.drift + HUE_DRIFT_PER_TICK).fract();
    }

    fn cursor_on(&self) -> bool {
        self.frame % 20 < 10
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let area = f.area();
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

        f.render_widget(
            BackdropView::new(&self.field, &self.theme, self.drift),
            area,
        );

        let column_width = chunks[1].width.min(MAX_CONTENT_WIDTH).max(20);
        let cols = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(column_width),
            Constraint::Min(0),
        ])
        .split(chunks[1]);
        let column = cols[1];

        let panel = Block::default().style(Style::default().bg(color(self.theme.background)));
        f.render_widget(panel, column);

        let inner = column.inner(Margin::new(2, 0));
        let state = DocumentState {
            typed_headline: self.typer.visible(),
            cursor_on: self.cursor_on(),
            form: &self.form,
            focus: self.focus,
            reveal: &self.reveal,
        };
        let model = build_document(self.content, &self.theme, &state, inner.width);

        self.nav.set_layout(model.height(), inner.height);
        for (id, line) in &model.anchors {
            self.nav.set_anchor(*id, *line);
        }
        for id in self.nav.sections_in_view() {
            self.reveal.mark_visible(id);
        }

        let paragraph = Paragraph::new(Text::from(model.lines))
            .style(Style::default().fg(color(self.theme.text)))
            .scroll((self.nav.offset(), 0));
        f.render_widget(paragraph, inner);

        f.render_widget(
            NavBarView::new(&self.theme, self.nav.active_section()),
            chunks[0],
        );
        f.render_widget(
            StatusBarView::new(
                &self.theme,
                self.form.status_line(),
                self.content.profile.footer,
            ),
            chunks[2],
        );

        if self.nav.menu_open() {
            f.render_widget(MenuOverlayView::new(&self.theme, self.menu_cursor), area);
        }
    }
}

fn section_for_digit(c: char) -> Option<SectionId> {
    let digit = c.to_digit(10)? as usize;
    if (1..=SectionId::ALL.len()).contains(&digit) {
        Some(SectionId::ALL[digit - 1])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn settings() -> AnimationSettings {
        AnimationSettings { particles: 20, link_distance: 24.0, fps: 30 }
    }

    fn app() -> App {
        App::new(Theme::midnight(), settings(), 80, 30)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn draw_once(app: &mut App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        terminal
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    #[test]
    fn test_q_quits_from_the_document() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_draw_renders_the_hero() {
        let mut app = app();
        let terminal = draw_once(&mut app);
        let text = buffer_text(&terminal);
        assert!(text.contains("A b d u l l a h"));
    }

    #[test]
    fn test_first_draw_reveals_only_visible_sections() {
        let mut app = app();
        draw_once(&mut app);
        assert!(app.reveal.is_revealed(SectionId::Hero));
        assert!(!app.reveal.is_revealed(SectionId::Contact));
    }

    #[test]
    fn test_digit_jump_reveals_the_target_after_settling() {
        let mut app = app();
        draw_once(&mut app);
        app.handle_key(press(KeyCode::Char('3')));
        let now = Instant::now();
        for _ in 0..300 {
            app.on_tick(now, Duration::from_millis(33));
            let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
            terminal.draw(|f| app.draw(f)).unwrap();
            if app.nav.is_settled() {
                break;
            }
        }
        assert!(app.reveal.is_revealed(SectionId::Education));
        assert_eq!(app.nav.active_section(), SectionId::Education);
    }

    #[test]
    fn test_menu_toggles_and_navigates() {
        let mut app = app();
        draw_once(&mut app);
        app.handle_key(press(KeyCode::Char('m')));
        assert!(app.nav.menu_open());
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Enter));
        assert!(!app.nav.menu_open(), "selection must close the menu");
    }

    #[test]
    fn test_tab_enters_the_form_and_typing_lands_in_fields() {
        let mut app = app();
        draw_once(&mut app);
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus, Some(Field::Name));

        app.handle_key(press(KeyCode::Char('q')));
        assert!(!app.should_quit(), "typing q in the form must not quit");
        assert_eq!(app.form.value(Field::Name), "q");

        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus, Some(Field::Email));
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.focus, None);
    }

    #[test]
    fn test_empty_submit_shows_rejection_in_the_status_bar() {
        let mut app = app();
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Enter));
        let terminal = draw_once(&mut app);
        let text = buffer_text(&terminal);
        assert!(text.contains("Please fill all fields"));
    }

    #[test]
    fn test_resize_resyncs_the_field_extent() {
        let mut app = app();
        app.handle_resize(40, 10);
        assert_eq!(app.field.extent(), (80.0, 40.0));
    }

    #[test]
    fn test_section_for_digit_bounds() {
        assert_eq!(section_for_digit('1'), Some(SectionId::Hero));
        assert_eq!(section_for_digit('7'), Some(SectionId::Contact));
        assert_eq!(section_for_digit('8'), None);
        assert_eq!(section_for_digit('0'), None);
        assert_eq!(section_for_digit('x'), None);
    }
}
