use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::App;
use crate::ui::{self, UiLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InputOutcome {
    pub(crate) quit_requested: bool,
    pub(crate) redraw: bool,
}

impl InputOutcome {
    const IGNORED: Self = Self {
        quit_requested: false,
        redraw: false,
    };

    const REDRAW: Self = Self {
        quit_requested: false,
        redraw: true,
    };

    const QUIT: Self = Self {
        quit_requested: true,
        redraw: false,
    };
}

impl App {
    /// Routes one terminal event to the picker. `layout` is the layout of
    /// the last drawn frame; mouse events are hit-tested against it.
    pub(crate) fn handle_input_event(
        &mut self,
        event: Event,
        layout: Option<UiLayout>,
        now: Instant,
    ) -> InputOutcome {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                self.handle_key_event(key, now)
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, layout),
            Event::Resize(_, _) => InputOutcome::REDRAW,
            _ => InputOutcome::IGNORED,
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, now: Instant) -> InputOutcome {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return InputOutcome::QUIT;
        }

        if self.picker.is_focused() {
            match key.code {
                KeyCode::Esc => {
                    self.picker.blur();
                }
                KeyCode::Up => self.picker.highlight_prev(),
                KeyCode::Down => self.picker.highlight_next(),
                KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.picker.highlight_prev();
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.picker.highlight_next();
                }
                KeyCode::Enter => {
                    self.picker.choose_highlighted(&self.directory);
                }
                _ => self.picker.handle_edit_event(key, now),
            }
            return InputOutcome::REDRAW;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => InputOutcome::QUIT,
            KeyCode::Enter | KeyCode::Char('i') | KeyCode::Char('/') => {
                self.picker.focus();
                InputOutcome::REDRAW
            }
            _ => InputOutcome::IGNORED,
        }
    }

    /// A press-down on a suggestion row commits the choice; only then is
    /// anything blur-like considered. Checking in that order (and the
    /// single-queue event loop) guarantees a pick is never lost to the
    /// list closing.
    fn handle_mouse_event(&mut self, mouse: MouseEvent, layout: Option<UiLayout>) -> InputOutcome {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return InputOutcome::IGNORED;
        }
        let Some(layout) = layout else {
            return InputOutcome::IGNORED;
        };

        if self.picker.is_focused() {
            let view = self
                .picker
                .view(&self.directory, self.config.picker.max_suggestion_rows);
            let rendered = ui::rendered_rows(&view, &layout);
            if let Some(row) = layout.suggestion_hit(rendered, mouse.column, mouse.row) {
                self.picker
                    .choose_visible(view.window_start + row, &self.directory);
                return InputOutcome::REDRAW;
            }
        }

        if layout.input_hit(mouse.column, mouse.row) {
            self.picker.focus();
            return InputOutcome::REDRAW;
        }

        if self.picker.is_focused() {
            self.picker.blur();
            return InputOutcome::REDRAW;
        }
        InputOutcome::IGNORED
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crossterm::event::{
        Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::layout::Rect;

    use crate::app::App;
    use crate::config::Config;
    use crate::person::{Directory, Person};
    use crate::picker::Phase;
    use crate::ui::{UiLayout, split_layout};

    fn test_app() -> App {
        let directory = Directory::from_people(vec![
            Person {
                slug: "ph".to_string(),
                name: "Pieter Haverbeke".to_string(),
                born: 1800,
                died: 1849,
            },
            Person {
                slug: "ms".to_string(),
                name: "Maria Sturm".to_string(),
                born: 1835,
                died: 1917,
            },
        ])
        .expect("test directory should build");
        App::new_with_config(directory, Config::default())
    }

    fn test_layout() -> UiLayout {
        split_layout(Rect::new(0, 0, 80, 24))
    }

    fn key(app: &mut App, code: KeyCode, now: Instant) -> super::InputOutcome {
        app.handle_input_event(Event::Key(KeyEvent::from(code)), Some(test_layout()), now)
    }

    fn mouse_down(app: &mut App, column: u16, row: u16) -> super::InputOutcome {
        app.handle_input_event(
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            }),
            Some(test_layout()),
            Instant::now(),
        )
    }

    #[test]
    fn idle_keys_quit_or_enter_editing() {
        let mut app = test_app();
        let now = Instant::now();

        assert!(key(&mut app, KeyCode::Char('q'), now).quit_requested);
        assert_eq!(app.picker.phase(), Phase::Idle);

        key(&mut app, KeyCode::Char('i'), now);
        assert_eq!(app.picker.phase(), Phase::Editing);
        assert!(app.picker.suggestions_open());
    }

    #[test]
    fn typing_then_mouse_down_on_a_suggestion_chooses_it() {
        let mut app = test_app();
        let now = Instant::now();

        key(&mut app, KeyCode::Enter, now);
        for ch in "Pieter".chars() {
            key(&mut app, KeyCode::Char(ch), now);
        }
        let directory = app.directory.clone();
        assert!(
            app.picker
                .poll_debounce(now + Duration::from_millis(300), &directory)
        );

        // Press-down on the first dropdown content row.
        let layout = test_layout();
        let outcome = mouse_down(&mut app, layout.suggestions.x + 4, layout.suggestions.y + 1);
        assert!(outcome.redraw);
        assert_eq!(app.picker.phase(), Phase::Chosen);
        assert_eq!(
            app.picker.header_line(),
            "Pieter Haverbeke (1800 - 1849)"
        );
        assert!(!app.picker.suggestions_open());
    }

    #[test]
    fn mouse_down_outside_the_widget_blurs_without_clearing_a_choice() {
        let mut app = test_app();
        let now = Instant::now();

        key(&mut app, KeyCode::Enter, now);
        key(&mut app, KeyCode::Enter, now); // choose the highlighted first row
        assert_eq!(app.picker.phase(), Phase::Chosen);

        let outcome = mouse_down(&mut app, 70, 20);
        assert!(!outcome.redraw);
        assert_eq!(app.picker.phase(), Phase::Chosen);
    }

    #[test]
    fn mouse_down_on_the_input_box_focuses_and_clears_the_choice() {
        let mut app = test_app();
        let now = Instant::now();

        key(&mut app, KeyCode::Enter, now);
        key(&mut app, KeyCode::Enter, now);
        assert_eq!(app.picker.phase(), Phase::Chosen);

        let layout = test_layout();
        mouse_down(&mut app, layout.input.x + 2, layout.input.y + 1);
        assert_eq!(app.picker.phase(), Phase::Editing);
        assert_eq!(app.picker.header_line(), "No selected person");
    }

    #[test]
    fn escape_blurs_while_editing_and_quits_while_idle() {
        let mut app = test_app();
        let now = Instant::now();

        key(&mut app, KeyCode::Enter, now);
        let outcome = key(&mut app, KeyCode::Esc, now);
        assert!(!outcome.quit_requested);
        assert_eq!(app.picker.phase(), Phase::Idle);

        assert!(key(&mut app, KeyCode::Esc, now).quit_requested);
    }

    #[test]
    fn ctrl_c_quits_from_any_phase() {
        let mut app = test_app();
        let now = Instant::now();

        key(&mut app, KeyCode::Enter, now);
        let outcome = app.handle_input_event(
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(test_layout()),
            now,
        );
        assert!(outcome.quit_requested);
    }

    #[test]
    fn arrow_keys_move_the_highlight_and_enter_picks_it() {
        let mut app = test_app();
        let now = Instant::now();

        key(&mut app, KeyCode::Enter, now);
        key(&mut app, KeyCode::Down, now);
        key(&mut app, KeyCode::Enter, now);

        assert_eq!(app.picker.phase(), Phase::Chosen);
        assert_eq!(app.picker.header_line(), "Maria Sturm (1835 - 1917)");
    }
}
