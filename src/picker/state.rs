use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::person::{Directory, Person};

use super::debounce::Debouncer;
use super::filter::{ContainsMatcher, NameMatcher};

/// Interaction phase derived from focus and selection. Shown in the status
/// bar; never stored directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Editing,
    Chosen,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "IDLE",
            Phase::Editing => "EDITING",
            Phase::Chosen => "CHOSEN",
        }
    }
}

pub struct PickerState {
    input: Input,
    committed: String,
    debounce: Debouncer,
    chosen: Option<Person>,
    focused: bool,
    suggestions_open: bool,
    highlighted: usize,
    visible: Vec<usize>,
    matcher: Box<dyn NameMatcher>,
}

impl PickerState {
    pub fn new(debounce_delay: Duration, directory: &Directory) -> Self {
        let matcher: Box<dyn NameMatcher> = Box::new(ContainsMatcher);
        let visible = matcher.select("", directory.people());
        Self {
            input: Input::default(),
            committed: String::new(),
            debounce: Debouncer::new(debounce_delay),
            chosen: None,
            focused: false,
            suggestions_open: false,
            highlighted: 0,
            visible,
            matcher,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.focused {
            Phase::Editing
        } else if self.chosen.is_some() {
            Phase::Chosen
        } else {
            Phase::Idle
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn suggestions_open(&self) -> bool {
        self.suggestions_open
    }

    pub fn immediate_query(&self) -> &str {
        self.input.value()
    }

    pub fn committed_query(&self) -> &str {
        &self.committed
    }

    pub fn chosen(&self) -> Option<&Person> {
        self.chosen.as_ref()
    }

    /// Indices into the directory matching the committed query, in
    /// directory order.
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Focusing the input opens the suggestion list and discards any prior
    /// choice; the header falls back to its unselected text.
    pub fn focus(&mut self) {
        self.focused = true;
        self.suggestions_open = true;
        self.chosen = None;
    }

    /// Blur only closes the list. A choice made earlier survives it.
    pub fn blur(&mut self) {
        self.focused = false;
        self.suggestions_open = false;
    }

    /// Routes an editing event to the input box. A keystroke that changes
    /// the value clears the chosen record and re-arms the debounce; cursor
    /// movement alone does neither.
    pub fn handle_edit_event(&mut self, key: KeyEvent, now: Instant) {
        let before = self.input.value().to_string();
        self.input.handle_event(&Event::Key(key));
        if self.input.value() != before {
            self.chosen = None;
            self.debounce
                .schedule(self.input.value().to_string(), now);
        }
    }

    pub fn debounce_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Commits the pending query once its quiet period has elapsed and
    /// recomputes the filtered list. Returns whether anything changed.
    pub fn poll_debounce(&mut self, now: Instant, directory: &Directory) -> bool {
        let Some(value) = self.debounce.fire_if_due(now) else {
            return false;
        };
        self.commit(value, directory);
        true
    }

    pub fn highlight_prev(&mut self) {
        if self.visible.is_empty() {
            self.highlighted = 0;
            return;
        }
        if self.highlighted > 0 {
            self.highlighted -= 1;
        }
    }

    pub fn highlight_next(&mut self) {
        if self.visible.is_empty() {
            self.highlighted = 0;
            return;
        }
        if self.highlighted + 1 < self.visible.len() {
            self.highlighted += 1;
        }
    }

    /// Commits the suggestion at `row` (an index into the filtered list).
    /// This is the press-down path: it runs before any later blur event is
    /// processed, so the choice always wins the race against list closing.
    pub fn choose_visible(&mut self, row: usize, directory: &Directory) -> bool {
        let Some(&index) = self.visible.get(row) else {
            return false;
        };
        self.choose_index(index, directory)
    }

    pub fn choose_highlighted(&mut self, directory: &Directory) -> bool {
        self.choose_visible(self.highlighted, directory)
    }

    fn choose_index(&mut self, index: usize, directory: &Directory) -> bool {
        let Some(person) = directory.get(index).cloned() else {
            return false;
        };

        // A pending debounced commit must not overwrite the selection.
        self.debounce.cancel();
        self.input = Input::new(person.name.clone());
        self.commit(person.name.clone(), directory);
        self.chosen = Some(person);
        self.suggestions_open = false;
        self.focused = false;
        true
    }

    fn commit(&mut self, value: String, directory: &Directory) {
        self.committed = value;
        self.visible = self.matcher.select(&self.committed, directory.people());
        if self.visible.is_empty() {
            self.highlighted = 0;
        } else {
            self.highlighted = self.highlighted.min(self.visible.len() - 1);
        }
    }

    /// Exactly the presentation contract: either the chosen record's
    /// summary or the unselected placeholder.
    pub fn header_line(&self) -> String {
        match &self.chosen {
            Some(person) => format!("{} ({} - {})", person.name, person.born, person.died),
            None => "No selected person".to_string(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.input.visual_cursor()
    }

    /// Drops any pending debounced commit so nothing fires into torn-down
    /// state.
    pub fn teardown(&mut self) {
        self.debounce.cancel();
    }

    /// Snapshot handed to the renderer. `max_rows` caps the dropdown; the
    /// window scrolls to keep the highlighted row in view.
    pub fn view(&self, directory: &Directory, max_rows: usize) -> PickerView {
        let total = self.visible.len();
        let max_rows = max_rows.max(1);
        let window_start = if total <= max_rows || self.highlighted < max_rows / 2 {
            0
        } else if self.highlighted >= total - max_rows / 2 {
            total.saturating_sub(max_rows)
        } else {
            self.highlighted.saturating_sub(max_rows / 2)
        };

        let mut rows = Vec::new();
        for (offset, &index) in self
            .visible
            .iter()
            .enumerate()
            .skip(window_start)
            .take(max_rows)
        {
            if let Some(person) = directory.get(index) {
                rows.push(SuggestionRowView {
                    label: person.name.clone(),
                    detail: format!("{} - {}", person.born, person.died),
                    highlighted: offset == self.highlighted,
                });
            }
        }

        PickerView {
            header: self.header_line(),
            input: self.input.value().to_string(),
            cursor: self.input.visual_cursor(),
            focused: self.focused,
            suggestions_open: self.suggestions_open,
            no_matches: self.visible.is_empty(),
            total_matches: total,
            window_start,
            rows,
            phase: self.phase(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRowView {
    pub label: String,
    pub detail: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerView {
    pub header: String,
    pub input: String,
    pub cursor: usize,
    pub focused: bool,
    pub suggestions_open: bool,
    pub no_matches: bool,
    pub total_matches: usize,
    /// Index into the filtered list of the first rendered row.
    pub window_start: usize,
    pub rows: Vec<SuggestionRowView>,
    pub phase: Phase,
}
