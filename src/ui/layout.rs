use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Widgets wider than this read badly; the widget column is capped and
/// left-anchored.
const MAX_WIDGET_WIDTH: u16 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub header: Rect,
    pub input: Rect,
    pub suggestions: Rect,
    pub status: Rect,
}

pub fn split_layout(area: Rect) -> UiLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Input box (bordered)
            Constraint::Min(0),    // Suggestion dropdown
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let widget_width = chunks[1].width.min(MAX_WIDGET_WIDTH);

    UiLayout {
        header: chunks[0],
        input: Rect::new(chunks[1].x, chunks[1].y, widget_width, chunks[1].height),
        suggestions: Rect::new(chunks[2].x, chunks[2].y, widget_width, chunks[2].height),
        status: chunks[3],
    }
}

impl UiLayout {
    pub fn input_hit(&self, column: u16, row: u16) -> bool {
        self.input.contains(Position::new(column, row))
    }

    /// Maps a terminal position to a rendered dropdown row. `rendered_rows`
    /// is how many suggestion rows are currently drawn; the dropdown block
    /// is bordered, so content starts one cell in.
    pub fn suggestion_hit(&self, rendered_rows: usize, column: u16, row: u16) -> Option<usize> {
        if rendered_rows == 0 {
            return None;
        }

        let inner = self.dropdown_rect(rendered_rows);
        let content = Rect::new(
            inner.x.saturating_add(1),
            inner.y.saturating_add(1),
            inner.width.saturating_sub(2),
            inner.height.saturating_sub(2),
        );
        if !content.contains(Position::new(column, row)) {
            return None;
        }

        let offset = usize::from(row - content.y);
        (offset < rendered_rows).then_some(offset)
    }

    /// Outer rect of the dropdown block for `rendered_rows` content rows.
    pub fn dropdown_rect(&self, rendered_rows: usize) -> Rect {
        let height = (rendered_rows as u16)
            .saturating_add(2)
            .min(self.suggestions.height);
        Rect::new(
            self.suggestions.x,
            self.suggestions.y,
            self.suggestions.width,
            height,
        )
    }
}
