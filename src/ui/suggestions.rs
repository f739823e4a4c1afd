use ratatui::Frame;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::picker::PickerView;

use super::layout::UiLayout;

const PLACEHOLDER: &str = "Enter a part of the name";
const NO_MATCHES: &str = "No matching suggestions";

pub fn draw_input_box(frame: &mut Frame<'_>, layout: UiLayout, view: &PickerView) {
    let border_style = if view.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).style(border_style);
    let inner = block.inner(layout.input);
    frame.render_widget(block, layout.input);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let line = if view.input.is_empty() {
        build_placeholder_line(view.focused)
    } else {
        build_input_line(&view.input, view.cursor, inner.width as usize, view.focused)
    };
    frame.render_widget(Paragraph::new(line), inner);
}

pub fn draw_suggestions(frame: &mut Frame<'_>, layout: UiLayout, view: &PickerView) {
    if !view.suggestions_open || layout.suggestions.height < 3 {
        return;
    }

    if view.no_matches {
        let popup = layout.dropdown_rect(1);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);
        frame.render_widget(
            Paragraph::new(NO_MATCHES).style(Style::default().fg(Color::Red)),
            inner,
        );
        return;
    }

    let rows = rendered_rows(view, &layout);
    if rows == 0 {
        return;
    }
    let popup = layout.dropdown_rect(rows);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut lines = Vec::new();
    for row in view.rows.iter().take(rows) {
        let mut spans = Vec::new();
        if row.highlighted {
            spans.push(Span::styled(" ┃ ", Style::default().fg(Color::White)));
        } else {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::raw(row.label.clone()));
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            row.detail.clone(),
            Style::default().fg(Color::DarkGray),
        ));

        // Pad so the highlight background covers the full row width.
        let used = 3 + row.label.width() + 2 + row.detail.width();
        let padding = " ".repeat((inner.width as usize).saturating_sub(used));
        spans.push(Span::raw(padding));

        let line_style = if row.highlighted {
            Style::default().bg(Color::Rgb(45, 45, 50))
        } else {
            Style::default()
        };
        lines.push(Line::from(spans).style(line_style));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

/// How many suggestion rows the dropdown actually shows. The mouse
/// hit-test must use the same count as the renderer.
pub fn rendered_rows(view: &PickerView, layout: &UiLayout) -> usize {
    if !view.suggestions_open || view.no_matches {
        return 0;
    }
    let fit = layout.suggestions.height.saturating_sub(2) as usize;
    view.rows.len().min(fit)
}

fn build_placeholder_line(focused: bool) -> Line<'static> {
    let mut spans = Vec::new();
    if focused {
        spans.push(Span::styled(
            " ".to_string(),
            Style::default().add_modifier(Modifier::REVERSED),
        ));
        spans.push(Span::styled(
            PLACEHOLDER.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            PLACEHOLDER.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Software caret to avoid terminal cursor ghosting; the text window
/// scrolls horizontally to keep the caret visible.
fn build_input_line(input: &str, cursor: usize, width: usize, focused: bool) -> Line<'static> {
    let chars: Vec<char> = input.chars().collect();
    let char_count = chars.len();
    let cursor = cursor.min(char_count);
    let text_width = width.max(1);

    let mut start = 0usize;
    if cursor >= text_width {
        start = cursor.saturating_sub(text_width.saturating_sub(1));
    }
    if start > char_count {
        start = char_count;
    }

    let end = (start + text_width).min(char_count);
    let mut visible: Vec<char> = chars[start..end].to_vec();
    if focused && visible.len() < text_width {
        visible.extend(std::iter::repeat_n(' ', text_width - visible.len()));
    }

    if !focused {
        return Line::from(visible.into_iter().collect::<String>());
    }

    let caret_idx = cursor
        .saturating_sub(start)
        .min(text_width.saturating_sub(1));
    let mut spans = Vec::new();
    for (idx, ch) in visible.into_iter().enumerate() {
        if idx == caret_idx {
            spans.push(Span::styled(
                ch.to_string(),
                Style::default().add_modifier(Modifier::REVERSED),
            ));
        } else {
            spans.push(Span::raw(ch.to_string()));
        }
    }
    Line::from(spans)
}
