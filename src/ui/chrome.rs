use ratatui::Frame;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::picker::{Phase, PickerView};

use super::layout::UiLayout;

pub fn draw_chrome(frame: &mut Frame<'_>, layout: UiLayout, view: &PickerView) {
    let header_style = match view.phase {
        Phase::Chosen => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        Phase::Idle | Phase::Editing => Style::default().fg(Color::DarkGray),
    };
    frame.render_widget(
        Paragraph::new(view.header.clone()).style(header_style),
        layout.header,
    );

    let hints = match view.phase {
        Phase::Idle | Phase::Chosen => "enter/i: search | q: quit",
        Phase::Editing => "up/down: move | enter/click: pick | esc: close",
    };
    let status_text = format!(
        "{} | {} match{} | {}",
        view.phase.as_str(),
        view.total_matches,
        if view.total_matches == 1 { "" } else { "es" },
        hints
    );
    frame.render_widget(
        Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray)),
        layout.status,
    );
}

/// Replaces the status line, used for transient input-stream errors.
pub fn draw_notice(frame: &mut Frame<'_>, layout: UiLayout, message: &str) {
    frame.render_widget(
        Paragraph::new(message.to_string()).style(Style::default().fg(Color::Red)),
        layout.status,
    );
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::picker::{Phase, PickerView};
    use crate::ui::layout::split_layout;

    use super::draw_chrome;

    fn view(phase: Phase, header: &str) -> PickerView {
        PickerView {
            header: header.to_string(),
            input: String::new(),
            cursor: 0,
            focused: matches!(phase, Phase::Editing),
            suggestions_open: false,
            no_matches: false,
            total_matches: 24,
            window_start: 0,
            rows: Vec::new(),
            phase,
        }
    }

    #[test]
    fn chrome_renders_header_and_status_line() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("test terminal should initialize");
        terminal
            .draw(|frame| {
                let layout = split_layout(frame.area());
                draw_chrome(
                    frame,
                    layout,
                    &view(Phase::Chosen, "Pieter Haverbeke (1602 - 1642)"),
                );
            })
            .expect("draw should pass");

        let buffer = terminal.backend().buffer();
        let top_row: String = (0..buffer.area.width)
            .map(|x| buffer[(x, 0)].symbol())
            .collect::<Vec<_>>()
            .join("");
        assert!(top_row.starts_with("Pieter Haverbeke (1602 - 1642)"));

        let status_row: String = (0..buffer.area.width)
            .map(|x| buffer[(x, 23)].symbol())
            .collect::<Vec<_>>()
            .join("");
        assert!(status_row.contains("CHOSEN | 24 matches"));
    }

    #[test]
    fn chrome_shows_unselected_header_outside_chosen_phase() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("test terminal should initialize");
        terminal
            .draw(|frame| {
                let layout = split_layout(frame.area());
                draw_chrome(frame, layout, &view(Phase::Idle, "No selected person"));
            })
            .expect("draw should pass");

        let buffer = terminal.backend().buffer();
        let top_row: String = (0..buffer.area.width)
            .map(|x| buffer[(x, 0)].symbol())
            .collect::<Vec<_>>()
            .join("");
        assert!(top_row.starts_with("No selected person"));
    }
}
