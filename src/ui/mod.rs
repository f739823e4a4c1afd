mod chrome;
mod layout;
mod suggestions;

pub use chrome::{draw_chrome, draw_notice};
pub use layout::{UiLayout, split_layout};
pub use suggestions::{draw_input_box, draw_suggestions, rendered_rows};

use ratatui::Frame;

use crate::picker::PickerView;

/// Draws one full frame and returns the layout used, so the caller can
/// hit-test later mouse events against what is actually on screen.
pub fn draw_frame(frame: &mut Frame<'_>, view: &PickerView) -> UiLayout {
    let layout = split_layout(frame.area());
    draw_chrome(frame, layout, view);
    draw_input_box(frame, layout, view);
    draw_suggestions(frame, layout, view);
    layout
}
