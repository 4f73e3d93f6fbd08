//! Prompt field rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};

use crate::app::App;

/// Render the prompt text box
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    // Dim the border while a request is outstanding
    let border_color = if app.is_busy() {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    app.input.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Prompt ")
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(&app.input.textarea, area);
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
