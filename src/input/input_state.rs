use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

pub const PLACEHOLDER: &str = "Enter your prompt here...";

/// Prompt text box state
///
/// The text is multi-line; newlines are part of the prompt.
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        configure(&mut textarea);
        Self { textarea }
    }

    /// Full prompt text, lines joined with `\n`
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Replace the prompt verbatim and put the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        let mut textarea = TextArea::new(lines);
        configure(&mut textarea);
        textarea.move_cursor(CursorMove::Bottom);
        textarea.move_cursor(CursorMove::End);
        self.textarea = textarea;
    }

    /// Prompt with surrounding whitespace removed, or None if nothing is left
    pub fn trimmed(&self) -> Option<String> {
        let text = self.text();
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn configure(textarea: &mut TextArea<'static>) {
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Prompt ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    textarea.set_placeholder_text(PLACEHOLDER);
    textarea.set_placeholder_style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    );
    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
