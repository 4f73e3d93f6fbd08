use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::App;
use crate::input::input_render;

pub const TITLE: &str = "LLM Playground";
pub const SUBMIT_LABEL: &str = "[ Generate Response ]";
pub const BUSY_LABEL: &str = "[ Generating... ]";

/// Prompt box height: five text rows plus borders
const PROMPT_HEIGHT: u16 = 7;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1),             // Heading
            Constraint::Length(1),             // Spacer
            Constraint::Length(PROMPT_HEIGHT), // Prompt
            Constraint::Length(1),             // Submit control
            Constraint::Length(1),             // Spacer
            Constraint::Min(0),                // Response panel
            Constraint::Length(1),             // Key hints
        ])
        .split(frame.area());

        render_heading(frame, layout[0]);
        input_render::render_field(self, frame, layout[2]);
        self.render_submit_control(frame, layout[3]);

        // Hidden entirely until there is something to show
        if self.chat.has_response() {
            self.render_response_panel(frame, layout[5]);
        }

        render_hints(frame, layout[6]);
    }

    /// Render the submit control, disabled while a request is outstanding
    fn render_submit_control(&self, frame: &mut Frame, area: Rect) {
        let (label, style) = if self.is_busy() {
            (
                BUSY_LABEL,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            (
                SUBMIT_LABEL,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )
        };

        let button = Paragraph::new(Line::from(Span::styled(label, style)))
            .alignment(Alignment::Center);
        frame.render_widget(button, area);
    }

    /// Render the response panel
    fn render_response_panel(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Response ")
            .border_style(Style::default().fg(Color::Green));

        let text = Paragraph::new(self.chat.response.as_str()).wrap(Wrap { trim: false });

        // Keep the scroll offset inside the wrapped text
        let inner_width = area.width.saturating_sub(2);
        let inner_height = area.height.saturating_sub(2);
        let max_scroll = wrapped_row_count(&text, inner_width).saturating_sub(inner_height);
        self.response_scroll = self.response_scroll.min(max_scroll);

        let content = text.block(block).scroll((self.response_scroll, 0));

        frame.render_widget(content, area);
    }
}

fn render_heading(frame: &mut Frame, area: Rect) {
    let heading = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, area);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);
    let hints = Line::from(vec![
        Span::styled("Ctrl+S", key_style),
        Span::styled(" submit  ", text_style),
        Span::styled("PgUp/PgDn", key_style),
        Span::styled(" scroll  ", text_style),
        Span::styled("Esc", key_style),
        Span::styled(" quit", text_style),
    ]);
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), area);
}

/// Rows a block-less paragraph takes when wrapped to `width` columns
fn wrapped_row_count(paragraph: &Paragraph, width: u16) -> u16 {
    u16::try_from(paragraph.line_count(width)).unwrap_or(u16::MAX)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
