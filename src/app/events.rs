use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::{App, Submission};

/// Lines moved per PageUp/PageDown in the response panel
const SCROLL_STEP: u16 = 5;

impl App {
    /// Wait up to `timeout` for a terminal event and handle it
    ///
    /// Returns without blocking longer than `timeout` so the caller can
    /// poll the chat worker between frames.
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if event::poll(timeout)? {
            self.handle_event(event::read()?);
        }
        Ok(())
    }

    /// Handle a single terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
    }

    /// Handle paste events (bracketed paste)
    pub fn handle_paste_event(&mut self, text: String) {
        self.input.textarea.insert_str(text);
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        // Everything else edits the prompt
        self.input.textarea.input(key);
    }

    /// Handle keys that are not text editing
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('s') if ctrl => {
                self.submit_from_keyboard();
                true
            }
            KeyCode::Enter if alt => {
                self.submit_from_keyboard();
                true
            }
            KeyCode::PageDown => {
                self.response_scroll = self.response_scroll.saturating_add(SCROLL_STEP);
                true
            }
            KeyCode::PageUp => {
                self.response_scroll = self.response_scroll.saturating_sub(SCROLL_STEP);
                true
            }
            _ => false,
        }
    }

    /// The submit control is disabled while a request is outstanding
    fn submit_from_keyboard(&mut self) {
        if self.is_busy() {
            log::debug!("Submit ignored, request already in flight");
            return;
        }

        if self.submit() == Submission::Skipped {
            log::debug!("Submit ignored, prompt is empty");
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
