use std::sync::mpsc;

use tokio::sync::mpsc::unbounded_channel;

use crate::chat::{ChatOutcome, ChatState, spawn_worker};
use crate::config::Config;
use crate::input::InputState;

/// What `submit()` did with the current prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Prompt was empty after trimming; nothing happened
    Skipped,
    /// Request handed to the worker; the app is busy until it settles
    Sent,
    /// Worker is gone; the prompt was not sent
    Unavailable,
}

/// Application state
///
/// Owns the prompt text, the last response text and the in-flight flag.
pub struct App {
    pub input: InputState,
    pub chat: ChatState,
    pub response_scroll: u16,
    pub should_quit: bool,
}

impl App {
    /// Create a new App talking to the configured chat endpoint
    ///
    /// Spawns the chat worker thread.
    pub fn new(config: &Config) -> Self {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(&config.chat, request_rx, response_tx);

        let mut chat = ChatState::new();
        chat.set_channels(request_tx, response_rx);

        Self::with_chat(chat)
    }

    /// Create an App around an existing chat state
    pub fn with_chat(chat: ChatState) -> Self {
        Self {
            input: InputState::new(),
            chat,
            response_scroll: 0,
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current prompt text, verbatim
    pub fn prompt(&self) -> String {
        self.input.text()
    }

    /// Last response, if any has arrived
    pub fn response(&self) -> Option<&str> {
        self.chat
            .has_response()
            .then_some(self.chat.response.as_str())
    }

    /// True while a request is outstanding
    pub fn is_busy(&self) -> bool {
        self.chat.loading
    }

    /// Replace the prompt text verbatim
    pub fn update_prompt(&mut self, text: &str) {
        self.input.set_text(text);
    }

    /// Send the trimmed prompt to the chat service
    ///
    /// Does not check whether a request is already outstanding; the key
    /// handler does that.
    pub fn submit(&mut self) -> Submission {
        let Some(prompt) = self.input.trimmed() else {
            return Submission::Skipped;
        };

        if self.chat.send_request(prompt) {
            Submission::Sent
        } else {
            log::error!("Chat worker unavailable, prompt not sent");
            Submission::Unavailable
        }
    }

    /// Apply every settled request and hand the outcomes to the caller
    ///
    /// Failures are logged here and otherwise leave the view untouched.
    pub fn poll_chat(&mut self) -> Vec<ChatOutcome> {
        let outcomes = self.chat.poll_response();

        for outcome in &outcomes {
            if outcome.is_ok() {
                self.response_scroll = 0;
            }
            let (level, message) = outcome_record(outcome);
            log::log!(level, "{}", message);
        }

        outcomes
    }
}

/// Level and message recorded in the diagnostic log for a settled request
pub(crate) fn outcome_record(outcome: &ChatOutcome) -> (log::Level, String) {
    match outcome {
        Ok(text) => (
            log::Level::Debug,
            format!("Chat response received ({} chars)", text.chars().count()),
        ),
        Err(e) => (log::Level::Error, e.to_string()),
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
