//! Chat request state
//!
//! Tracks the in-flight flag and the last response text, and holds the
//! channel handles used to talk to the worker thread.

use std::sync::mpsc::{Receiver, TryRecvError};

use tokio::sync::mpsc::UnboundedSender;

use super::client::ChatError;

/// Request message sent to the chat worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    /// Trimmed, non-empty prompt
    pub prompt: String,
}

/// Outcome of one settled request: the generated text or the failure reason
pub type ChatOutcome = Result<String, ChatError>;

/// Chat request state
///
/// There is no request id: outcomes are applied in the order they arrive, so
/// with overlapping requests the last one to settle wins.
#[derive(Debug, Default)]
pub struct ChatState {
    /// True while a request is outstanding
    pub loading: bool,
    /// Last successful response (empty until the first success)
    pub response: String,
    /// Channel to send requests to the worker thread
    pub request_tx: Option<UnboundedSender<ChatRequest>>,
    /// Channel to receive outcomes from the worker thread
    pub response_rx: Option<Receiver<ChatOutcome>>,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<ChatRequest>,
        response_rx: Receiver<ChatOutcome>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Send a request through the channel
    ///
    /// Returns true if the worker accepted it. Only then is the state
    /// marked as loading.
    pub fn send_request(&mut self, prompt: String) -> bool {
        let Some(tx) = &self.request_tx else {
            return false;
        };

        if tx.send(ChatRequest { prompt }).is_err() {
            return false;
        }
        self.loading = true;
        true
    }

    /// Apply one settled outcome
    ///
    /// Any settle clears the loading flag. Only a success touches the
    /// response.
    pub fn settle(&mut self, outcome: &ChatOutcome) {
        self.loading = false;
        if let Ok(text) = outcome {
            self.response.clone_from(text);
        }
    }

    /// Drain and apply every outcome the worker has delivered
    ///
    /// If the worker disconnects while a request is outstanding, that request
    /// settles as `ChatError::WorkerUnavailable`.
    pub fn poll_response(&mut self) -> Vec<ChatOutcome> {
        let mut settled = Vec::new();

        let Some(rx) = &self.response_rx else {
            return settled;
        };

        let mut disconnected = false;
        loop {
            match rx.try_recv() {
                Ok(outcome) => settled.push(outcome),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        for outcome in &settled {
            self.settle(outcome);
        }

        if disconnected {
            log::debug!("Chat worker disconnected");
            self.request_tx = None;
            self.response_rx = None;
            if self.loading {
                let outcome = Err(ChatError::WorkerUnavailable);
                self.settle(&outcome);
                settled.push(outcome);
            }
        }

        settled
    }

    /// Whether the response panel has anything to show
    pub fn has_response(&self) -> bool {
        !self.response.is_empty()
    }
}

#[cfg(test)]
#[path = "chat_state_tests.rs"]
mod chat_state_tests;
