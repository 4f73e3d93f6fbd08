#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Sender};
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::app::App;
    use crate::chat::{ChatOutcome, ChatRequest, ChatState};

    /// App with no worker behind it
    pub fn test_app() -> App {
        App::with_chat(ChatState::new())
    }

    /// App whose worker ends are held by the test
    pub fn connected_app() -> (App, UnboundedReceiver<ChatRequest>, Sender<ChatOutcome>) {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        let mut chat = ChatState::new();
        chat.set_channels(request_tx, response_rx);
        (App::with_chat(chat), request_rx, response_tx)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Poll the app until `count` outcomes settled or the timeout passes
    ///
    /// Returns the outcomes seen.
    pub async fn wait_for_outcomes(
        app: &mut App,
        count: usize,
        timeout_ms: u64,
    ) -> Vec<ChatOutcome> {
        let deadline = tokio::time::Instant::now() + Duration::from_millis(timeout_ms);
        let mut outcomes = Vec::new();

        while outcomes.len() < count && tokio::time::Instant::now() < deadline {
            outcomes.extend(app.poll_chat());
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        outcomes
    }
}
