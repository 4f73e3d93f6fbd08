//! Chat Worker Thread
//!
//! Runs chat requests on a background thread so the UI never blocks.
//! Receives prompts via channel, posts them to the chat endpoint,
//! and sends each outcome back to the main thread.

use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;

use super::chat_state::{ChatOutcome, ChatRequest};
use super::client::ChatClient;
use crate::config::ChatConfig;

/// Spawn the chat worker thread
///
/// The thread owns a single-threaded tokio runtime. Every request becomes
/// its own task, so overlapping requests run side by side and their
/// outcomes arrive in completion order, not submission order.
pub fn spawn_worker(
    config: &ChatConfig,
    request_rx: UnboundedReceiver<ChatRequest>,
    response_tx: Sender<ChatOutcome>,
) -> JoinHandle<()> {
    let config = config.clone();

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to start chat worker runtime: {}", e);
                return;
            }
        };

        let client = ChatClient::from_config(&config);
        runtime.block_on(worker_loop(client, request_rx, response_tx));
    })
}

/// Main worker loop - processes requests until the channel is closed
async fn worker_loop(
    client: ChatClient,
    mut request_rx: UnboundedReceiver<ChatRequest>,
    response_tx: Sender<ChatOutcome>,
) {
    while let Some(request) = request_rx.recv().await {
        log::debug!(
            "Posting prompt ({} chars) to {}",
            request.prompt.chars().count(),
            client.endpoint()
        );

        let client = client.clone();
        let response_tx = response_tx.clone();
        tokio::spawn(async move {
            let outcome = client.complete(&request.prompt).await;
            if response_tx.send(outcome).is_err() {
                log::debug!("Main thread gone, dropping chat outcome");
            }
        });
    }

    log::debug!("Chat worker thread shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
