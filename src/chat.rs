//! Chat service collaborator
//!
//! HTTP client for the chat endpoint, the background worker that runs it,
//! and the request state the UI reads.

mod chat_state;
mod client;
mod worker;

pub use chat_state::{ChatOutcome, ChatRequest, ChatState};
pub use client::{ChatClient, ChatError};
pub use worker::spawn_worker;
