//! Terminal playground for a chat-completion endpoint
//!
//! Type a prompt, submit it, and read the generated text. The request runs
//! on a background worker while the form shows a working indicator.

pub mod app;
pub mod chat;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;

#[cfg(test)]
mod test_utils;
