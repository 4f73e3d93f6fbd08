// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

/// Endpoint of the local chat service
pub const DEFAULT_ENDPOINT: &str = "http://localhost:2108/api/chat";

/// Chat endpoint configuration section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ChatConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        ChatConfig {
            endpoint: default_endpoint(),
        }
    }
}

/// Diagnostic log configuration section
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub log: LogConfig,
}
