//! Configuration loading
//!
//! Reads `config.toml` from the platform config directory (or an explicit
//! path). A missing file yields the default configuration.

mod types;

use std::path::{Path, PathBuf};

use crate::error::PlaygroundError;

pub use types::{ChatConfig, Config, DEFAULT_ENDPOINT, LogConfig};

/// Default location: `<config dir>/llm-playground/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("llm-playground").join("config.toml"))
}

/// Load configuration from `path`, or from the default location when `None`
///
/// A file that does not exist is not an error. A file that exists but cannot
/// be read or parsed is.
pub fn load_config(path: Option<&Path>) -> Result<Config, PlaygroundError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => return Ok(Config::default()),
        },
    };

    if !path.exists() {
        log::debug!("No config file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path).map_err(|source| PlaygroundError::ConfigRead {
        path: path.clone(),
        source,
    })?;

    parse_config(&contents, &path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config, PlaygroundError> {
    toml::from_str(contents).map_err(|e| PlaygroundError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}
