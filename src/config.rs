// File: src/config.rs
use crate::core::engine::{EngineOptions, ErrorPolicy};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// User settings, read from a JSON file. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File extension picked up when converting a directory.
    pub extension: String,
    pub lowercase: bool,
    pub on_error: ErrorPolicy,
    /// Replace files in place without asking.
    pub assume_yes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: ".txt".to_string(),
            lowercase: false,
            on_error: ErrorPolicy::Keep,
            assume_yes: false,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&contents).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            lowercase: self.lowercase,
            on_error: self.on_error,
        }
    }
}
