use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ShellError, ShellResult};

/// Environment variable the native binary reads a config path from.
pub const CONFIG_ENV_VAR: &str = "TUTOR_SHELL_CONFIG";

/// Window and layout settings for the shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields keep their default values
pub struct ShellConfig {
    pub window_title: String,
    pub initial_window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Widest the navigation and content column may grow
    pub content_max_width: f32,
    /// Below this width the navigation stacks vertically with short labels
    pub compact_breakpoint: f32,
    pub show_debug_window: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            window_title: "AI Study Buddy".to_owned(),
            initial_window_size: [1024.0, 768.0],
            min_window_size: [360.0, 480.0],
            content_max_width: 896.0,
            compact_breakpoint: 640.0,
            show_debug_window: false,
        }
    }
}

impl ShellConfig {
    pub fn from_json_str(json: &str) -> ShellResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> ShellResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ShellError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load from `path` if given, falling back to defaults on any error.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("{err}; using default config");
                Self::default()
            }
        }
    }
}
