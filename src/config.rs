//! Configuration loading and per-field precedence for rui.
//!
//! The config file is a small flat JSON record:
//!
//! ```text
//! {"notify": bool, "editor": string, "flake": string, "notifier": string}
//! ```
//!
//! It lives at `$XDG_CONFIG_HOME/rui/config.json` unless `RUI_CONFIG`
//! points somewhere else. Loading never fails: a missing, unreadable, or
//! malformed file degrades to all defaults (with a warning for the latter
//! two). Config-file values are defaults only; at the point of use each
//! field is resolved as CLI flag > environment variable > config value >
//! hard-coded default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::commands::warn;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether to send desktop notifications.
    pub notify: bool,
    /// Editor launched by `rui edit`.
    pub editor: String,
    /// Flake reference passed to the native tools.
    pub flake: String,
    /// Notification helper, `notify-send` when empty.
    pub notifier: String,
}

impl Config {
    /// Config file location: `RUI_CONFIG` override, else
    /// `<config-home>/rui/config.json`.
    pub fn path() -> PathBuf {
        match env_non_empty("RUI_CONFIG") {
            Some(path) => PathBuf::from(path),
            None => dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from(".config"))
                .join("rui/config.json"),
        }
    }

    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn(&format!(
                    "Could not read {}: {}. Using default configuration.",
                    path.display(),
                    e
                ));
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn(&format!(
                    "Could not parse {}: {}. Using default configuration.",
                    path.display(),
                    e
                ));
                Self::default()
            }
        }
    }

    /// Flake reference: `$FLAKE` > config `flake` > empty.
    pub fn flake(&self) -> String {
        resolve(None, "FLAKE", &self.flake, "")
    }

    /// Notification helper name: config `notifier` > `notify-send`.
    pub fn notifier(&self) -> String {
        if self.notifier.is_empty() {
            "notify-send".to_string()
        } else {
            self.notifier.clone()
        }
    }

    /// Editor for `rui edit`: config `editor` > `$FLAKE_EDITOR` > `$EDITOR`.
    pub fn editor(&self) -> Option<String> {
        if !self.editor.is_empty() {
            return Some(self.editor.clone());
        }
        env_non_empty("FLAKE_EDITOR").or_else(|| env_non_empty("EDITOR"))
    }
}

/// Resolve a setting by precedence: explicit flag > environment variable >
/// config-file value > literal default. Empty strings count as unset at
/// every tier except the flag, which wins whenever it was passed.
pub fn resolve(flag: Option<&str>, env_name: &str, file_value: &str, default: &str) -> String {
    if let Some(value) = flag {
        return value.to_string();
    }
    if let Some(value) = env_non_empty(env_name) {
        return value;
    }
    if !file_value.is_empty() {
        return file_value.to_string();
    }
    default.to_string()
}

pub fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
