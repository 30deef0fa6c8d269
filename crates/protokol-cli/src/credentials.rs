//! Credential resolution.
//!
//! The API credential is looked up in priority order: explicit option,
//! environment variable, then a `.env` file shared with the sibling PHP
//! application. The file path and variable name are pluggable so the
//! fallback source can be swapped without touching extraction logic.

use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the model credential.
pub const CREDENTIAL_ENV_VAR: &str = "GEMINI_API_KEY";

/// Resolves the API credential from the configured sources.
pub struct CredentialResolver {
    explicit: Option<String>,
    env_var: String,
    fallback_file: PathBuf,
}

impl CredentialResolver {
    /// Create a resolver with the default environment variable and the
    /// default fallback file location.
    pub fn new(explicit: Option<String>) -> Self {
        Self {
            explicit,
            env_var: CREDENTIAL_ENV_VAR.to_string(),
            fallback_file: default_fallback_file(),
        }
    }

    /// Override the environment variable name (used by tests).
    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = name.into();
        self
    }

    /// Override the fallback file path.
    pub fn with_fallback_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.fallback_file = path.into();
        self
    }

    /// Return the first non-empty credential in priority order, or `None`.
    pub fn resolve(&self) -> Option<String> {
        if let Some(key) = self.explicit.as_deref().filter(|k| !k.is_empty()) {
            return Some(key.to_string());
        }

        if let Ok(key) = std::env::var(&self.env_var) {
            if !key.is_empty() {
                return Some(key);
            }
        }

        self.read_fallback_file()
    }

    /// Scan the fallback file for a `<VAR>=` line, tolerant of quoting.
    fn read_fallback_file(&self) -> Option<String> {
        let content = fs::read_to_string(&self.fallback_file).ok()?;
        let prefix = format!("{}=", self.env_var);

        for line in content.lines() {
            if let Some(value) = line.trim_start().strip_prefix(&prefix) {
                let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }

        None
    }
}

/// Default fallback location: a `.env` file one directory above the
/// executable, matching the sibling application's layout.
pub fn default_fallback_file() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| {
            exe.parent()
                .and_then(Path::parent)
                .map(Path::to_path_buf)
        })
        .unwrap_or_else(|| PathBuf::from(".."))
        .join(".env")
}
