//! CLI argument and options parsing.

use crate::error::{CliError, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

/// Protokol - extract structured fields from Bulgarian parliamentary
/// transcripts and print JSON to stdout.
#[derive(Debug, Parser)]
#[command(name = "protokol")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the transcript file to analyze
    pub transcript_file: PathBuf,

    /// JSON options blob, e.g. '{"extraction_type": "amendments"}'
    pub options: Option<String>,
}

/// Recognized keys of the JSON options blob.
///
/// Unrecognized keys are ignored so the PHP caller can pass extra hints
/// without breaking this tool.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct InvokeOptions {
    /// Explicit API credential, overrides environment and fallback file
    #[serde(default)]
    pub api_key: Option<String>,

    /// One of the four routine names or "all" (the default)
    #[serde(default)]
    pub extraction_type: Option<String>,
}

impl InvokeOptions {
    /// Parse the optional options argument
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        match raw {
            Some(blob) => serde_json::from_str(blob).map_err(CliError::InvalidOptions),
            None => Ok(Self::default()),
        }
    }

    /// The effective extraction-type selector
    pub fn extraction_type(&self) -> &str {
        self.extraction_type.as_deref().unwrap_or("all")
    }
}
