//! Error types for the CLI application.
//!
//! Every variant here is fatal: it is printed as a single-line JSON error
//! object and the process exits with code 1. Per-routine failures never
//! reach this type; they are embedded in the report by the extractor.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Fatal, user-visible CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing or unparseable command-line arguments
    #[error("Usage: protokol <transcript_file> [<json_options>]")]
    Usage,

    /// Transcript file could not be read
    #[error("Failed to read file: {0}")]
    ReadTranscript(#[source] std::io::Error),

    /// Options blob is not valid JSON
    #[error("Failed to parse options: {0}")]
    InvalidOptions(#[source] serde_json::Error),

    /// No credential found in options, environment, or fallback file
    #[error("GEMINI_API_KEY not found in environment or .env file")]
    MissingCredential,

    /// Provider could not be constructed
    #[error("Failed to initialize extractor: {0}")]
    Init(String),

    /// Top-level extraction or serialization failure
    #[error("Extraction failed: {0}")]
    Extraction(String),
}
