//! Protokol CLI library.
//!
//! Wires argument parsing, credential resolution, and the extraction
//! dispatcher together. The binary in `main.rs` only handles process-level
//! concerns (tracing setup, printing, exit codes); everything testable
//! lives here.

pub mod cli;
pub mod credentials;
pub mod error;
pub mod output;

pub use cli::{Cli, InvokeOptions};
pub use credentials::CredentialResolver;
pub use error::{CliError, Result};

use protokol_extractor::ProtocolExtractor;
use protokol_llm::GeminiProvider;
use std::fs;

/// Run one invocation end to end and return the JSON document to print.
///
/// Fatal conditions (unreadable transcript, bad options, missing
/// credential, provider construction failure) surface as `Err`; per-routine
/// extraction failures are embedded inside the returned document.
pub async fn run(cli: Cli) -> Result<String> {
    let content =
        fs::read_to_string(&cli.transcript_file).map_err(CliError::ReadTranscript)?;

    let options = InvokeOptions::parse(cli.options.as_deref())?;

    let api_key = CredentialResolver::new(options.api_key.clone())
        .resolve()
        .ok_or(CliError::MissingCredential)?;

    let provider = GeminiProvider::new(api_key).map_err(|e| CliError::Init(e.to_string()))?;
    let extractor = ProtocolExtractor::new(provider);

    let report = extractor
        .extract_protocol_changes(&content, options.extraction_type())
        .await;

    output::render_report(&report)
}
