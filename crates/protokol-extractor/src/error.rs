//! Error types for the extractor

use thiserror::Error;

/// Errors that can occur during extraction
///
/// Routine failures are deliberately not represented here: the dispatcher
/// converts every provider or normalization failure into an
/// [`ExtractionOutcome`](crate::ExtractionOutcome) value so that batch
/// extraction keeps going on partial failure.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Extraction-type selector not in the known set
    #[error("Unknown extraction type: {0}")]
    UnknownType(String),
}

/// Render an error and its source chain, most recent first
///
/// This is the closest Rust analog to the stack traces the consuming
/// application expects in the `traceback` field.
pub(crate) fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str("\ncaused by: ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
