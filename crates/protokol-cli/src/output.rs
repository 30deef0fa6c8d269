//! Output rendering for the CLI.
//!
//! Exactly one JSON document goes to stdout per invocation: the
//! pretty-printed report on success, or a single-line error object before
//! exiting non-zero. serde_json leaves non-ASCII characters unescaped, so
//! Cyrillic transcript text passes through as UTF-8.

use crate::error::{CliError, Result};
use protokol_extractor::ExtractionReport;

/// Render the extraction report as a pretty-printed JSON document.
pub fn render_report(report: &ExtractionReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| CliError::Extraction(e.to_string()))
}

/// Render a fatal error as a single-line JSON object.
pub fn error_line(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use protokol_extractor::ExtractionOutcome;
    use serde_json::json;

    #[test]
    fn test_error_line_is_single_line() {
        let line = error_line("Failed to read file: no such file");
        assert!(!line.contains('\n'));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&line).unwrap(),
            json!({"error": "Failed to read file: no such file"})
        );
    }

    #[test]
    fn test_report_is_pretty_printed() {
        let report = ExtractionReport::Single(ExtractionOutcome::raw("резултат"));
        let rendered = render_report(&report).unwrap();
        assert!(rendered.contains('\n'));
        // Non-ASCII left unescaped
        assert!(rendered.contains("резултат"));
        assert!(!rendered.contains("\\u"));
    }
}
