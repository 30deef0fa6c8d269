//! Request and response types for extraction

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// The four extraction routines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionType {
    /// Bill metadata: number, title, reading, outcome
    BillDiscussions,
    /// Committee outcomes and resolutions
    CommitteeDecisions,
    /// Proposed amendments and their status
    Amendments,
    /// Speaker names, affiliations, positions
    SpeakerStatements,
}

impl ExtractionType {
    /// All routines, in dispatch order
    pub const ALL: [ExtractionType; 4] = [
        ExtractionType::BillDiscussions,
        ExtractionType::CommitteeDecisions,
        ExtractionType::Amendments,
        ExtractionType::SpeakerStatements,
    ];

    /// The routine name used as a selector and as a report key
    pub fn name(self) -> &'static str {
        match self {
            ExtractionType::BillDiscussions => "bill_discussions",
            ExtractionType::CommitteeDecisions => "committee_decisions",
            ExtractionType::Amendments => "amendments",
            ExtractionType::SpeakerStatements => "speaker_statements",
        }
    }
}

impl fmt::Display for ExtractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExtractionType {
    type Err = ExtractorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bill_discussions" => Ok(ExtractionType::BillDiscussions),
            "committee_decisions" => Ok(ExtractionType::CommitteeDecisions),
            "amendments" => Ok(ExtractionType::Amendments),
            "speaker_statements" => Ok(ExtractionType::SpeakerStatements),
            other => Err(ExtractorError::UnknownType(other.to_string())),
        }
    }
}

/// One structured fact pulled from the transcript
///
/// `attributes` and `description` are omitted from the JSON output when
/// absent, matching what the consuming application expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    /// Field label, e.g. "bill_number"
    pub extraction_class: String,

    /// The literal matched text from the transcript
    pub extraction_text: String,

    /// Optional attribute mapping supplied by the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ExtractionRecord {
    /// Create a record with just a label and matched text
    pub fn new(extraction_class: impl Into<String>, extraction_text: impl Into<String>) -> Self {
        Self {
            extraction_class: extraction_class.into(),
            extraction_text: extraction_text.into(),
            attributes: None,
            description: None,
        }
    }
}

/// One element of a normalized extraction list
///
/// The model usually returns record objects, but anything unrecognizable in
/// an otherwise valid list is kept as its string form rather than dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NormalizedItem {
    /// A well-formed extraction record
    Record(ExtractionRecord),
    /// Stringified form of a list element that is not a record
    Text(String),
}

/// Result of one extraction routine
///
/// Exactly one of three JSON shapes is produced per routine:
/// `{"extractions": [...]}`, `{"raw_result": "..."}`, or
/// `{"error": "...", ...}`. Failures are values, never panics or `Err`s,
/// so one routine's failure cannot abort its siblings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtractionOutcome {
    /// The model returned a recognizable list of records
    Extractions {
        /// Flattened records in the order the model returned them
        extractions: Vec<NormalizedItem>,
    },

    /// The response shape was unrecognized; preserved verbatim
    Raw {
        /// String representation of the raw response
        raw_result: String,
    },

    /// The routine failed; details embedded for the caller
    Failed {
        /// Human-readable failure message
        error: String,

        /// Raw response, when normalization had one to report
        #[serde(skip_serializing_if = "Option::is_none")]
        raw_result: Option<String>,

        /// Rendered error chain for operator debugging
        #[serde(skip_serializing_if = "Option::is_none")]
        traceback: Option<String>,
    },
}

impl ExtractionOutcome {
    /// A successful outcome with normalized records
    pub fn extractions(items: Vec<NormalizedItem>) -> Self {
        ExtractionOutcome::Extractions { extractions: items }
    }

    /// Fallback outcome preserving an unrecognized response
    pub fn raw(result: impl Into<String>) -> Self {
        ExtractionOutcome::Raw {
            raw_result: result.into(),
        }
    }

    /// A failure with just a message (no traceback)
    pub fn failed(error: impl Into<String>) -> Self {
        ExtractionOutcome::Failed {
            error: error.into(),
            raw_result: None,
            traceback: None,
        }
    }

    /// A failure carrying the error's rendered source chain
    pub fn failed_with_traceback(err: &(dyn std::error::Error + 'static)) -> Self {
        ExtractionOutcome::Failed {
            error: err.to_string(),
            raw_result: None,
            traceback: Some(crate::error::error_chain(err)),
        }
    }

    /// The failure message, if this outcome is a failure
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ExtractionOutcome::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Results of all four routines, keyed by routine name
///
/// Field order matches dispatch order so the serialized document lists the
/// routines the way the consuming application expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullReport {
    /// Bill discussion extractions
    pub bill_discussions: ExtractionOutcome,
    /// Committee decision extractions
    pub committee_decisions: ExtractionOutcome,
    /// Amendment extractions
    pub amendments: ExtractionOutcome,
    /// Speaker statement extractions
    pub speaker_statements: ExtractionOutcome,
}

/// Top-level result of a dispatch call
///
/// A single routine's outcome when one routine was selected (including the
/// unknown-selector error value), or the full per-routine mapping for "all".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtractionReport {
    /// Result of a single routine or an unknown-selector error
    Single(ExtractionOutcome),
    /// Results of all four routines
    All(Box<FullReport>),
}
