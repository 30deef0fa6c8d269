//! Protokol Extractor
//!
//! Pulls structured fields out of Bulgarian parliamentary transcripts by
//! prompting a hosted LLM and reshaping its response into a JSON-serializable
//! report.
//!
//! # Architecture
//!
//! ```text
//! Transcript text → PromptBuilder → LlmProvider → Normalizer → ExtractionReport
//! ```
//!
//! # Key Features
//!
//! - **Four extraction routines**: bill discussions, committee decisions,
//!   amendments, speaker statements — one parametrized routine driven by a
//!   per-type prompt table
//! - **Failure isolation**: a routine's failure is embedded in its own result;
//!   sibling routines keep running when the caller asks for everything at once
//! - **Tolerant normalization**: the model's response is reshaped into one of
//!   three recognized shapes and never crashes the process
//!
//! # Example Usage
//!
//! ```
//! use protokol_extractor::ProtocolExtractor;
//! use protokol_llm::MockProvider;
//!
//! # async fn example() {
//! let extractor = ProtocolExtractor::new(MockProvider::new("[]"));
//! let report = extractor
//!     .extract_protocol_changes("Председателят откри заседанието.", "all")
//!     .await;
//! let json = serde_json::to_string_pretty(&report).unwrap();
//! # let _ = json;
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod extractor;
mod normalize;
mod prompt;
mod types;


pub use error::ExtractorError;
pub use extractor::ProtocolExtractor;
pub use normalize::normalize_response;
pub use prompt::{spec_for, FewShotExample, PromptBuilder, PromptSpec};
pub use types::{
    ExtractionOutcome, ExtractionRecord, ExtractionReport, ExtractionType, FullReport,
    NormalizedItem,
};
