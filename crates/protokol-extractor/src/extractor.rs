//! Core extraction dispatcher

use crate::normalize::normalize_response;
use crate::prompt::{spec_for, PromptBuilder};
use crate::types::{ExtractionOutcome, ExtractionReport, ExtractionType, FullReport};
use protokol_llm::LlmProvider;
use tracing::{debug, warn};

/// Selector value that runs every routine
const SELECTOR_ALL: &str = "all";

/// Dispatches transcript text to the extraction routines
///
/// Generic over the provider so production runs against the hosted Gemini
/// API while tests use a deterministic mock. The transcript is passed
/// through unchanged regardless of size; the remote service is the only
/// bound on latency.
pub struct ProtocolExtractor<L> {
    provider: L,
}

impl<L> ProtocolExtractor<L>
where
    L: LlmProvider,
    L::Error: std::error::Error + 'static,
{
    /// Create a new extractor backed by the given provider
    pub fn new(provider: L) -> Self {
        Self { provider }
    }

    /// Run one routine, or all four, depending on the selector
    ///
    /// An unknown selector yields an error-shaped outcome rather than a Rust
    /// error, so the caller can surface the precise message. For `"all"`,
    /// the routines run sequentially and independently: one failure is
    /// embedded in its own slot and never aborts the siblings.
    pub async fn extract_protocol_changes(
        &self,
        text: &str,
        extraction_type: &str,
    ) -> ExtractionReport {
        if extraction_type == SELECTOR_ALL {
            return ExtractionReport::All(Box::new(FullReport {
                bill_discussions: self.extract_one(text, ExtractionType::BillDiscussions).await,
                committee_decisions: self
                    .extract_one(text, ExtractionType::CommitteeDecisions)
                    .await,
                amendments: self.extract_one(text, ExtractionType::Amendments).await,
                speaker_statements: self
                    .extract_one(text, ExtractionType::SpeakerStatements)
                    .await,
            }));
        }

        match extraction_type.parse::<ExtractionType>() {
            Ok(ty) => ExtractionReport::Single(self.extract_one(text, ty).await),
            Err(e) => {
                warn!(selector = extraction_type, "unknown extraction type");
                ExtractionReport::Single(ExtractionOutcome::failed(e.to_string()))
            }
        }
    }

    /// Run a single extraction routine
    ///
    /// Provider failures are converted into an error-shaped outcome with the
    /// rendered error chain attached; this method never returns `Err`.
    pub async fn extract_one(&self, text: &str, ty: ExtractionType) -> ExtractionOutcome {
        let prompt = PromptBuilder::new(text, spec_for(ty)).build();

        debug!(
            routine = ty.name(),
            prompt_len = prompt.len(),
            "dispatching extraction prompt"
        );

        match self.provider.generate(&prompt).await {
            Ok(response) => {
                debug!(routine = ty.name(), response_len = response.len(), "model responded");
                normalize_response(&response)
            }
            Err(e) => {
                warn!(routine = ty.name(), error = %e, "extraction routine failed");
                ExtractionOutcome::failed_with_traceback(&e)
            }
        }
    }
}
