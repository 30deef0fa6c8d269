//! LLM prompt engineering for transcript extraction
//!
//! Each extraction routine is a fixed instruction plus, for bill discussions
//! only, one few-shot example steering the model toward the expected record
//! labels. The other routines ship no example; the asymmetry is intentional
//! and mirrors what the consuming application was tuned against.

use crate::types::{ExtractionRecord, ExtractionType};

/// A sample transcript paired with its expected records, supplied to steer
/// the model without additional training
#[derive(Debug, Clone)]
pub struct FewShotExample {
    /// Sample transcript text
    pub text: String,
    /// The records the model should produce for that text
    pub extractions: Vec<ExtractionRecord>,
}

/// Static per-routine prompt definition: instruction text plus zero or one
/// illustrative example
#[derive(Debug, Clone)]
pub struct PromptSpec {
    /// Natural-language description of the fields to extract
    pub instruction: &'static str,
    /// Few-shot examples (empty for most routines)
    pub examples: Vec<FewShotExample>,
}

/// Look up the prompt definition for a routine
pub fn spec_for(extraction_type: ExtractionType) -> PromptSpec {
    match extraction_type {
        ExtractionType::BillDiscussions => PromptSpec {
            instruction: BILL_DISCUSSIONS_INSTRUCTIONS,
            examples: vec![bill_discussions_example()],
        },
        ExtractionType::CommitteeDecisions => PromptSpec {
            instruction: COMMITTEE_DECISIONS_INSTRUCTIONS,
            examples: Vec::new(),
        },
        ExtractionType::Amendments => PromptSpec {
            instruction: AMENDMENTS_INSTRUCTIONS,
            examples: Vec::new(),
        },
        ExtractionType::SpeakerStatements => PromptSpec {
            instruction: SPEAKER_STATEMENTS_INSTRUCTIONS,
            examples: Vec::new(),
        },
    }
}

/// Builds the complete prompt sent to the model
pub struct PromptBuilder<'a> {
    text: &'a str,
    spec: PromptSpec,
}

impl<'a> PromptBuilder<'a> {
    /// Create a builder for the given transcript and prompt definition
    pub fn new(text: &'a str, spec: PromptSpec) -> Self {
        Self { text, spec }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Instruction
        prompt.push_str(self.spec.instruction);
        prompt.push_str("\n\n");

        // 2. Few-shot examples (if any)
        for example in &self.spec.examples {
            prompt.push_str("Example transcript:\n");
            prompt.push_str("---\n");
            prompt.push_str(&example.text);
            prompt.push_str("\n---\n");
            prompt.push_str("Example output:\n");
            let rendered = serde_json::to_string_pretty(&example.extractions)
                .unwrap_or_else(|_| "[]".to_string());
            prompt.push_str(&rendered);
            prompt.push_str("\n\n");
        }

        // 3. The transcript to analyze
        prompt.push_str("Transcript to analyze:\n");
        prompt.push_str("---\n");
        prompt.push_str(self.text);
        prompt.push_str("\n---\n\n");

        // 4. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

fn bill_discussions_example() -> FewShotExample {
    FewShotExample {
        text: "Председателят обяви разглеждането на законопроект № 402-01-45 за изменение \
               на Закона за енергетиката. След дебати, в които участваха народните \
               представители Иванов и Петров, законопроектът беше приет на първо четене \
               с 142 гласа 'за', 45 'против' и 12 'въздържали се'."
            .to_string(),
        extractions: vec![
            ExtractionRecord::new("bill_number", "402-01-45"),
            ExtractionRecord::new(
                "bill_title",
                "Законопроект за изменение на Закона за енергетиката",
            ),
            ExtractionRecord::new("reading", "първо четене"),
            ExtractionRecord::new("outcome", "приет"),
        ],
    }
}

const BILL_DISCUSSIONS_INSTRUCTIONS: &str = "\
Extract all bill discussions from this parliament transcript.
For each bill discussed, extract:
- Bill identifier/number
- Bill title
- Type of discussion (first reading, second reading, final vote, etc.)
- Key speakers and their positions
- Amendments proposed
- Voting results if available
- Decision/outcome";

const COMMITTEE_DECISIONS_INSTRUCTIONS: &str = "\
Extract all committee decisions from this parliament transcript.
For each decision, extract:
- Decision type
- Subject matter
- Committee members present
- Voting results
- Final decision/resolution
- Any follow-up actions required";

const AMENDMENTS_INSTRUCTIONS: &str = "\
Extract all proposed amendments from this parliament transcript.
For each amendment, extract:
- Amendment identifier
- Related bill or law
- Proposer (person or party)
- Amendment description
- Support/opposition
- Voting results if available
- Status (accepted/rejected/pending)";

const SPEAKER_STATEMENTS_INSTRUCTIONS: &str = "\
Extract all speaker statements from this parliament transcript.
For each speaker, extract:
- Speaker name
- Political affiliation/party
- Key points made
- Position on discussed matters
- Any motions or proposals made";

const OUTPUT_FORMAT_REMINDER: &str = r#"Output format (JSON array only, no additional text):
[
  {
    "extraction_class": "field_label",
    "extraction_text": "exact text from the transcript",
    "attributes": {},
    "description": "optional free-form note"
  }
]

Remember: Return ONLY valid JSON, no markdown code blocks, no explanations.
Keep extraction_text in the transcript's original language."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_transcript() {
        let spec = spec_for(ExtractionType::CommitteeDecisions);
        let prompt = PromptBuilder::new("Комисията реши да приеме доклада.", spec).build();
        assert!(prompt.contains("Комисията реши да приеме доклада."));
        assert!(prompt.contains("Transcript to analyze:"));
    }

    #[test]
    fn test_prompt_includes_instructions() {
        let spec = spec_for(ExtractionType::Amendments);
        let prompt = PromptBuilder::new("text", spec).build();
        assert!(prompt.contains("Extract all proposed amendments"));
        assert!(prompt.contains("extraction_class"));
    }

    #[test]
    fn test_bill_discussions_carries_example() {
        let spec = spec_for(ExtractionType::BillDiscussions);
        assert_eq!(spec.examples.len(), 1);

        let prompt = PromptBuilder::new("text", spec).build();
        assert!(prompt.contains("Example transcript:"));
        assert!(prompt.contains("402-01-45"));
        assert!(prompt.contains("първо четене"));
        assert!(prompt.contains("\"extraction_class\": \"bill_number\""));
    }

    #[test]
    fn test_other_routines_carry_no_example() {
        for ty in [
            ExtractionType::CommitteeDecisions,
            ExtractionType::Amendments,
            ExtractionType::SpeakerStatements,
        ] {
            let spec = spec_for(ty);
            assert!(spec.examples.is_empty(), "{} should have no examples", ty);

            let prompt = PromptBuilder::new("text", spec).build();
            assert!(!prompt.contains("Example transcript:"));
        }
    }

    #[test]
    fn test_example_output_omits_absent_fields() {
        let spec = spec_for(ExtractionType::BillDiscussions);
        let prompt = PromptBuilder::new("text", spec).build();
        // The few-shot records carry no attributes or description, so the
        // rendered example must not show those keys as null
        assert!(!prompt.contains("\"attributes\": null"));
        assert!(!prompt.contains("\"description\": null"));
    }

    #[test]
    fn test_prompts_are_distinct_per_routine() {
        let prompts: Vec<String> = ExtractionType::ALL
            .iter()
            .map(|ty| PromptBuilder::new("same text", spec_for(*ty)).build())
            .collect();
        for i in 0..prompts.len() {
            for j in (i + 1)..prompts.len() {
                assert_ne!(prompts[i], prompts[j]);
            }
        }
    }
}
