//! Normalize heterogeneous model responses into a canonical outcome
//!
//! The model is instructed to return a JSON array of records, but responses
//! in the wild also show up as an `{"extractions": [...]}` wrapper object,
//! fenced in markdown code blocks, or as free text. Normalization recognizes
//! what it can and preserves the rest verbatim; it never fails.

use crate::types::{ExtractionOutcome, ExtractionRecord, NormalizedItem};
use serde_json::{Map, Value};
use tracing::debug;

/// Reshape a raw model response into a canonical extraction outcome
///
/// Recognized shapes, in order:
/// 1. An object exposing an `extractions` array — each element flattened
/// 2. A bare JSON array — record-shaped elements flattened, the rest
///    stringified
/// 3. Anything else — preserved as `{"raw_result": ...}`
pub fn normalize_response(response: &str) -> ExtractionOutcome {
    let json_str = strip_code_fence(response);

    let value: Value = match serde_json::from_str(&json_str) {
        Ok(v) => v,
        Err(e) => {
            debug!(error = %e, "response is not JSON, preserving raw");
            return ExtractionOutcome::raw(response);
        }
    };

    match value {
        Value::Object(ref map) => match map.get("extractions").and_then(Value::as_array) {
            Some(items) => ExtractionOutcome::extractions(flatten_items(items)),
            None => ExtractionOutcome::raw(response),
        },
        Value::Array(ref items) => ExtractionOutcome::extractions(flatten_items(items)),
        _ => ExtractionOutcome::raw(response),
    }
}

/// Strip a surrounding markdown code fence, if present
///
/// Models sometimes wrap JSON in ```json blocks despite instructions.
fn strip_code_fence(response: &str) -> String {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return trimmed.to_string();
        }
        // Skip the opening line (``` or ```json) and the closing fence
        let inner = &lines[1..lines.len().saturating_sub(1)];
        inner.join("\n")
    } else {
        trimmed.to_string()
    }
}

fn flatten_items(items: &[Value]) -> Vec<NormalizedItem> {
    items.iter().map(flatten_item).collect()
}

/// Flatten one list element: record objects become typed records with
/// absent/null keys omitted, everything else is stringified
fn flatten_item(item: &Value) -> NormalizedItem {
    let obj = match item.as_object() {
        Some(obj) if obj.contains_key("extraction_class") => obj,
        _ => return NormalizedItem::Text(stringify(item)),
    };

    let extraction_class = obj
        .get("extraction_class")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();

    let extraction_text = obj
        .get("extraction_text")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    // Absent attributes default to an empty mapping; an explicit null is
    // dropped from the output entirely
    let attributes = match obj.get("attributes") {
        None => Some(Map::new()),
        Some(Value::Object(map)) => Some(map.clone()),
        Some(_) => None,
    };

    let description = obj
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);

    NormalizedItem::Record(ExtractionRecord {
        extraction_class,
        extraction_text,
        attributes,
        description,
    })
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
