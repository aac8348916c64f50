//! TOON (Token-Oriented Object Notation) encoder using rtoon library
//!
//! Field order is fixed and absent optional fields are omitted, so the output
//! stays stable for the editor layer to parse.

use rtoon::encode_default;
use serde_json::{json, Map, Value};

use crate::schema::SuggestionReport;

/// Encode a report as TOON
pub fn encode_toon(report: &SuggestionReport) -> String {
    let value = report_value(report);
    encode_default(&value).unwrap_or_else(|e| format!("TOON encoding error: {}", e))
}

/// Encode a report as pretty-printed JSON
pub fn encode_json(report: &SuggestionReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| format!("JSON encoding error: {}", e))
}

fn report_value(report: &SuggestionReport) -> Value {
    let mut obj = Map::new();
    obj.insert("file".to_string(), json!(report.file));
    obj.insert("language".to_string(), json!(report.language));
    obj.insert("offset".to_string(), json!(report.offset));
    obj.insert(
        "object".to_string(),
        json!(report.suggestion.object_identifier),
    );
    obj.insert("block".to_string(), json!(report.suggestion.block_name));
    obj.insert(
        "mode".to_string(),
        json!(report.suggestion.insertion_mode.as_str()),
    );
    obj.insert(
        "block_source".to_string(),
        json!(report.block_source.as_str()),
    );

    if let Some(ref element) = report.element {
        obj.insert("element".to_string(), json!(element));
    }

    if let Some(ref import) = report.import {
        obj.insert(
            "import".to_string(),
            json!({
                "text": import.import_statement_text.trim_end(),
                "offset": import.insert_offset,
            }),
        );
    }

    obj.insert("snippet".to_string(), json!(report.snippet));
    Value::Object(obj)
}
