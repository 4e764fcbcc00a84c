//! JSON interchange for [`ItemRecord`] sequences.
//!
//! The wire shape is a bare array of `{"number": int, "name": string, "description": string}`
//! objects. Decoding parses the text on its own, then wraps the value as `{"array": ...}`, so
//! hosts whose JSON layer only accepts a root object can share the same documents.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::{ItemRecord, ListError};

#[derive(Serialize, Deserialize)]
struct RecordArray {
    array: Vec<ItemRecord>,
}

/// Encodes a single record as a JSON object.
pub fn record_to_json(record: &ItemRecord) -> Result<String, ListError> {
    Ok(serde_json::to_string(record)?)
}

/// Encodes records as a bare JSON array.
pub fn records_to_json(records: &[ItemRecord]) -> Result<String, ListError> {
    Ok(serde_json::to_string(records)?)
}

/// Decodes a bare JSON array of records.
///
/// Missing fields default to `0` / empty string.
pub fn records_from_json(json: &str) -> Result<Vec<ItemRecord>, ListError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let RecordArray { array } = serde_json::from_value(serde_json::json!({ "array": value }))?;
    ldebug!(count = array.len(), "records_from_json");
    Ok(array)
}
