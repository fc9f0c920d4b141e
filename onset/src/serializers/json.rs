use crate::{OnsetError, PuzzleRecord};

/// Parse a single puzzle record
pub fn from_json(json: &[u8]) -> Result<PuzzleRecord, OnsetError> {
    serde_json::from_slice(json)
        .map_err(|e| OnsetError::Engine(format!("JSON parse error: {}", e)))
}

/// Parse an array of puzzle records
pub fn from_json_batch(json: &[u8]) -> Result<Vec<PuzzleRecord>, OnsetError> {
    serde_json::from_slice(json)
        .map_err(|e| OnsetError::Engine(format!("JSON parse error: {}", e)))
}

pub fn to_json(record: &PuzzleRecord) -> Result<String, OnsetError> {
    Ok(serde_json::to_string_pretty(record)?)
}

pub fn to_json_batch(records: &[PuzzleRecord]) -> Result<String, OnsetError> {
    Ok(serde_json::to_string_pretty(records)?)
}
