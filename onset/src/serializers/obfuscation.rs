//! Reversible obfuscation of puzzle payloads
//!
//! Each wrapped field is serialized to JSON, XORed with a fixed repeating key
//! and base64-encoded. This keeps answers out of plain sight in stored files;
//! it is not encryption.

use crate::puzzle::SolutionRecord;
use crate::semantic::{Card, Die};
use crate::{OnsetError, PuzzleRecord};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const KEY: &[u8] = b"onset-dice-and-cards";

/// A puzzle record with `cards`, `dice` and `solution` wrapped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedPuzzleRecord {
    pub id: u64,
    pub cards: String,
    pub dice: String,
    pub goal: usize,
    pub solution: String,
    pub solution_count: usize,
    pub shortest_solution: usize,
    pub longest_solution: usize,
}

fn xor_with_key(bytes: &mut [u8]) {
    for (byte, key) in bytes.iter_mut().zip(KEY.iter().cycle()) {
        *byte ^= key;
    }
}

/// XOR with the fixed key, then base64
pub fn xor_encode(plain: &[u8]) -> String {
    let mut bytes = plain.to_vec();
    xor_with_key(&mut bytes);
    STANDARD.encode(bytes)
}

/// Inverse of [`xor_encode`]
pub fn xor_decode(encoded: &str) -> Result<Vec<u8>, OnsetError> {
    let mut bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| OnsetError::Codec(format!("invalid base64: {}", e)))?;
    xor_with_key(&mut bytes);
    Ok(bytes)
}

fn wrap<T: Serialize>(value: &T) -> Result<String, OnsetError> {
    let json = serde_json::to_vec(value)?;
    Ok(xor_encode(&json))
}

fn unwrap_field<T: DeserializeOwned>(field: &str, encoded: &str) -> Result<T, OnsetError> {
    let bytes = xor_decode(encoded)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| OnsetError::Codec(format!("field '{}' does not decode: {}", field, e)))
}

pub fn encode_record(record: &PuzzleRecord) -> Result<EncodedPuzzleRecord, OnsetError> {
    Ok(EncodedPuzzleRecord {
        id: record.id,
        cards: wrap(&record.cards)?,
        dice: wrap(&record.dice)?,
        goal: record.goal,
        solution: wrap(&record.solution)?,
        solution_count: record.solution_count,
        shortest_solution: record.shortest_solution,
        longest_solution: record.longest_solution,
    })
}

pub fn decode_record(encoded: &EncodedPuzzleRecord) -> Result<PuzzleRecord, OnsetError> {
    let cards: Vec<Card> = unwrap_field("cards", &encoded.cards)?;
    let dice: Vec<Die> = unwrap_field("dice", &encoded.dice)?;
    let solution: SolutionRecord = unwrap_field("solution", &encoded.solution)?;

    Ok(PuzzleRecord {
        id: encoded.id,
        cards,
        dice,
        goal: encoded.goal,
        solution,
        solution_count: encoded.solution_count,
        shortest_solution: encoded.shortest_solution,
        longest_solution: encoded.longest_solution,
    })
}
