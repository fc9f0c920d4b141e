//! Puzzle record serialization
//!
//! `json` reads and writes [`PuzzleRecord`](crate::PuzzleRecord) documents;
//! `obfuscation` wraps the cards, dice and solution fields for storage.

mod json;
mod obfuscation;

pub use json::{from_json, from_json_batch, to_json, to_json_batch};
pub use obfuscation::{decode_record, encode_record, xor_decode, xor_encode, EncodedPuzzleRecord};
