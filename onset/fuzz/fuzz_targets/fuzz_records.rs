#![no_main]

use libfuzzer_sys::fuzz_target;
use onset::serializers::{decode_record, from_json, EncodedPuzzleRecord};
use onset::Puzzle;

fuzz_target!(|data: &[u8]| {
    if let Ok(record) = from_json(data) {
        let _ = Puzzle::from_record(&record);
    }

    if let Ok(encoded) = serde_json::from_slice::<EncodedPuzzleRecord>(data) {
        let _ = decode_record(&encoded);
    }
});
