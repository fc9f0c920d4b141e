#![no_main]

use libfuzzer_sys::fuzz_target;
use onset::{parse_arrangement, Card, Color, Engine};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let Ok(parsed) = parse_arrangement(s) else {
            return;
        };

        let engine = Engine::new();
        // Card i shows the colors whose bit is set in i
        let cards: Vec<Card> = (0..8usize)
            .map(|i| {
                let colors = Color::ALL.iter().enumerate().filter(|(bit, _)| i & (1 << *bit) != 0);
                Card::new(colors.map(|(_, c)| *c))
            })
            .collect();

        let valid = engine.is_valid_syntax(&parsed.set_name);
        let result = engine.evaluate_expression(&parsed.set_name, &cards);
        assert_eq!(valid, result.is_ok());

        if !parsed.restriction.is_empty() {
            let _ = engine.evaluate_restricted(&parsed.set_name, &parsed.restriction, &cards);
        }
    }
});
