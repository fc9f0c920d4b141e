use crate::semantic::{Card, Color, Die, Token};




// Search tests
mod search;



/// Eight cards used across the unit tests:
/// green {0, 1}, red {2}, gold {3}, blue {4, 6}, blank {5, 7}
pub(crate) fn fixture_cards() -> Vec<Card> {
    vec![
        Card::new([Color::Green]),
        Card::new([Color::Green]),
        Card::new([Color::Red]),
        Card::new([Color::Gold]),
        Card::new([Color::Blue]),
        Card::new([]),
        Card::new([Color::Blue]),
        Card::new([]),
    ]
}

/// Tokens from their printed symbols, `-` and `'` allowed
pub(crate) fn tokens(symbols: &[&str]) -> Vec<Token> {
    symbols.iter().map(|s| s.parse().unwrap()).collect()
}

pub(crate) fn dice(symbols: &[&str]) -> Vec<Die> {
    tokens(symbols).into_iter().map(Die::new).collect()
}
