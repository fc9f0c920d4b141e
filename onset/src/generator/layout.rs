//! Random card layouts and available dice pools

use super::random::RandomSource;
use crate::semantic::{Card, Color, Comparator, SetConstant, SetOperator, Token};

/// How many dice of each kind the available pool offers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolComposition {
    /// Color dice, each rolled independently from the palette
    pub colors: usize,
    pub operators_per_kind: usize,
    pub complements: usize,
    pub constants_per_kind: usize,
    pub comparators_per_kind: usize,
}

impl Default for PoolComposition {
    fn default() -> Self {
        Self {
            colors: 4,
            operators_per_kind: 1,
            complements: 1,
            constants_per_kind: 1,
            comparators_per_kind: 1,
        }
    }
}

/// Deal `count` cards; each card shows each palette color with probability ½
pub fn deal_cards<R: RandomSource>(palette: &[Color], count: usize, rng: &mut R) -> Vec<Card> {
    (0..count)
        .map(|_| Card::new(palette.iter().copied().filter(|_| rng.flip())))
        .collect()
}

/// Roll the pool of tokens templates may draw from
pub fn available_pool<R: RandomSource>(
    composition: &PoolComposition,
    palette: &[Color],
    rng: &mut R,
) -> Vec<Token> {
    let mut pool = Vec::new();

    for _ in 0..composition.colors {
        if let Some(color) = rng.choose(palette) {
            pool.push(Token::Color(*color));
        }
    }
    for op in SetOperator::ALL {
        pool.extend(std::iter::repeat(Token::Operator(op)).take(composition.operators_per_kind));
    }
    pool.extend(std::iter::repeat(Token::Complement).take(composition.complements));
    for constant in SetConstant::ALL {
        pool.extend(
            std::iter::repeat(Token::Constant(constant)).take(composition.constants_per_kind),
        );
    }
    for comparator in Comparator::ALL {
        pool.extend(
            std::iter::repeat(Token::Restriction(comparator))
                .take(composition.comparators_per_kind),
        );
    }

    pool
}

/// What is left of `available` after taking out `used`, one token per use
pub fn remaining_after(available: &[Token], used: &[Token]) -> Vec<Token> {
    let mut remaining = available.to_vec();
    for token in used {
        if let Some(pos) = remaining.iter().position(|t| t == token) {
            remaining.swap_remove(pos);
        }
    }
    remaining
}
