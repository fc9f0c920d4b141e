//! Evaluation context for a card layout
//!
//! Holds the per-color card sets and the universe so that evaluating a row
//! never has to scan the cards again.

use crate::semantic::{Card, CardSet, Color};
use crate::{OnsetError, OnsetResult};

/// Precomputed card sets for one card layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationContext {
    /// Cards showing each color, indexed by palette position
    color_sets: [CardSet; Color::ALL.len()],

    /// Every card index of the layout
    universe: CardSet,

    card_count: usize,
}

impl EvaluationContext {
    /// Build the context for a card layout
    ///
    /// Fails only when the layout has more cards than a `CardSet` can address.
    pub fn new(cards: &[Card]) -> OnsetResult<Self> {
        if cards.len() > CardSet::CAPACITY {
            return Err(OnsetError::malformed(format!(
                "{} cards exceed the maximum of {}",
                cards.len(),
                CardSet::CAPACITY
            )));
        }

        let mut color_sets = [CardSet::empty(); Color::ALL.len()];
        for (index, card) in cards.iter().enumerate() {
            for color in &card.colors {
                color_sets[color.index()].insert(index);
            }
        }

        Ok(Self {
            color_sets,
            universe: CardSet::universe(cards.len()),
            card_count: cards.len(),
        })
    }

    pub fn color_set(&self, color: Color) -> CardSet {
        self.color_sets[color.index()]
    }

    pub fn universe(&self) -> CardSet {
        self.universe
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }
}
