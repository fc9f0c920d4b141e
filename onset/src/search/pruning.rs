//! Multiset checks that rule out a group of dice before permuting it

use crate::semantic::{Die, Token};

/// Counts of each token role in a group of dice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowShape {
    pub operands: usize,
    pub operators: usize,
    pub complements: usize,
    pub comparators: usize,
}

impl RowShape {
    pub fn of<'d>(dice: impl IntoIterator<Item = &'d Die>) -> Self {
        let mut shape = RowShape::default();
        for die in dice {
            match die.token {
                Token::Color(_) | Token::Constant(_) => shape.operands += 1,
                Token::Operator(_) => shape.operators += 1,
                Token::Complement => shape.complements += 1,
                Token::Restriction(_) => shape.comparators += 1,
            }
        }
        shape
    }

    /// Some ordering of these dice could be a valid set-name row
    pub fn can_form_set_name(&self) -> bool {
        self.comparators == 0
            && self.operands == self.operators + 1
            && self.complements <= self.operands
    }

    /// Some ordering of these dice could be a valid restriction row
    pub fn can_form_restriction(&self) -> bool {
        self.comparators == 1
            && self.operands == self.operators + 2
            && self.complements <= self.operands
    }
}
