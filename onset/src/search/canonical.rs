//! Canonical solution strings and duplicate tracking
//!
//! Two arrangements are the same solution when their rows print the same,
//! no matter which physical dice were used.

use crate::semantic::Token;
use std::collections::HashSet;

/// Separator between the restriction row and the set-name row
pub const ROW_SEPARATOR: &str = " | ";

pub fn row_string(tokens: &[Token]) -> String {
    let symbols: Vec<&str> = tokens.iter().map(|t| t.symbol()).collect();
    symbols.join(" ")
}

/// `restriction | set-name`, or just `set-name` when there is no restriction
pub fn canonical_string(restriction: &[Token], set_name: &[Token]) -> String {
    if restriction.is_empty() {
        row_string(set_name)
    } else {
        format!("{}{}{}", row_string(restriction), ROW_SEPARATOR, row_string(set_name))
    }
}

/// Records solutions the first time their canonical string is seen
#[derive(Debug, Default)]
pub struct SolutionLedger {
    seen: HashSet<String>,
    shortest: Option<usize>,
    longest: Option<usize>,
}

impl SolutionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if this arrangement had not been recorded before
    pub fn record(&mut self, restriction: &[Token], set_name: &[Token]) -> bool {
        if !self.seen.insert(canonical_string(restriction, set_name)) {
            return false;
        }
        let cubes = restriction.len() + set_name.len();
        self.shortest = Some(self.shortest.map_or(cubes, |s| s.min(cubes)));
        self.longest = Some(self.longest.map_or(cubes, |l| l.max(cubes)));
        true
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn shortest(&self) -> Option<usize> {
        self.shortest
    }

    pub fn longest(&self) -> Option<usize> {
        self.longest
    }
}
