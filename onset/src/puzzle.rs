//! Solutions, puzzles and their persisted record shape

use crate::search::canonical::{canonical_string, row_string};
use crate::semantic::{Card, Die, Token};
use crate::{OnsetError, OnsetResult, SolutionStats};
use serde::{Deserialize, Serialize};

/// One arrangement of dice that reaches the goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Restriction row; empty when the solution has none
    pub restriction_dice: Vec<Die>,
    pub set_name_dice: Vec<Die>,
}

impl Solution {
    pub fn new(restriction_dice: Vec<Die>, set_name_dice: Vec<Die>) -> Self {
        Self {
            restriction_dice,
            set_name_dice,
        }
    }

    /// Total dice used across both rows
    pub fn cube_count(&self) -> usize {
        self.restriction_dice.len() + self.set_name_dice.len()
    }

    pub fn has_restriction(&self) -> bool {
        !self.restriction_dice.is_empty()
    }

    pub fn restriction_tokens(&self) -> Vec<Token> {
        self.restriction_dice.iter().map(|d| d.token).collect()
    }

    pub fn set_name_tokens(&self) -> Vec<Token> {
        self.set_name_dice.iter().map(|d| d.token).collect()
    }

    pub fn top_row(&self) -> Option<String> {
        self.has_restriction()
            .then(|| row_string(&self.restriction_tokens()))
    }

    pub fn bottom_row(&self) -> String {
        row_string(&self.set_name_tokens())
    }

    /// Canonical string used to tell solutions apart
    pub fn canonical(&self) -> String {
        canonical_string(&self.restriction_tokens(), &self.set_name_tokens())
    }

    fn row_record(&self) -> SolutionRecord {
        SolutionRecord {
            top_row: self.top_row(),
            bottom_row: self.bottom_row(),
            has_restriction: self.has_restriction(),
        }
    }
}

/// A finished puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub cards: Vec<Card>,
    pub dice: Vec<Die>,
    pub goal: usize,
    pub solution: Solution,
    pub stats: SolutionStats,
}

impl Puzzle {
    pub fn to_record(&self, id: u64) -> PuzzleRecord {
        PuzzleRecord {
            id,
            cards: self.cards.clone(),
            dice: self.dice.clone(),
            goal: self.goal,
            solution: self.solution.row_record(),
            solution_count: self.stats.total_solutions,
            shortest_solution: self.stats.shortest_cube_count.unwrap_or(0),
            longest_solution: self.stats.longest_cube_count.unwrap_or(0),
        }
    }

    /// Rebuild a puzzle from its record; the solution rows are re-tokenized
    pub fn from_record(record: &PuzzleRecord) -> OnsetResult<Self> {
        if record.solution.has_restriction != record.solution.top_row.is_some() {
            return Err(OnsetError::MalformedInput(format!(
                "Puzzle {}: hasRestriction is {} but topRow is {}",
                record.id,
                record.solution.has_restriction,
                if record.solution.top_row.is_some() {
                    "set"
                } else {
                    "missing"
                }
            )));
        }
        let set_name_dice = crate::parser::parse_row(&record.solution.bottom_row)?
            .into_iter()
            .map(Die::new)
            .collect();
        let restriction_dice = match &record.solution.top_row {
            Some(row) => crate::parser::parse_row(row)?
                .into_iter()
                .map(Die::new)
                .collect(),
            None => Vec::new(),
        };

        Ok(Puzzle {
            cards: record.cards.clone(),
            dice: record.dice.clone(),
            goal: record.goal,
            solution: Solution::new(restriction_dice, set_name_dice),
            stats: SolutionStats {
                total_solutions: record.solution_count,
                shortest_cube_count: (record.solution_count > 0)
                    .then_some(record.shortest_solution),
                longest_cube_count: (record.solution_count > 0)
                    .then_some(record.longest_solution),
            },
        })
    }
}

/// Solution rows as stored in a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_row: Option<String>,
    pub bottom_row: String,
    pub has_restriction: bool,
}

/// Persisted puzzle shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleRecord {
    pub id: u64,
    pub cards: Vec<Card>,
    pub dice: Vec<Die>,
    pub goal: usize,
    pub solution: SolutionRecord,
    pub solution_count: usize,
    pub shortest_solution: usize,
    pub longest_solution: usize,
}
