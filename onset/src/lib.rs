//! # Onset Engine
//!
//! **Set-theory dice puzzles**
//!
//! A puzzle deals eight cards, each showing some colors, and a pool of dice:
//! colors, set operators, a complement marker, set constants and restriction
//! comparators. The player arranges dice into an expression that matches
//! exactly `goal` cards.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use onset::{parse_row, Card, Color, Engine, OnsetResult};
//!
//! fn main() -> OnsetResult<()> {
//!     let engine = Engine::new();
//!     let cards = vec![
//!         Card::new([Color::Red]),
//!         Card::new([Color::Blue, Color::Green]),
//!         Card::new([]),
//!         Card::new([Color::Gold]),
//!         Card::new([Color::Red, Color::Gold]),
//!         Card::new([Color::Green]),
//!         Card::new([Color::Blue]),
//!         Card::new([Color::Red, Color::Blue]),
//!     ];
//!
//!     let matched = engine.evaluate_expression(&parse_row("red ∪ gold′")?, &cards)?;
//!     println!("{} cards", matched.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Rows
//! A set-name row alternates operands (colors, `U`, `∅`) and operators
//! (`∪`, `∩`, `−`); any operand may carry a postfix complement `′`.
//! Rows are evaluated strictly left to right.
//!
//! ### Restrictions
//! An optional restriction row `left = right` or `left ⊆ right` gates the
//! set-name row: when it does not hold, the arrangement has no result.
//!
//! ### Search
//! The solver enumerates arrangements of the dice pool to find the shortest
//! solution, count all distinct solutions, or just test solvability.
//!
//! ### Generation
//! Puzzles are generated from templates: a pattern is filled from a random
//! pool and evaluated against random cards, and the result becomes the goal.

pub mod ast;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod operation_result;
pub mod parser;
pub mod puzzle;
pub mod resource_limits;
pub mod search;
pub mod semantic;
pub mod serializers;
pub mod validator;

pub use ast::{Operand, RestrictionClause, SetExpression, SolutionTree, Term};
pub use engine::Engine;
pub use error::{OnsetError, RowKind};
pub use evaluator::{EvaluationContext, Evaluator, SetEvaluator};
pub use generator::random::RandomSource;
pub use generator::{GenerationReport, Generator, GeneratorConfig};
pub use operation_result::OperationResult;
pub use parser::{parse_arrangement, parse_row, ParsedArrangement};
pub use puzzle::{Puzzle, PuzzleRecord, Solution, SolutionRecord};
pub use resource_limits::ResourceLimits;
pub use search::{SolutionSearch, SolutionStats};
pub use semantic::*;
pub use validator::Validator;

/// Result type for engine operations
pub type OnsetResult<T> = Result<T, OnsetError>;

#[cfg(test)]
mod tests;
