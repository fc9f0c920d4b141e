//! Set expression evaluation
//!
//! Evaluates token rows against a card layout:
//! 1. Validate the row and build its expression tree
//! 2. Fold the terms left to right into a card set
//! 3. For restricted arrangements, test the restriction first and veto on failure

pub mod context;
pub mod expression;
pub mod operations;

use crate::ast::SolutionTree;
use crate::error::RowKind;
use crate::semantic::{CardSet, Token};
use crate::{OnsetError, OnsetResult, OperationResult, Validator};
pub use context::EvaluationContext;

/// Row evaluation as seen by the search engine and the generator
///
/// The infallible methods return `None` for rows that fail the grammar, so
/// they can be called on every candidate of a search.
pub trait SetEvaluator {
    /// Cards matched by a set-name row
    fn evaluate_set_name(
        &self,
        set_name: &[Token],
        context: &EvaluationContext,
    ) -> Option<CardSet>;

    /// Whether a restriction row holds
    fn restriction_holds(
        &self,
        restriction: &[Token],
        context: &EvaluationContext,
    ) -> Option<bool>;

    /// Cards matched by a set-name row gated by a restriction row
    ///
    /// `None` when either row is invalid or the restriction does not hold.
    fn evaluate_restricted(
        &self,
        set_name: &[Token],
        restriction: &[Token],
        context: &EvaluationContext,
    ) -> Option<CardSet> {
        if !self.restriction_holds(restriction, context)? {
            return None;
        }
        self.evaluate_set_name(set_name, context)
    }

    /// Evaluate an already-built arrangement
    fn evaluate_solution(
        &self,
        solution: &SolutionTree,
        context: &EvaluationContext,
    ) -> OperationResult;
}

/// Standard evaluator: grammar from [`Validator`], left-to-right folding
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator {
    validator: Validator,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            validator: Validator::new(),
        }
    }

    /// Evaluate a set-name row, failing with a syntax error if it is not well formed
    pub fn evaluate_tokens(
        &self,
        set_name: &[Token],
        context: &EvaluationContext,
    ) -> OnsetResult<CardSet> {
        let expr = self
            .validator
            .parse_expression(set_name)
            .ok_or_else(|| OnsetError::syntax(RowKind::SetName, set_name))?;
        Ok(expression::evaluate_expression(&expr, context))
    }

    /// Evaluate a set-name row under a restriction row
    pub fn evaluate_restricted_tokens(
        &self,
        set_name: &[Token],
        restriction: &[Token],
        context: &EvaluationContext,
    ) -> OnsetResult<OperationResult> {
        let clause = self
            .validator
            .parse_restriction(restriction)
            .ok_or_else(|| OnsetError::syntax(RowKind::Restriction, restriction))?;
        let expr = self
            .validator
            .parse_expression(set_name)
            .ok_or_else(|| OnsetError::syntax(RowKind::SetName, set_name))?;

        Ok(expression::evaluate_solution(
            &SolutionTree {
                restriction: Some(clause),
                set_name: expr,
            },
            context,
        ))
    }
}

impl SetEvaluator for Evaluator {
    fn evaluate_set_name(
        &self,
        set_name: &[Token],
        context: &EvaluationContext,
    ) -> Option<CardSet> {
        let expr = self.validator.parse_expression(set_name)?;
        Some(expression::evaluate_expression(&expr, context))
    }

    fn restriction_holds(
        &self,
        restriction: &[Token],
        context: &EvaluationContext,
    ) -> Option<bool> {
        let clause = self.validator.parse_restriction(restriction)?;
        Some(expression::evaluate_restriction(&clause, context))
    }

    fn evaluate_solution(
        &self,
        solution: &SolutionTree,
        context: &EvaluationContext,
    ) -> OperationResult {
        expression::evaluate_solution(solution, context)
    }
}
