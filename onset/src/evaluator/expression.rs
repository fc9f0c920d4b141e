//! Expression evaluation
//!
//! Walks expression trees left to right. There is no operator precedence:
//! each operator folds the next term into the running result.

use super::context::EvaluationContext;
use super::operations::{comparison, set_operation, term_set};
use crate::ast::{RestrictionClause, SetExpression, SolutionTree};
use crate::semantic::CardSet;
use crate::OperationResult;

pub fn evaluate_expression(expr: &SetExpression, context: &EvaluationContext) -> CardSet {
    expr.rest
        .iter()
        .fold(term_set(&expr.first, context), |acc, (op, term)| {
            set_operation(acc, op, term_set(term, context))
        })
}

pub fn evaluate_restriction(clause: &RestrictionClause, context: &EvaluationContext) -> bool {
    let left = evaluate_expression(&clause.left, context);
    let right = evaluate_expression(&clause.right, context);
    comparison(left, &clause.comparator, right)
}

/// Evaluate a full arrangement; a failing restriction vetoes the result
pub fn evaluate_solution(solution: &SolutionTree, context: &EvaluationContext) -> OperationResult {
    if let Some(restriction) = &solution.restriction {
        if !evaluate_restriction(restriction, context) {
            return OperationResult::Veto(Some(format!(
                "restriction '{}' does not hold",
                restriction
            )));
        }
    }
    OperationResult::Value(evaluate_expression(&solution.set_name, context))
}
