//! Set operations and restriction comparisons on card sets

use super::context::EvaluationContext;
use crate::ast::{Operand, Term};
use crate::semantic::{CardSet, Comparator, SetConstant, SetOperator};

/// Cards matched by a bare operand
pub fn operand_set(operand: &Operand, context: &EvaluationContext) -> CardSet {
    match operand {
        Operand::Color(color) => context.color_set(*color),
        Operand::Constant(SetConstant::Universe) => context.universe(),
        Operand::Constant(SetConstant::EmptySet) => CardSet::empty(),
    }
}

/// Cards matched by a term; the complement binds to this operand only
pub fn term_set(term: &Term, context: &EvaluationContext) -> CardSet {
    let set = operand_set(&term.operand, context);
    if term.complemented {
        set.complement(context.universe())
    } else {
        set
    }
}

/// Combine the running result with the next term's set.
///
/// Difference is `left − right`.
pub fn set_operation(left: CardSet, op: &SetOperator, right: CardSet) -> CardSet {
    match op {
        SetOperator::Union => left.union(right),
        SetOperator::Intersection => left.intersection(right),
        SetOperator::Difference => left.difference(right),
    }
}

/// Restriction test between the two sides of a restriction row
pub fn comparison(left: CardSet, comparator: &Comparator, right: CardSet) -> bool {
    match comparator {
        Comparator::Equals => left == right,
        Comparator::SubsetOf => left.is_subset_of(&right),
    }
}
