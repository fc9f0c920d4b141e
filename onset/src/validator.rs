use crate::ast::{Operand, RestrictionClause, SetExpression, Term};
use crate::semantic::Token;

/// Where the grammar walker is inside a set-name row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    /// Start of row or right after an operator
    ExpectOperand,
    /// Right after an operand: complement, operator or end
    AfterOperand,
    /// Right after a complement: operator or end
    AfterComplement,
}

/// Syntax validator for token rows
///
/// Grammar for a set-name row:
///
/// ```text
/// row  := term (operator term)*
/// term := operand complement?
/// ```
///
/// A restriction row is `row comparator row` with exactly one comparator.
/// Validation never fails loudly; callers get `false` or `None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Check a set-name row against the grammar
    pub fn is_valid_expression(&self, tokens: &[Token]) -> bool {
        self.parse_expression(tokens).is_some()
    }

    /// Check a restriction row: one comparator, not at either end, with a
    /// valid set-name row on both sides
    pub fn is_valid_restriction(&self, tokens: &[Token]) -> bool {
        self.parse_restriction(tokens).is_some()
    }

    /// Build the expression tree for a set-name row, or `None` if the row
    /// does not follow the grammar
    pub fn parse_expression(&self, tokens: &[Token]) -> Option<SetExpression> {
        let mut state = WalkState::ExpectOperand;
        let mut first: Option<Term> = None;
        let mut rest = Vec::new();
        let mut pending_op = None;

        for token in tokens {
            state = match (state, token) {
                (WalkState::ExpectOperand, t) if t.is_operand() => {
                    let term = Term::new(Operand::from_token(*t)?);
                    match pending_op.take() {
                        Some(op) => rest.push((op, term)),
                        None => first = Some(term),
                    }
                    WalkState::AfterOperand
                }
                (WalkState::AfterOperand, Token::Complement) => {
                    let last = match rest.last_mut() {
                        Some((_, term)) => term,
                        None => first.as_mut()?,
                    };
                    last.complemented = true;
                    WalkState::AfterComplement
                }
                (WalkState::AfterOperand | WalkState::AfterComplement, Token::Operator(op)) => {
                    pending_op = Some(*op);
                    WalkState::ExpectOperand
                }
                _ => return None,
            };
        }

        if state == WalkState::ExpectOperand {
            // Empty row or trailing operator
            return None;
        }

        Some(SetExpression { first: first?, rest })
    }

    /// Build the restriction clause for a restriction row
    pub fn parse_restriction(&self, tokens: &[Token]) -> Option<RestrictionClause> {
        let mut comparators = tokens
            .iter()
            .enumerate()
            .filter_map(|(i, t)| match t {
                Token::Restriction(c) => Some((i, *c)),
                _ => None,
            });

        let (split, comparator) = comparators.next()?;
        if comparators.next().is_some() {
            return None;
        }
        if split == 0 || split == tokens.len() - 1 {
            return None;
        }

        let left = self.parse_expression(&tokens[..split])?;
        let right = self.parse_expression(&tokens[split + 1..])?;

        Some(RestrictionClause {
            left,
            comparator,
            right,
        })
    }
}
