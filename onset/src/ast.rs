//! Typed expression tree
//!
//! The validator turns flat token rows into these nodes and the evaluator
//! walks them. Dice are derived from the tree, so an operand and its
//! complement marker are always two separate nodes in a fixed order.

use crate::semantic::{Color, Comparator, Die, SetConstant, SetOperator, Token};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    Color(Color),
    Constant(SetConstant),
}

impl Operand {
    pub fn token(&self) -> Token {
        match self {
            Operand::Color(c) => Token::Color(*c),
            Operand::Constant(c) => Token::Constant(*c),
        }
    }

    pub(crate) fn from_token(token: Token) -> Option<Self> {
        match token {
            Token::Color(c) => Some(Operand::Color(c)),
            Token::Constant(c) => Some(Operand::Constant(c)),
            _ => None,
        }
    }
}

/// An operand with an optional postfix complement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Term {
    pub operand: Operand,
    pub complemented: bool,
}

impl Term {
    pub fn new(operand: Operand) -> Self {
        Self {
            operand,
            complemented: false,
        }
    }

    pub fn complemented(operand: Operand) -> Self {
        Self {
            operand,
            complemented: true,
        }
    }

    fn push_tokens(&self, out: &mut Vec<Token>) {
        out.push(self.operand.token());
        if self.complemented {
            out.push(Token::Complement);
        }
    }
}

/// A left-associative chain of terms
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetExpression {
    pub first: Term,
    pub rest: Vec<(SetOperator, Term)>,
}

impl SetExpression {
    pub fn new(first: Term) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    pub fn then(mut self, op: SetOperator, term: Term) -> Self {
        self.rest.push((op, term));
        self
    }

    pub fn tokens(&self) -> Vec<Token> {
        let mut out = Vec::new();
        self.first.push_tokens(&mut out);
        for (op, term) in &self.rest {
            out.push(Token::Operator(*op));
            term.push_tokens(&mut out);
        }
        out
    }

    pub fn token_count(&self) -> usize {
        let term_len = |t: &Term| 1 + usize::from(t.complemented);
        term_len(&self.first) + self.rest.iter().map(|(_, t)| 1 + term_len(t)).sum::<usize>()
    }
}

/// `left comparator right`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RestrictionClause {
    pub left: SetExpression,
    pub comparator: Comparator,
    pub right: SetExpression,
}

impl RestrictionClause {
    pub fn tokens(&self) -> Vec<Token> {
        let mut out = self.left.tokens();
        out.push(Token::Restriction(self.comparator));
        out.extend(self.right.tokens());
        out
    }
}

/// A complete arrangement: optional restriction row plus set-name row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SolutionTree {
    pub restriction: Option<RestrictionClause>,
    pub set_name: SetExpression,
}

impl SolutionTree {
    /// One die per token; a complemented operand yields the operand die
    /// followed by its complement die.
    pub fn dice(&self) -> (Vec<Die>, Vec<Die>) {
        let restriction = self
            .restriction
            .as_ref()
            .map(|r| r.tokens().into_iter().map(Die::new).collect())
            .unwrap_or_default();
        let set_name = self.set_name.tokens().into_iter().map(Die::new).collect();
        (restriction, set_name)
    }
}

fn write_tokens(f: &mut fmt::Formatter<'_>, tokens: &[Token]) -> fmt::Result {
    let text: Vec<&str> = tokens.iter().map(|t| t.symbol()).collect();
    write!(f, "{}", text.join(" "))
}

impl fmt::Display for SetExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tokens(f, &self.tokens())
    }
}

impl fmt::Display for RestrictionClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tokens(f, &self.tokens())
    }
}

impl fmt::Display for SolutionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(restriction) = &self.restriction {
            write!(f, "{} | ", restriction)?;
        }
        write!(f, "{}", self.set_name)
    }
}
