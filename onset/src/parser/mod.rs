//! Row notation parser
//!
//! Turns printed rows such as `red ⊆ U | green − gold′` back into tokens.
//! Parsing only tokenizes; whether the rows are well formed is up to the
//! [`Validator`](crate::Validator).

use crate::semantic::{Color, Comparator, SetConstant, SetOperator, Token};
use crate::OnsetError;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "src/parser/onset.pest"]
pub struct OnsetParser;

/// Token rows of a printed arrangement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArrangement {
    /// Tokens left of the bar; empty when there is no restriction row
    pub restriction: Vec<Token>,
    pub set_name: Vec<Token>,
}

/// Tokenize a single row
pub fn parse_row(content: &str) -> Result<Vec<Token>, OnsetError> {
    let mut pairs = OnsetParser::parse(Rule::row, content.trim())
        .map_err(|e| OnsetError::Parse(format!("'{}': {}", content, e.variant)))?;

    let row = pairs
        .next()
        .ok_or_else(|| OnsetError::Parse(format!("No parse result for row '{}'", content)))?;

    row.into_inner()
        .find(|p| p.as_rule() == Rule::tokens)
        .map(parse_tokens)
        .unwrap_or_else(|| Ok(Vec::new()))
}

/// Tokenize `restriction | set-name` or a bare set-name row
pub fn parse_arrangement(content: &str) -> Result<ParsedArrangement, OnsetError> {
    let mut pairs = OnsetParser::parse(Rule::arrangement, content.trim())
        .map_err(|e| OnsetError::Parse(format!("'{}': {}", content, e.variant)))?;

    let arrangement = pairs.next().ok_or_else(|| {
        OnsetError::Parse(format!("No parse result for arrangement '{}'", content))
    })?;

    let mut rows = Vec::new();
    for inner in arrangement.into_inner() {
        if inner.as_rule() == Rule::tokens {
            rows.push(parse_tokens(inner)?);
        }
    }

    let set_name = rows
        .pop()
        .ok_or_else(|| OnsetError::Parse(format!("Missing set-name row in '{}'", content)))?;
    let restriction = rows.pop().unwrap_or_default();

    Ok(ParsedArrangement {
        restriction,
        set_name,
    })
}

fn parse_tokens(pair: Pair<Rule>) -> Result<Vec<Token>, OnsetError> {
    pair.into_inner().map(parse_token).collect()
}

fn parse_token(pair: Pair<Rule>) -> Result<Token, OnsetError> {
    let token = match pair.as_rule() {
        Rule::color => Token::Color(pair.as_str().parse::<Color>()?),
        Rule::union => Token::Operator(SetOperator::Union),
        Rule::intersection => Token::Operator(SetOperator::Intersection),
        Rule::difference => Token::Operator(SetOperator::Difference),
        Rule::complement => Token::Complement,
        Rule::universe => Token::Constant(SetConstant::Universe),
        Rule::empty_set => Token::Constant(SetConstant::EmptySet),
        Rule::equals => Token::Restriction(Comparator::Equals),
        Rule::subset_of => Token::Restriction(Comparator::SubsetOf),
        other => {
            return Err(OnsetError::Parse(format!(
                "Unexpected rule {:?} in token row",
                other
            )))
        }
    };
    Ok(token)
}
