use crate::semantic::Token;
use std::fmt;

/// Which row a token sequence was meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Restriction,
    SetName,
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKind::Restriction => write!(f, "restriction row"),
            RowKind::SetName => write!(f, "set-name row"),
        }
    }
}

/// Error types for the puzzle engine
///
/// Syntax failures inside the search loops are plain `false`/`None` values;
/// these variants are only produced by the fallible entry points.
#[derive(Debug, Clone, PartialEq)]
pub enum OnsetError {
    /// A row string could not be tokenized
    Parse(String),

    /// A token sequence does not follow the set-expression grammar
    Syntax { row: RowKind, tokens: Vec<Token> },

    /// Caller-supplied cards or dice violate a basic shape requirement
    MalformedInput(String),

    /// Obfuscated payload could not be decoded
    Codec(String),

    /// Engine error without a more specific category
    Engine(String),
}

impl OnsetError {
    pub fn syntax(row: RowKind, tokens: &[Token]) -> Self {
        Self::Syntax {
            row,
            tokens: tokens.to_vec(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }
}

impl fmt::Display for OnsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnsetError::Parse(msg) => write!(f, "Parse error: {}", msg),
            OnsetError::Syntax { row, tokens } => {
                let text: Vec<&str> = tokens.iter().map(|t| t.symbol()).collect();
                if text.is_empty() {
                    write!(f, "Syntax error: empty {}", row)
                } else {
                    write!(f, "Syntax error: '{}' is not a valid {}", text.join(" "), row)
                }
            }
            OnsetError::MalformedInput(msg) => write!(f, "Malformed input: {}", msg),
            OnsetError::Codec(msg) => write!(f, "Codec error: {}", msg),
            OnsetError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for OnsetError {}

impl From<serde_json::Error> for OnsetError {
    fn from(err: serde_json::Error) -> Self {
        OnsetError::Engine(format!("JSON error: {}", err))
    }
}
