use crate::semantic::CardSet;
use crate::OnsetError;

/// Result of evaluating a full arrangement
#[derive(Debug, Clone, PartialEq)]
pub enum OperationResult {
    /// The set-name row matched these cards
    Value(CardSet),
    /// The restriction row did not hold (valid arrangement, no result)
    Veto(Option<String>),
}

impl OperationResult {
    /// Check if this is a vetoed result
    pub fn is_vetoed(&self) -> bool {
        matches!(self, OperationResult::Veto(_))
    }

    /// Get the matched cards if present, None if vetoed
    pub fn value(&self) -> Option<CardSet> {
        match self {
            OperationResult::Value(v) => Some(*v),
            OperationResult::Veto(_) => None,
        }
    }

    /// Get the matched cards or return an error if vetoed
    pub fn expect_value(&self, context: &str) -> Result<CardSet, OnsetError> {
        match self {
            OperationResult::Value(v) => Ok(*v),
            OperationResult::Veto(msg) => Err(OnsetError::Engine(format!(
                "Expected cards in {}, but got veto{}",
                context,
                msg.as_ref().map(|m| format!(": {}", m)).unwrap_or_default()
            ))),
        }
    }
}
