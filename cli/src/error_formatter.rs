use onset::{OnsetError, RowKind};

/// Format an OnsetError for the terminal, with a hint where one helps
pub fn format_error(error: &OnsetError) -> String {
    match error {
        OnsetError::Parse(msg) => format!(
            "Parse error: {}\n  hint: use colors (red, blue, green, gold) and the symbols ∪ ∩ − ′ U ∅ = ⊆; \
             '-' and ''' are accepted for − and ′",
            msg
        ),
        OnsetError::Syntax { row, .. } => {
            let hint = match row {
                RowKind::SetName => {
                    "a set-name row alternates operands and operators, e.g. red ∪ blue′"
                }
                RowKind::Restriction => {
                    "a restriction row has one = or ⊆ between two set-name rows, e.g. red ⊆ U"
                }
            };
            format!("{}\n  hint: {}", error, hint)
        }
        OnsetError::MalformedInput(msg) => format!("Malformed puzzle: {}", msg),
        OnsetError::Codec(msg) => format!(
            "Codec error: {}\n  hint: the payload may not have been produced by 'onset encode'",
            msg
        ),
        OnsetError::Engine(msg) => format!("Engine error: {}", msg),
    }
}
