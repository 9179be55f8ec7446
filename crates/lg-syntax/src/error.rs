use crate::location::Position;

/// Lexing and parsing errors. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyntaxError {
    /// Reported by the tokenizer or parser.
    #[error("{position}: {message}")]
    Parse { message: String, position: Position },

    #[error("{position}: nesting deeper than {limit} levels")]
    RecursionLimit { limit: usize, position: Position },

    /// Parsed, but not a shape the syntax tree represents.
    #[error("{position}: {reason}")]
    Malformed { reason: String, position: Position },
}

impl SyntaxError {
    pub fn is_retryable(&self) -> bool {
        false
    }

    pub fn position(&self) -> Position {
        match self {
            Self::Parse { position, .. }
            | Self::RecursionLimit { position, .. }
            | Self::Malformed { position, .. } => *position,
        }
    }
}
