use thiserror::Error;

/// A content line that could not be read.
///
/// Card extraction skips such lines; the error only reaches the logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: missing ':' between property name and value")]
    MissingSeparator { line: usize },

    #[error("line {line}: invalid property name {name:?}")]
    InvalidPropertyName { line: usize, name: String },
}

impl ParseError {
    /// Line number within the card (1-based).
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::MissingSeparator { line } | Self::InvalidPropertyName { line, .. } => *line,
        }
    }
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;
