use std::fmt;

/// Byte offset plus 1-based line and column of a token in a declaration file.
/// Nodes built in code carry [`Position::synthetic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self { offset, line, column }
    }

    /// Position used for nodes that were synthesized rather than read
    pub fn synthetic() -> Self {
        Self::new(0, 0, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Failures while tokenizing a declaration file
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    #[error("Unexpected character '{ch}' at {pos}")]
    UnexpectedChar { ch: char, pos: Position },

    #[error("Unterminated string at {pos}")]
    UnterminatedString { pos: Position },

    #[error("Invalid escape sequence '\\{ch}' at {pos}")]
    InvalidEscape { ch: char, pos: Position },

    #[error("Unexpected end of input")]
    UnexpectedEof,
}

/// Errors raised while reading declarations from S-expressions
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Expected {expected}, found {found} at {pos}")]
    Expected { expected: String, found: String, pos: Position },

    #[error("Missing :{field} field at {pos}")]
    MissingField { field: String, pos: Position },

    #[error("Unterminated list at {pos}")]
    UnterminatedList { pos: Position },

    #[error("Unexpected closing parenthesis at {pos}")]
    UnexpectedCloseParen { pos: Position },

    #[error("Empty input")]
    EmptyInput,

    #[error("Lexer error: {0}")]
    LexError(#[from] LexError),
}

pub type Result<T> = std::result::Result<T, ParseError>;
