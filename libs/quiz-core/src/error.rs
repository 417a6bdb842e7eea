//! Error types for quiz-core.

use crate::types::TokenKind;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while reading the raw data stream.
#[derive(Debug, Error)]
pub enum LexError {
    #[error("failed to read quiz data")]
    Read(#[from] std::io::Error),
}

/// Errors that can occur while parsing a token sequence.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unexpected token in quiz data at {source_name}:{line}:{column}: expected {expected}, got {found}")]
    UnexpectedToken {
        source_name: String,
        line: usize,
        column: usize,
        expected: TokenKind,
        found: TokenKind,
    },

    #[error("unexpected token in quiz data at {source_name}:{line}:{column}: expected {expected}, got end of input")]
    UnexpectedEnd {
        source_name: String,
        line: usize,
        column: usize,
        expected: TokenKind,
    },
}

impl ParseError {
    /// Line of the offending token.
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. } | Self::UnexpectedEnd { line, .. } => *line,
        }
    }

    pub fn column(&self) -> usize {
        match self {
            Self::UnexpectedToken { column, .. } | Self::UnexpectedEnd { column, .. } => *column,
        }
    }

    pub fn expected(&self) -> TokenKind {
        match self {
            Self::UnexpectedToken { expected, .. } | Self::UnexpectedEnd { expected, .. } => *expected,
        }
    }

    /// Kind actually encountered, `None` when the input ran out.
    pub fn found(&self) -> Option<TokenKind> {
        match self {
            Self::UnexpectedToken { found, .. } => Some(*found),
            Self::UnexpectedEnd { .. } => None,
        }
    }
}

/// Errors that can occur while writing records back to the data format.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot write {value:?} of record {key:?}: values must be non-empty, start with a non-space character and not contain `:`, `,` or `;`")]
    Unrepresentable { key: String, value: String },
}

/// Errors that can occur while loading a data file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open quiz data {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
