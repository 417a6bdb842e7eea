//! Core types for quiz data.

use serde::Serialize;
use std::fmt;

/// Location of a character in a data file (1-based line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Token kinds produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    String,
    Colon,
    Comma,
    Semicolon,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Colon => "COLON",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
        }
    }

    /// Kind of a single-character delimiter, if `c` is one.
    pub fn delimiter(c: char) -> Option<Self> {
        match c {
            ':' => Some(Self::Colon),
            ',' => Some(Self::Comma),
            ';' => Some(Self::Semicolon),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single token with its kind, text and source location.
///
/// `text` is only set for [`TokenKind::String`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
    pub position: Position,
}

impl Token {
    pub fn delimiter(kind: TokenKind, position: Position) -> Self {
        Self {
            kind,
            text: None,
            position,
        }
    }

    pub fn string(text: String, position: Position) -> Self {
        Self {
            kind: TokenKind::String,
            text: Some(text),
            position,
        }
    }
}

/// One question with its accepted answers.
///
/// Answers are stored exactly as written in the data file and there is
/// always at least one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    key: String,
    answers: Vec<String>,
}

impl QuestionRecord {
    /// Create a record with its first accepted answer.
    pub fn new(key: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            answers: vec![answer.into()],
        }
    }

    /// Add another accepted answer.
    pub fn push_answer(&mut self, answer: impl Into<String>) {
        self.answers.push(answer.into());
    }

    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.push_answer(answer);
        self
    }

    /// The prompt shown to the user.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }
}

/// All records of a data file, in file order.
pub type RecordSet = Vec<QuestionRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_answers_in_order() {
        let record = QuestionRecord::new("ア", "a").with_answer("A");
        assert_eq!(record.key(), "ア");
        assert_eq!(record.answers(), ["a", "A"]);
    }

    #[test]
    fn token_kind_display_matches_error_names() {
        assert_eq!(TokenKind::String.to_string(), "STRING");
        assert_eq!(TokenKind::Semicolon.to_string(), "SEMICOLON");
    }

    #[test]
    fn delimiter_lookup() {
        assert_eq!(TokenKind::delimiter(':'), Some(TokenKind::Colon));
        assert_eq!(TokenKind::delimiter(','), Some(TokenKind::Comma));
        assert_eq!(TokenKind::delimiter(';'), Some(TokenKind::Semicolon));
        assert_eq!(TokenKind::delimiter('a'), None);
    }
}
