//! Parser for quiz data files.
//!
//! # Format
//! ```text
//! ア : a ;
//! シ : shi, si ;
//! ```
//!
//! Each row is a key, a colon, one or more comma separated answers and a
//! closing semicolon. One malformed row fails the whole file.

use crate::error::{ParseError, RenderError, Result};
use crate::tokenizer::{is_separator, tokenize_str};
use crate::types::{Position, QuestionRecord, RecordSet, Token, TokenKind};

/// Parse a token sequence into records.
///
/// `source_name` identifies the data file in error messages.
pub fn parse(tokens: Vec<Token>, source_name: &str) -> Result<RecordSet> {
    Parser::new(tokens, source_name).parse_file()
}

/// Tokenize and parse in-memory content.
pub fn parse_str(content: &str, source_name: &str) -> Result<RecordSet> {
    parse(tokenize_str(content), source_name)
}

struct Parser<'a> {
    tokens: std::vec::IntoIter<Token>,
    peeked: Option<Token>,
    last_position: Position,
    source_name: &'a str,
}

impl<'a> Parser<'a> {
    fn new(tokens: Vec<Token>, source_name: &'a str) -> Self {
        Self {
            tokens: tokens.into_iter(),
            peeked: None,
            last_position: Position::default(),
            source_name,
        }
    }

    fn parse_file(mut self) -> Result<RecordSet> {
        let mut records = Vec::new();

        while let Some((kind, position)) = self.peek_kind() {
            if kind != TokenKind::String {
                return Err(self.unexpected(position, TokenKind::String, kind));
            }
            records.push(self.parse_row()?);
        }

        tracing::debug!(source = self.source_name, records = records.len(), "parsed quiz data");
        Ok(records)
    }

    fn parse_row(&mut self) -> Result<QuestionRecord> {
        let key = self.expect_string()?;
        self.expect(TokenKind::Colon)?;
        let mut record = QuestionRecord::new(key, self.expect_string()?);

        while self.accept(TokenKind::Comma) {
            record.push_answer(self.expect_string()?);
        }

        self.expect(TokenKind::Semicolon)?;
        Ok(record)
    }

    fn peek_kind(&mut self) -> Option<(TokenKind, Position)> {
        if self.peeked.is_none() {
            self.peeked = self.tokens.next();
        }
        self.peeked.as_ref().map(|t| (t.kind, t.position))
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peeked.take().or_else(|| self.tokens.next())?;
        self.last_position = token.position;
        Some(token)
    }

    fn accept(&mut self, kind: TokenKind) -> bool {
        if self.peek_kind().is_some_and(|(found, _)| found == kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        match self.peek_kind() {
            Some((found, _)) if found == kind => self.bump().ok_or_else(|| self.unexpected_end(kind)),
            Some((found, position)) => Err(self.unexpected(position, kind, found)),
            None => Err(self.unexpected_end(kind)),
        }
    }

    fn expect_string(&mut self) -> Result<String> {
        let token = self.expect(TokenKind::String)?;
        Ok(token.text.unwrap_or_default())
    }

    fn unexpected(&self, position: Position, expected: TokenKind, found: TokenKind) -> ParseError {
        ParseError::UnexpectedToken {
            source_name: self.source_name.to_string(),
            line: position.line,
            column: position.column,
            expected,
            found,
        }
    }

    // Reported at the last token consumed, since there is no token for end of input.
    fn unexpected_end(&self, expected: TokenKind) -> ParseError {
        ParseError::UnexpectedEnd {
            source_name: self.source_name.to_string(),
            line: self.last_position.line,
            column: self.last_position.column,
            expected,
        }
    }
}

/// Render records back into the data file format, one row per line.
///
/// Fails for values the format cannot carry: empty strings, strings starting
/// with whitespace, and strings containing a delimiter.
pub fn render(records: &[QuestionRecord]) -> std::result::Result<String, RenderError> {
    let mut out = String::new();
    for record in records {
        for value in std::iter::once(record.key()).chain(record.answers().iter().map(String::as_str)) {
            if !is_representable(value) {
                return Err(RenderError::Unrepresentable {
                    key: record.key().to_string(),
                    value: value.to_string(),
                });
            }
        }
        out.push_str(&format!("{}:{};\n", record.key(), record.answers().join(",")));
    }
    Ok(out)
}

fn is_representable(value: &str) -> bool {
    match value.chars().next() {
        Some(first) => !is_separator(first) && !value.chars().any(|c| TokenKind::delimiter(c).is_some()),
        None => false,
    }
}
