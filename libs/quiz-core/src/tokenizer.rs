//! Tokenizer for quiz data files.
//!
//! Every character is either whitespace (skipped outside of strings), one of
//! the delimiters `:` `,` `;`, or part of a string running up to the next
//! delimiter. Strings keep their internal whitespace verbatim.

use crate::error::LexError;
use crate::types::{Position, Token, TokenKind};
use std::io::Read;

/// Read the whole stream and tokenize it.
pub fn tokenize<R: Read>(mut reader: R) -> Result<Vec<Token>, LexError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    let tokens = tokenize_str(&content);
    tracing::trace!(count = tokens.len(), "tokenized quiz data");
    Ok(tokens)
}

/// Tokenize in-memory content. Never fails.
pub fn tokenize_str(content: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(content);
    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.next_token() {
        tokens.push(token);
    }
    tokens
}

struct Tokenizer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            chars: content.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let c = *self.chars.peek()?;
        let position = self.position();

        if let Some(kind) = TokenKind::delimiter(c) {
            self.chars.next();
            self.advance(c);
            return Some(Token::delimiter(kind, position));
        }

        let mut text = String::new();
        // The delimiter that ends a string stays in the stream for the next call.
        // Inside a string every character, newlines included, is one column.
        while let Some(&c) = self.chars.peek() {
            if TokenKind::delimiter(c).is_some() {
                break;
            }
            self.chars.next();
            self.column += 1;
            text.push(c);
        }
        Some(Token::string(text, position))
    }

    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if !is_separator(c) {
                break;
            }
            self.chars.next();
            self.advance(c);
        }
    }
}

/// Whitespace that separates tokens: ASCII space, tab, newline, vertical
/// tab, form feed and carriage return. Any other character starts a string.
pub(crate) fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}
