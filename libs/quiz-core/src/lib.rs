//! Core quiz library used by the katacant terminal trainer.
//!
//! Provides:
//! - Tokenizer and parser for `KEY : ANSWER [, ANSWER]* ;` data files
//! - Seeded question sampler (fresh pass, then overflow with replacement)
//! - Case-insensitive answer matching
//! - Built-in game modes and their data files

pub mod error;
pub mod loader;
pub mod matching;
pub mod mode;
pub mod parser;
pub mod sampler;
pub mod tokenizer;
pub mod types;

pub use error::{LexError, LoadError, ParseError, RenderError, Result};
pub use loader::load;
pub use matching::{compare_answers, MatchResult};
pub use mode::GameMode;
pub use parser::{parse, parse_str, render};
pub use sampler::{sample, Sampler};
pub use tokenizer::{tokenize, tokenize_str};
pub use types::{Position, QuestionRecord, RecordSet, Token, TokenKind};
