//! Selector tokenizer module.

/// Token types produced by the scanner.
pub mod token;
/// Regex-driven scanner over a selector string.
#[allow(clippy::module_inception)]
pub mod tokenizer;

pub use token::{Combinator, Token, TokenKind};
pub use tokenizer::{Tokenizer, skipped_spans, tokenize};
