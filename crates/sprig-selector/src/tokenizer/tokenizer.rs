use std::ops::Range;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{CaptureMatches, Regex};

use super::token::{Combinator, Token, TokenKind};

/// One token per match. Alternatives, highest priority first:
///
/// 1. a `(...)` group with one level of nesting,
/// 2. a `[...]` group that may hold nested `[..]` or quoted strings,
/// 3. an escaped character,
/// 4. a run of anything but whitespace, combinators, `,`, `(`, `[` and `\`,
///
/// repeated into one chunk, or else
///
/// 5. a single combinator symbol.
///
/// An optional `,` separator (with surrounding whitespace) follows.
static CHUNKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"((?:\((?:\([^()]+\)|[^()]+)+\)|\[(?:\[[^\[\]]*\]|['"][^'"]*['"]|[^\[\]'"]+)+\]|\\.|[^\s>+~,(\[\\]+)+|[>+~])(\s*,\s*)?"#,
    )
    .expect("chunker pattern is valid")
});

/// Match groups in the chunker regex
#[derive(Debug, Clone, Copy)]
enum ChunkerGroup {
    Token = 1,
    Separator = 2,
}

/// Scan `selector` into tokens.
///
/// The returned iterator is lazy and holds no state beyond its position in
/// `selector`, so calling `tokenize` again restarts from the beginning.
/// Input that no alternative accepts is stepped over; use [`skipped_spans`]
/// to find it.
#[must_use]
pub fn tokenize(selector: &str) -> Tokenizer<'_> {
    Tokenizer {
        captures: CHUNKER.captures_iter(selector),
    }
}

/// Iterator over the tokens of a selector string. Created by [`tokenize`].
pub struct Tokenizer<'a> {
    captures: CaptureMatches<'static, 'a>,
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.captures.next()?;
        let text = caps.get(ChunkerGroup::Token as usize)?;
        let kind = match Combinator::from_str(text.as_str()) {
            Ok(combinator) => TokenKind::Combinator(combinator),
            Err(_) => TokenKind::Compound(text.as_str()),
        };
        Some(Token {
            kind,
            span: text.range(),
            separator: caps
                .get(ChunkerGroup::Separator as usize)
                .map(|separator| separator.range()),
        })
    }
}

/// Byte ranges of non-whitespace input that the scan stepped over while
/// producing `tokens`, e.g. an unmatched `[` or a leading `,`.
///
/// `tokens` must be the complete, in-order output of [`tokenize`] for `selector`.
#[must_use]
pub fn skipped_spans(selector: &str, tokens: &[Token<'_>]) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut position = 0;
    let boundaries = tokens
        .iter()
        .map(|token| (token.span.start, token.end()))
        .chain(std::iter::once((selector.len(), selector.len())));

    for (start, end) in boundaries {
        if let Some(gap) = selector.get(position..start) {
            let trimmed = gap.trim_start();
            if !trimmed.is_empty() {
                let from = position + (gap.len() - trimmed.len());
                let to = from + trimmed.trim_end().len();
                spans.push(from..to);
            }
        }
        position = end;
    }
    spans
}
