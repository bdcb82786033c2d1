use std::ops::Range;

use strum_macros::{Display, EnumString};

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// The explicit combinator symbols. The descendant combinator has no symbol:
/// it is the adjacency of two compound tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Combinator {
    /// `A > B`: B is built as a child of A.
    #[strum(serialize = ">")]
    Child,
    /// `A + B`: B is built next to A, under the same container.
    #[strum(serialize = "+")]
    NextSibling,
    /// `A ~ B`: built exactly like [`Combinator::NextSibling`].
    #[strum(serialize = "~")]
    SubsequentSibling,
}

impl Combinator {
    /// Whether this combinator attaches at the current level instead of descending.
    #[must_use]
    pub const fn is_sibling(self) -> bool {
        matches!(self, Self::NextSibling | Self::SubsequentSibling)
    }
}

/// What a token's text was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// A simple-selector chunk: optional tag plus `#id`, `.class` and
    /// `[attr]` modifiers, e.g. `li.item#first[data-x="a b"]`.
    Compound(&'a str),
    /// A lone `>`, `+` or `~`.
    Combinator(Combinator),
}

/// A token with its position in the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// The classified token text.
    pub kind: TokenKind<'a>,
    /// Byte range of the token text.
    pub span: Range<usize>,
    /// Byte range of the `,` group separator (with surrounding whitespace)
    /// that immediately followed the token, if any.
    pub separator: Option<Range<usize>>,
}

impl<'a> Token<'a> {
    /// The chunk text, if this is a compound token.
    #[must_use]
    pub const fn compound(&self) -> Option<&'a str> {
        match self.kind {
            TokenKind::Compound(chunk) => Some(chunk),
            TokenKind::Combinator(_) => None,
        }
    }

    /// The combinator, if this is a combinator token.
    #[must_use]
    pub const fn combinator(&self) -> Option<Combinator> {
        match self.kind {
            TokenKind::Combinator(combinator) => Some(combinator),
            TokenKind::Compound(_) => None,
        }
    }

    /// Whether a `,` closes the selector group after this token.
    #[must_use]
    pub const fn ends_group(&self) -> bool {
        self.separator.is_some()
    }

    /// Byte offset just past everything this token consumed.
    #[must_use]
    pub fn end(&self) -> usize {
        self.separator
            .as_ref()
            .map_or(self.span.end, |separator| separator.end)
    }
}
