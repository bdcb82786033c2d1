use thiserror::Error;

use crate::tokenizer::Combinator;

/// Something in the selector that was skipped or reinterpreted.
///
/// None of these stop a build; they describe where the tree is less literal
/// than the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssueKind {
    /// Input no token alternative accepts, such as a stray `,` or an
    /// unbalanced `[`.
    #[error("skipped unrecognized input {0:?}")]
    SkippedInput(String),
    /// A combinator with no compound selector before it in its group.
    #[error("combinator '{0}' has no compound selector before it")]
    DanglingCombinator(Combinator),
    /// A combinator that ends its group.
    #[error("combinator '{0}' is not followed by a compound selector")]
    TrailingCombinator(Combinator),
    /// A second or later `#id` in one chunk.
    #[error("ignored extra id '#{0}'")]
    ExtraId(String),
    /// A parenthesized group, which has no meaning when building.
    #[error("ignored parenthesized group {0:?}")]
    IgnoredGroup(String),
    /// Chunk text that is not a tag, class, id or attribute.
    #[error("ignored unrecognized text {0:?}")]
    UnrecognizedText(String),
}

/// An [`IssueKind`] with the byte offset in the selector where it starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at byte {offset}")]
pub struct BuildIssue {
    /// What happened.
    pub kind: IssueKind,
    /// Byte offset into the selector string.
    pub offset: usize,
}

impl BuildIssue {
    pub(crate) const fn new(offset: usize, kind: IssueKind) -> Self {
        Self { kind, offset }
    }
}
