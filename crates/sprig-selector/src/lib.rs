//! Build element trees from CSS-selector-like strings.
//!
//! ```
//! let tree = sprig_selector::build("ul#menu > li.item + li.item[html=Two]");
//! assert_eq!(
//!     tree.to_html(),
//!     r#"<ul id="menu"><li class="item"></li><li class="item">Two</li></ul>"#
//! );
//! ```
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer** - splits a selector into simple-selector chunks and the
//!   `>`, `+`, `~` combinators, stepping over anything it cannot read
//! - **Modifier Extractor** - reads a chunk's tag, `.class`es, `#id` and
//!   `[attr=value]` groups, with `[html=...]` setting literal content
//! - **Tree Builder** - walks the tokens with an insertion cursor: adjacency
//!   and `>` nest, `+` and `~` attach at the same level
//!
//! Building never fails. Anything skipped is reported as a [`BuildIssue`].
//!
//! # Not Implemented
//!
//! - Selector matching, specificity and pseudo-classes
//! - Operator-specific attribute semantics (`^=`, `*=` are read as `=`)

/// Insertion-cursor tree builder.
pub mod builder;
/// Chunk to element extraction.
pub mod compound;
/// Diagnostics recorded while building.
pub mod issue;
/// Build configuration.
pub mod options;
/// The tree factory abstraction.
pub mod sink;
/// Selector tokenizer.
pub mod tokenizer;

pub use builder::{BuildOutput, TreeBuilder, build_into};
pub use compound::{Assignment, Compound, is_content_marker};
pub use issue::{BuildIssue, IssueKind};
pub use options::{BuildOptions, DEFAULT_TAG, GroupMode};
pub use sink::TreeSink;
pub use tokenizer::{Combinator, Token, TokenKind, tokenize};

use sprig_dom::DomTree;

/// Build `selector` with default options and return the fragment.
#[must_use]
pub fn build(selector: &str) -> DomTree {
    build_with_options(selector, &BuildOptions::default()).tree
}

/// Build `selector` into a new [`DomTree`], returning the tree and any issues.
#[must_use]
pub fn build_with_options(selector: &str, options: &BuildOptions) -> BuildOutput {
    build_into(selector, DomTree::new(), options)
}
