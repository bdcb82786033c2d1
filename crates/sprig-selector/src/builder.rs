//! The insertion-cursor tree builder.
//!
//! Tokens are walked left to right with a cursor on the container the next
//! element is appended to. For token `i`:
//!
//! - `+` / `~`: build the chunk at `i - 1` and append it to the cursor. The
//!   cursor stays put, so whatever follows lands at the same level.
//! - `>`: replace token `i` with the chunk at `i - 1`, then handle it as a chunk.
//! - a chunk: if token `i + 1` is a combinator, do nothing yet (that
//!   combinator reaches back for it). Otherwise build it, append it to the
//!   cursor, and move the cursor into it.
//!
//! So `a b` and `a > b` both nest `b` in `a`, while `a + b` puts both under
//! the cursor. `ul > li + li` builds `ul` once, at the `>`, then two `li`
//! children.

use sprig_common::warning::warn_once;
use sprig_dom::DomTree;

use crate::compound;
use crate::issue::{BuildIssue, IssueKind};
use crate::options::{BuildOptions, GroupMode};
use crate::sink::TreeSink;
use crate::tokenizer::{Combinator, Token, TokenKind, skipped_spans, tokenize};

/// A simple-selector chunk and where it starts in the selector.
#[derive(Debug, Clone, Copy)]
struct Chunk<'a> {
    text: &'a str,
    offset: usize,
}

/// A token as the cursor walk sees it. `>` tokens are overwritten with the
/// chunk before them while walking.
#[derive(Debug, Clone, Copy)]
enum Part<'a> {
    Chunk(Chunk<'a>),
    Combinator(Combinator, usize),
}

impl<'a> From<&Token<'a>> for Part<'a> {
    fn from(token: &Token<'a>) -> Self {
        match token.kind {
            TokenKind::Compound(text) => Self::Chunk(Chunk {
                text,
                offset: token.span.start,
            }),
            TokenKind::Combinator(combinator) => Self::Combinator(combinator, token.span.start),
        }
    }
}

/// The tree a build produced, plus everything it had to skip on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutput<T = DomTree> {
    /// The finished tree, as returned by [`TreeSink::finish`].
    pub tree: T,
    /// Issues in the order they were found.
    pub issues: Vec<BuildIssue>,
}

/// Builds one selector into one sink. Consumed by [`TreeBuilder::run`].
pub struct TreeBuilder<'a, S: TreeSink> {
    /// The selector being built.
    selector: &'a str,

    /// Every token of `selector`, in source order.
    tokens: Vec<Token<'a>>,

    /// Where elements are created.
    sink: S,

    options: &'a BuildOptions,

    /// The container the next descendant is appended to.
    cursor: S::Handle,

    issues: Vec<BuildIssue>,
}

impl<'a, S: TreeSink> TreeBuilder<'a, S> {
    /// Tokenize `selector` and set the cursor on the sink's fragment.
    #[must_use]
    pub fn new(selector: &'a str, sink: S, options: &'a BuildOptions) -> Self {
        let cursor = sink.fragment();
        Self {
            selector,
            tokens: tokenize(selector).collect(),
            sink,
            options,
            cursor,
            issues: Vec::new(),
        }
    }

    /// Build every token and hand back the finished tree.
    #[must_use]
    pub fn run(mut self) -> BuildOutput<S::Output> {
        for span in skipped_spans(self.selector, &self.tokens) {
            let text = self.selector[span.clone()].to_string();
            self.record(span.start, IssueKind::SkippedInput(text));
        }

        for group in self.groups() {
            self.cursor = self.sink.fragment();
            self.build_group(group);
        }

        BuildOutput {
            tree: self.sink.finish(),
            issues: self.issues,
        }
    }

    /// Split the tokens at `,` separators when each group restarts; otherwise
    /// the whole selector is one group.
    fn groups(&self) -> Vec<Vec<Part<'a>>> {
        let mut groups = Vec::new();
        let mut current = Vec::new();
        for token in &self.tokens {
            current.push(Part::from(token));
            if self.options.group_mode == GroupMode::Restart && token.ends_group() {
                groups.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            groups.push(current);
        }
        groups
    }

    fn build_group(&mut self, mut parts: Vec<Part<'a>>) {
        for index in 0..parts.len() {
            let part = parts[index];
            match part {
                Part::Chunk(_) => self.descend_unless_deferred(&parts, index),
                Part::Combinator(combinator, offset) => {
                    let previous = index
                        .checked_sub(1)
                        .and_then(|i| parts.get(i))
                        .and_then(|part| match part {
                            Part::Chunk(chunk) => Some(*chunk),
                            Part::Combinator(..) => None,
                        });

                    match previous {
                        Some(chunk) if combinator.is_sibling() => {
                            let element = self.create(chunk);
                            self.sink.append_child(self.cursor, element);
                        }
                        Some(chunk) => {
                            parts[index] = Part::Chunk(chunk);
                            self.descend_unless_deferred(&parts, index);
                        }
                        None => self.record(offset, IssueKind::DanglingCombinator(combinator)),
                    }

                    if index + 1 == parts.len() {
                        self.record(offset, IssueKind::TrailingCombinator(combinator));
                    }
                }
            }
        }
    }

    /// Build the chunk at `index` and move the cursor into it, unless a
    /// combinator follows and will build it instead.
    fn descend_unless_deferred(&mut self, parts: &[Part<'a>], index: usize) {
        if matches!(parts.get(index + 1), Some(Part::Combinator(..))) {
            return;
        }
        let Some(Part::Chunk(chunk)) = parts.get(index).copied() else {
            return;
        };
        let element = self.create(chunk);
        self.sink.append_child(self.cursor, element);
        self.cursor = element;
    }

    fn create(&mut self, chunk: Chunk<'a>) -> S::Handle {
        let mut found = Vec::new();
        let compound = compound::extract(chunk.text, self.options.default_tag(), &mut found);
        for issue in found {
            self.record(chunk.offset + issue.offset, issue.kind);
        }
        compound.instantiate(&mut self.sink)
    }

    fn record(&mut self, offset: usize, kind: IssueKind) {
        let issue = BuildIssue::new(offset, kind);
        if self.options.warnings {
            warn_once("Selector", &format!("{issue} in {:?}", self.selector));
        }
        self.issues.push(issue);
    }
}

/// Build `selector` into `sink`.
pub fn build_into<S: TreeSink>(
    selector: &str,
    sink: S,
    options: &BuildOptions,
) -> BuildOutput<S::Output> {
    TreeBuilder::new(selector, sink, options).run()
}

