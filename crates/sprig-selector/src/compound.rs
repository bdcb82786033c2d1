//! Modifier extraction: one simple-selector chunk to one element.
//!
//! A chunk such as `a.button.primary#go[href="/next"][html=Next]` is read in
//! independent passes: attributes, tag, then `#id` / `.class` modifiers.
//! Modifiers are scanned over the whole chunk past the tag, attribute values
//! included, so `a[href=#top]` also gets the id `top`. Text that no pass
//! claimed is reported.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::issue::{BuildIssue, IssueKind};
use crate::options::DEFAULT_TAG;
use crate::sink::TreeSink;

/// A name character run: word characters, `-`, U+00C0–U+FFFF, or escapes.
const NAME: &str = r"(?:[\w\x{00C0}-\x{FFFF}\-]|\\.)+";

/// Leading tag name; `*` is accepted here and means "default tag".
static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[\w\x{00C0}-\x{FFFF}*\-]|\\.)+").expect("tag pattern is valid")
});

/// `#id` or `.class`, scanned together so an escaped `\.` or `\#` inside one
/// name is never read as the start of another.
static MODIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"([#.])({NAME})")).expect("modifier pattern is valid")
});

/// `[name]`, `[name=value]`, `[name op= "value"]`, `[name='value']`.
static ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r#"\[\s*({NAME})\s*(?:(\S?=)\s*(?:"(.*?)"|'(.*?)'|([^\]]*?)))?\s*\]"#
    ))
    .expect("attribute pattern is valid")
});

/// A parenthesized group with one level of nesting.
static GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((?:\([^()]*\)|[^()])*\)").expect("group pattern is valid"));

/// Match groups in the attribute regex
#[derive(Debug, Clone, Copy)]
enum AttrGroup {
    Name = 1,
    DoubleQuoted = 3,
    SingleQuoted = 4,
    Unquoted = 5,
}

/// Attribute names whose value becomes the element's literal content.
/// Only exact names count: `data-html` stays a regular attribute.
const CONTENT_MARKERS: &[&str] = &["html", "innerhtml"];

/// One attribute fragment, resolved to what it does to the element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    /// `[name=value]`: set a regular attribute.
    Attribute {
        /// Attribute name, unescaped.
        name: String,
        /// Attribute value; empty for `[name]`.
        value: String,
    },
    /// `[html=value]` or `[innerHTML=value]`: set literal content.
    Content(String),
}

/// Everything one chunk says about the element it builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compound {
    /// Tag name, or the default tag when the chunk has none.
    pub tag_name: String,
    /// Every `.class` in source order, joined with single spaces.
    pub class_name: Option<String>,
    /// The first `#id`.
    pub id: Option<String>,
    /// Attribute and content assignments in source order.
    pub assignments: Vec<Assignment>,
}

impl Compound {
    /// Read a chunk, defaulting the tag to `div`.
    #[must_use]
    pub fn parse(chunk: &str) -> Self {
        Self::parse_with_default(chunk, DEFAULT_TAG)
    }

    /// Read a chunk, defaulting the tag to `default_tag`.
    #[must_use]
    pub fn parse_with_default(chunk: &str, default_tag: &str) -> Self {
        extract(chunk, default_tag, &mut Vec::new())
    }

    /// The regular attributes, in source order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.assignments.iter().filter_map(|assignment| match assignment {
            Assignment::Attribute { name, value } => Some((name.as_str(), value.as_str())),
            Assignment::Content(_) => None,
        })
    }

    /// The content the element ends up with: the last content assignment.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.assignments
            .iter()
            .rev()
            .find_map(|assignment| match assignment {
                Assignment::Content(content) => Some(content.as_str()),
                Assignment::Attribute { .. } => None,
            })
    }

    /// Create the element in `sink`: tag, then class, then id, then each
    /// assignment in order. The element is returned detached.
    pub fn instantiate<S: TreeSink>(&self, sink: &mut S) -> S::Handle {
        let element = sink.create_element(&self.tag_name);
        if let Some(class_name) = &self.class_name {
            sink.set_class_name(element, class_name);
        }
        if let Some(id) = &self.id {
            sink.set_id(element, id);
        }
        for assignment in &self.assignments {
            match assignment {
                Assignment::Attribute { name, value } => sink.set_attribute(element, name, value),
                Assignment::Content(content) => sink.set_content(element, content),
            }
        }
        element
    }
}

/// Read `chunk`, recording anything ignored in `issues` with offsets
/// relative to the start of the chunk.
pub(crate) fn extract(chunk: &str, default_tag: &str, issues: &mut Vec<BuildIssue>) -> Compound {
    // Text not yet claimed by any pass; claimed ranges are blanked with spaces
    // so byte offsets stay aligned with `chunk`.
    let mut rest = chunk.to_string();

    let mut assignments = Vec::new();
    for caps in ATTR.captures_iter(chunk) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let name = caps
            .get(AttrGroup::Name as usize)
            .map_or_else(String::new, |m| unescape(m.as_str()));
        let value = [
            AttrGroup::DoubleQuoted,
            AttrGroup::SingleQuoted,
            AttrGroup::Unquoted,
        ]
        .into_iter()
        .find_map(|group| caps.get(group as usize))
        .map_or_else(String::new, |m| m.as_str().to_string());

        if is_content_marker(&name) {
            assignments.push(Assignment::Content(value));
        } else {
            assignments.push(Assignment::Attribute { name, value });
        }
        blank(&mut rest, whole.range());
    }

    let groups: Vec<Range<usize>> = GROUP.find_iter(&rest).map(|m| m.range()).collect();
    for range in groups {
        issues.push(BuildIssue::new(
            range.start,
            IssueKind::IgnoredGroup(chunk[range.clone()].to_string()),
        ));
        blank(&mut rest, range);
    }

    // Modifiers see everything but the tag, so an escaped `\.` in the tag is
    // not read as a class.
    let mut modifier_text = chunk.to_string();
    let tag_name = match TAG.find(&rest) {
        Some(m) => {
            let range = m.range();
            let tag = unescape(m.as_str());
            blank(&mut rest, range.clone());
            blank(&mut modifier_text, range);
            if tag == "*" {
                default_tag.to_string()
            } else {
                tag
            }
        }
        None => default_tag.to_string(),
    };

    let mut classes = Vec::new();
    let mut id = None;
    let modifiers: Vec<(Range<usize>, bool, String)> = MODIFIER
        .captures_iter(&modifier_text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let is_id = caps.get(1)?.as_str() == "#";
            let name = unescape(caps.get(2)?.as_str());
            Some((whole.range(), is_id, name))
        })
        .collect();
    for (range, is_id, name) in modifiers {
        match (is_id, id.is_some()) {
            (false, _) => classes.push(name),
            (true, false) => id = Some(name),
            (true, true) => issues.push(BuildIssue::new(range.start, IssueKind::ExtraId(name))),
        }
        blank(&mut rest, range);
    }

    let leftover = rest.trim_start();
    if !leftover.is_empty() {
        let offset = rest.len() - leftover.len();
        let text = leftover.split_whitespace().collect::<Vec<_>>().join(" ");
        issues.push(BuildIssue::new(offset, IssueKind::UnrecognizedText(text)));
    }

    Compound {
        tag_name,
        class_name: (!classes.is_empty()).then(|| classes.join(" ")),
        id,
        assignments,
    }
}

/// Whether an attribute name selects literal content (`html` / `innerHTML`,
/// ASCII case-insensitive).
#[must_use]
pub fn is_content_marker(name: &str) -> bool {
    CONTENT_MARKERS
        .iter()
        .any(|marker| name.eq_ignore_ascii_case(marker))
}

/// Drop the backslash from every `\x` escape.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn blank(text: &mut String, range: Range<usize>) {
    let spaces = " ".repeat(range.len());
    text.replace_range(range, &spaces);
}
