//! Read-only views over a [`DomTree`] for printing and export.
//!
//! - [`Html`] writes markup in the manner of `outerHTML`.
//! - [`Outline`] writes an indented debugging view, one node per line,
//!   optionally decorated through an [`OutlineStyle`].
//! - [`NodeView`] implements [`serde::Serialize`] as a nested JSON-friendly shape.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::{DomTree, ElementData, NodeId, NodeType};

/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
///
/// "Void elements only have a start tag; end tags must not be specified for void elements."
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

fn is_void(element: &ElementData) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| element.tag_name.eq_ignore_ascii_case(void))
}

/// [§ 13.3 Serializing HTML fragments](https://html.spec.whatwg.org/multipage/parsing.html#escapingString)
///
/// Attribute-mode escaping: `&` and `"` only.
fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

fn write_start_tag(f: &mut fmt::Formatter<'_>, element: &ElementData) -> fmt::Result {
    write!(f, "<{}", element.tag_name)?;
    for (name, value) in &element.attrs {
        write!(f, " {name}=\"{}\"", escape_attribute(value))?;
    }
    f.write_str(">")
}

/// Markup for a node and its subtree. The fragment root writes only its children.
///
/// Literal content is written verbatim ahead of any child elements.
#[derive(Debug, Clone, Copy)]
pub struct Html<'a> {
    tree: &'a DomTree,
    id: NodeId,
}

impl Html<'_> {
    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId) -> fmt::Result {
        let Some(node) = self.tree.get(id) else {
            return Ok(());
        };
        match &node.node_type {
            NodeType::Fragment => self.write_children(f, id),
            NodeType::Element(element) => {
                write_start_tag(f, element)?;
                if is_void(element) && element.content.is_none() && node.children.is_empty() {
                    return Ok(());
                }
                if let Some(content) = &element.content {
                    f.write_str(content)?;
                }
                self.write_children(f, id)?;
                write!(f, "</{}>", element.tag_name)
            }
        }
    }

    fn write_children(&self, f: &mut fmt::Formatter<'_>, id: NodeId) -> fmt::Result {
        for &child in self.tree.children(id) {
            self.write_node(f, child)?;
        }
        Ok(())
    }
}

impl fmt::Display for Html<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.id)
    }
}

/// Decorates the pieces of an [`Outline`] line, e.g. with terminal colors.
///
/// Every method writes `text` unchanged by default.
pub trait OutlineStyle {
    /// The `#fragment` marker.
    fn fragment(&self, f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
        f.write_str(text)
    }

    /// An element's tag name.
    fn tag_name(&self, f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
        f.write_str(text)
    }

    /// An attribute name.
    fn attribute_name(&self, f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
        f.write_str(text)
    }

    /// Literal content, already quoted.
    fn content(&self, f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
        f.write_str(text)
    }
}

/// The undecorated [`OutlineStyle`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl OutlineStyle for PlainStyle {}

/// Indented one-node-per-line view, two spaces per level.
///
/// ```text
/// #fragment
///   <ul>
///     <li class="a">
///       "literal content"
///     <li>
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Outline<'a, S = PlainStyle> {
    tree: &'a DomTree,
    id: NodeId,
    style: S,
}

impl<S: OutlineStyle> Outline<'_, S> {
    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let Some(node) = self.tree.get(id) else {
            return Ok(());
        };
        let prefix = "  ".repeat(depth);
        f.write_str(&prefix)?;
        match &node.node_type {
            NodeType::Fragment => self.style.fragment(f, "#fragment")?,
            NodeType::Element(element) => {
                f.write_str("<")?;
                self.style.tag_name(f, &element.tag_name)?;
                for (name, value) in &element.attrs {
                    f.write_str(" ")?;
                    self.style.attribute_name(f, name)?;
                    write!(f, "=\"{}\"", escape_attribute(value))?;
                }
                f.write_str(">")?;
                if let Some(content) = &element.content {
                    write!(f, "\n{prefix}  ")?;
                    self.style.content(f, &format!("{content:?}"))?;
                }
            }
        }
        writeln!(f)?;
        for &child in &node.children {
            self.write_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl<S: OutlineStyle> fmt::Display for Outline<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.id, 0)
    }
}

/// A node and its subtree, serializable with serde.
///
/// Fragments serialize as `{"type": "fragment", "children": [...]}` and
/// elements as `{"type": "element", "tagName", "attributes", "content"?,
/// "children"}`. Attributes keep their insertion order.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    tree: &'a DomTree,
    id: NodeId,
}

struct Children<'a> {
    tree: &'a DomTree,
    ids: &'a [NodeId],
}

impl Serialize for Children<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.ids.iter().map(|&id| NodeView {
            tree: self.tree,
            id,
        }))
    }
}

impl Serialize for NodeView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let children = Children {
            tree: self.tree,
            ids: self.tree.children(self.id),
        };
        match self.tree.get(self.id).map(|node| &node.node_type) {
            Some(NodeType::Element(element)) => {
                let mut state = serializer.serialize_struct("Element", 5)?;
                state.serialize_field("type", "element")?;
                state.serialize_field("tagName", &element.tag_name)?;
                state.serialize_field("attributes", &element.attrs)?;
                if let Some(content) = &element.content {
                    state.serialize_field("content", content)?;
                } else {
                    state.skip_field("content")?;
                }
                state.serialize_field("children", &children)?;
                state.end()
            }
            Some(NodeType::Fragment) | None => {
                let mut state = serializer.serialize_struct("Fragment", 2)?;
                state.serialize_field("type", "fragment")?;
                state.serialize_field("children", &children)?;
                state.end()
            }
        }
    }
}

impl DomTree {
    /// Markup for the subtree rooted at `id`.
    #[must_use]
    pub const fn html(&self, id: NodeId) -> Html<'_> {
        Html { tree: self, id }
    }

    /// Markup for the whole fragment: the concatenated markup of its
    /// top-level elements.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.html(NodeId::ROOT).to_string()
    }

    /// Indented debugging view of the subtree rooted at `id`.
    #[must_use]
    pub const fn outline(&self, id: NodeId) -> Outline<'_> {
        self.outline_with(id, PlainStyle)
    }

    /// [`DomTree::outline`] with each piece decorated by `style`.
    #[must_use]
    pub const fn outline_with<S: OutlineStyle>(&self, id: NodeId, style: S) -> Outline<'_, S> {
        Outline {
            tree: self,
            id,
            style,
        }
    }

    /// Serializable view of the subtree rooted at `id`.
    #[must_use]
    pub const fn view(&self, id: NodeId) -> NodeView<'_> {
        NodeView { tree: self, id }
    }
}
