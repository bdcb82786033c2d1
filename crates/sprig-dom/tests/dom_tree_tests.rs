//! Tests for tree construction, traversal, and serialization.

use std::fmt;

use sprig_dom::{DomTree, ElementData, NodeId, NodeType, OutlineStyle};

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.create_element(ElementData::new(tag))
}

// ========== construction ==========

#[test]
fn test_new_tree_is_empty_fragment() {
    let tree = DomTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 1);
    assert!(matches!(
        tree.get(NodeId::ROOT).map(|n| &n.node_type),
        Some(NodeType::Fragment)
    ));
    assert!(tree.as_element(tree.root()).is_none());
    assert!(tree.top_level().is_empty());
}

#[test]
fn test_append_child_links_siblings() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "ul");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "li");
    let b = alloc_element(&mut tree, "li");
    let c = alloc_element(&mut tree, "li");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);

    assert_eq!(tree.children(parent), &[a, b, c]);
    assert_eq!(tree.parent(b), Some(parent));
    assert_eq!(tree.first_child(parent), Some(a));
    assert_eq!(tree.last_child(parent), Some(c));
    assert_eq!(tree.prev_sibling(a), None);
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.prev_sibling(c), Some(b));
    assert_eq!(tree.next_sibling(c), None);
}

#[test]
#[should_panic(expected = "already attached")]
#[cfg(debug_assertions)]
fn test_append_child_twice_panics_in_debug() {
    let mut tree = DomTree::new();
    let node = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, node);
    tree.append_child(NodeId::ROOT, node);
}

// ========== traversal ==========

#[test]
fn test_ancestors_and_descendants() {
    let mut tree = DomTree::new();
    let outer = alloc_element(&mut tree, "div");
    let middle = alloc_element(&mut tree, "section");
    let inner = alloc_element(&mut tree, "p");
    let sibling = alloc_element(&mut tree, "aside");
    tree.append_child(NodeId::ROOT, outer);
    tree.append_child(outer, middle);
    tree.append_child(middle, inner);
    tree.append_child(outer, sibling);

    let ancestors: Vec<NodeId> = tree.ancestors(inner).collect();
    assert_eq!(ancestors, vec![middle, outer, NodeId::ROOT]);
    assert!(tree.is_descendant_of(inner, outer));
    assert!(!tree.is_descendant_of(sibling, middle));

    let order: Vec<NodeId> = tree.descendants(NodeId::ROOT).collect();
    assert_eq!(order, vec![outer, middle, inner, sibling]);
}

// ========== element data ==========

#[test]
fn test_element_data_accessors() {
    let mut data = ElementData::new("div");
    data.set_attribute("class", "a b a");
    data.set_attribute("id", "main");
    data.set_attribute("data-x", "1");

    assert_eq!(data.class_name(), Some("a b a"));
    assert_eq!(data.classes(), vec!["a", "b", "a"]);
    assert_eq!(data.id(), Some("main"));
    assert_eq!(data.attribute("data-x"), Some("1"));
    assert_eq!(data.attribute("missing"), None);
    assert_eq!(data.content(), None);
}

#[test]
fn test_set_attribute_keeps_position() {
    let mut data = ElementData::new("a");
    data.set_attribute("href", "/one");
    data.set_attribute("title", "t");
    data.set_attribute("href", "/two");

    let names: Vec<&str> = data.attrs.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["href", "title"]);
    assert_eq!(data.attribute("href"), Some("/two"));
}

#[test]
fn test_trees_compare_structurally() {
    let build = || {
        let mut tree = DomTree::new();
        let div = alloc_element(&mut tree, "div");
        tree.append_child(NodeId::ROOT, div);
        let span = alloc_element(&mut tree, "span");
        tree.append_child(div, span);
        tree
    };
    assert_eq!(build(), build());

    let mut other = build();
    if let Some(data) = other.as_element_mut(NodeId(2)) {
        data.set_attribute("id", "x");
    }
    assert_ne!(build(), other);
}

// ========== serialization ==========

fn sample_tree() -> DomTree {
    let mut tree = DomTree::new();
    let mut div = ElementData::new("div");
    div.set_attribute("class", "card");
    div.set_attribute("title", "say \"hi\" & go");
    let div = tree.create_element(div);
    tree.append_child(NodeId::ROOT, div);

    let mut p = ElementData::new("p");
    p.content = Some("<b>hi</b>".to_string());
    let p = tree.create_element(p);
    tree.append_child(div, p);

    let br = alloc_element(&mut tree, "br");
    tree.append_child(div, br);

    let span = alloc_element(&mut tree, "span");
    tree.append_child(NodeId::ROOT, span);
    tree
}

#[test]
fn test_to_html() {
    let tree = sample_tree();
    assert_eq!(
        tree.to_html(),
        "<div class=\"card\" title=\"say &quot;hi&quot; &amp; go\"><p><b>hi</b></p><br></div><span></span>"
    );
}

#[test]
fn test_outline() {
    let tree = sample_tree();
    let expected = "\
#fragment
  <div class=\"card\" title=\"say &quot;hi&quot; &amp; go\">
    <p>
      \"<b>hi</b>\"
    <br>
  <span>
";
    assert_eq!(tree.outline(NodeId::ROOT).to_string(), expected);
}

/// Wraps each decorated piece in brackets naming its role.
struct Tagged;

impl OutlineStyle for Tagged {
    fn tag_name(&self, f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
        write!(f, "{{tag:{text}}}")
    }

    fn attribute_name(&self, f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
        write!(f, "{{attr:{text}}}")
    }

    fn content(&self, f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
        write!(f, "{{content:{text}}}")
    }
}

#[test]
fn test_outline_with_style() {
    let tree = sample_tree();
    let div = tree.top_level()[0];
    let expected = "\
<{tag:div} {attr:class}=\"card\" {attr:title}=\"say &quot;hi&quot; &amp; go\">
  <{tag:p}>
    {content:\"<b>hi</b>\"}
  <{tag:br}>
";
    assert_eq!(tree.outline_with(div, Tagged).to_string(), expected);

    // The fragment marker keeps the default, undecorated form.
    let whole = tree.outline_with(NodeId::ROOT, Tagged).to_string();
    assert!(whole.starts_with("#fragment\n  <{tag:div}"));
}

#[test]
fn test_json_view() {
    let tree = sample_tree();
    let json = serde_json::to_value(tree.view(NodeId::ROOT)).unwrap();

    assert_eq!(json["type"], "fragment");
    let children = json["children"].as_array().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["tagName"], "div");
    assert_eq!(children[0]["attributes"]["class"], "card");
    assert!(children[0].get("content").is_none());
    assert_eq!(children[0]["children"][0]["content"], "<b>hi</b>");
    assert_eq!(children[1]["tagName"], "span");
}
