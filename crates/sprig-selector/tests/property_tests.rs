//! Property tests for the builder and tokenizer.

use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;
use sprig_dom::NodeId;
use sprig_selector::{BuildOptions, build_with_options, tokenize};

/// A plain lowercase tag name, 1 to 8 letters.
#[derive(Debug, Clone)]
struct TagName(String);

impl Arbitrary for TagName {
    fn arbitrary(g: &mut Gen) -> Self {
        const LETTERS: &[char] = &[
            'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q',
            'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
        ];
        let len = usize::arbitrary(g) % 8 + 1;
        let name = (0..len)
            .map(|_| *g.choose(LETTERS).unwrap_or(&'a'))
            .collect();
        Self(name)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let name = self.0.clone();
        Box::new((1..name.len()).map(move |len| Self(name[..len].to_string())))
    }
}

fn quiet() -> BuildOptions {
    BuildOptions::default().with_warnings(false)
}

#[quickcheck]
fn bare_tag_builds_one_plain_element(tag: TagName) -> bool {
    let output = build_with_options(&tag.0, &quiet());
    let tree = &output.tree;
    let [only] = tree.children(NodeId::ROOT) else {
        return false;
    };
    let Some(data) = tree.as_element(*only) else {
        return false;
    };
    output.issues.is_empty()
        && data.tag_name == tag.0
        && data.attrs.is_empty()
        && data.content.is_none()
        && tree.children(*only).is_empty()
}

#[quickcheck]
fn building_is_idempotent(selector: String) -> bool {
    let first = build_with_options(&selector, &quiet());
    let second = build_with_options(&selector, &quiet());
    first == second
}

#[quickcheck]
fn token_spans_point_at_their_text(selector: String) -> TestResult {
    if selector.is_empty() {
        return TestResult::discard();
    }
    let consistent = tokenize(&selector).all(|token| {
        let text = &selector[token.span.clone()];
        match token.compound() {
            Some(chunk) => chunk == text,
            None => token.combinator().is_some_and(|c| c.to_string() == text),
        }
    });
    TestResult::from_bool(consistent)
}

#[quickcheck]
fn tokens_are_in_source_order(selector: String) -> bool {
    let tokens: Vec<_> = tokenize(&selector).collect();
    tokens
        .windows(2)
        .all(|pair| pair[0].end() <= pair[1].span.start)
}
