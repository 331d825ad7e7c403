//! A minimal selector engine over canonical trees.
//!
//! Selectors are whitespace separated descendant chains of simple selectors:
//! a bare tag name, `#id` or `.class`. Matching walks the tree itself; the
//! precomputed path strings are never consulted.

use crate::node::CanonicalNode;

/// One segment of a descendant chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Tag(String),
    Id(String),
    Class(String),
    /// A bare `#` or `.`, or a segment that cannot be a tag name.
    /// Matches nothing.
    Unsupported(String),
}

impl SimpleSelector {
    pub fn parse(segment: &str) -> Self {
        let unsupported = || SimpleSelector::Unsupported(segment.to_string());

        // `#` and `.` remainders are compared literally, so ids like `a.b`
        // and utility classes like `md:flex` still match.
        if let Some(id) = segment.strip_prefix('#') {
            if id.is_empty() {
                unsupported()
            } else {
                SimpleSelector::Id(id.to_string())
            }
        } else if let Some(class) = segment.strip_prefix('.') {
            if class.is_empty() {
                unsupported()
            } else {
                SimpleSelector::Class(class.to_string())
            }
        } else if is_tag_name(segment) {
            SimpleSelector::Tag(segment.to_string())
        } else {
            unsupported()
        }
    }

    pub fn matches(&self, node: &CanonicalNode) -> bool {
        if !node.is_element() {
            return false;
        }
        match self {
            SimpleSelector::Tag(tag) => node.tag_name() == Some(tag.as_str()),
            SimpleSelector::Id(id) => node.id() == id,
            SimpleSelector::Class(class) => node.has_class(class),
            SimpleSelector::Unsupported(_) => false,
        }
    }
}

/// A tag name without any discriminator or combinator characters in it
fn is_tag_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(|c: char| {
            matches!(
                c,
                '#' | '.' | '[' | ']' | ':' | '>' | '+' | '~' | '*' | ',' | '(' | ')'
            )
        })
}

/// A parsed descendant-combinator selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    parts: Vec<SimpleSelector>,
}

impl Selector {
    pub fn parse(selector: &str) -> Self {
        Self {
            parts: selector
                .split_whitespace()
                .map(SimpleSelector::parse)
                .collect(),
        }
    }

    pub fn parts(&self) -> &[SimpleSelector] {
        &self.parts
    }

    /// Every node that ends a matching chain, in traversal order.
    ///
    /// A chain may start at any depth, so nested or overlapping chains can
    /// report the same node more than once. Results are not deduplicated.
    pub fn select<'a>(&self, root: &'a CanonicalNode) -> Vec<&'a CanonicalNode> {
        let mut results = Vec::new();
        self.collect(root, 0, &mut results);
        results
    }

    fn collect<'a>(
        &self,
        node: &'a CanonicalNode,
        depth: usize,
        results: &mut Vec<&'a CanonicalNode>,
    ) {
        let Some(part) = self.parts.get(depth) else {
            return;
        };

        if part.matches(node) {
            if depth == self.parts.len() - 1 {
                results.push(node);
            } else {
                for child in node.children() {
                    self.collect(child, depth + 1, results);
                }
            }
        }

        for child in node.children() {
            self.collect(child, depth, results);
        }
    }
}

/// Find every node in `root` matching `selector`.
pub fn select<'a>(root: &'a CanonicalNode, selector: &str) -> Vec<&'a CanonicalNode> {
    let results = Selector::parse(selector).select(root);
    log::debug!("selector '{}' matched {} node(s)", selector, results.len());
    results
}
