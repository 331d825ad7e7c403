//! Conversion of a parsed document into the canonical node model.

use crate::config::NormalizeConfig;
use crate::node::CanonicalNode;
use ego_tree::NodeRef;
use indexmap::IndexMap;
use scraper::{Html, Node};

/// Parse an HTML string and normalize the resulting document.
pub fn normalize_html(html: &str, config: &NormalizeConfig) -> CanonicalNode {
    normalize_document(&Html::parse_document(html), config)
}

/// Normalize a whole parsed document. The result is always a document node.
pub fn normalize_document(document: &Html, config: &NormalizeConfig) -> CanonicalNode {
    match normalize_node(document.tree.root(), config, "", "") {
        Some(root) if root.is_document() => root,
        Some(other) => CanonicalNode::document(vec![other]),
        None => CanonicalNode::document(Vec::new()),
    }
}

/// Normalize a single raw node and its subtree.
///
/// Returns `None` when the node is dropped: script and style subtrees (or
/// whatever `config.drop_tags` lists), comments, doctypes, processing
/// instructions, and text that is empty after whitespace handling.
pub fn normalize_node(
    node: NodeRef<Node>,
    config: &NormalizeConfig,
    parent_path: &str,
    parent_selector_path: &str,
) -> Option<CanonicalNode> {
    let mut result = match node.value() {
        Node::Document | Node::Fragment => CanonicalNode::document(Vec::new()),
        Node::Element(element) => {
            let tag_name = element.name().to_ascii_lowercase();
            if config.drops_tag(&tag_name) {
                log::trace!("dropping <{}> subtree under '{}'", tag_name, parent_path);
                return None;
            }

            let mut attributes = IndexMap::new();
            for (name, value) in element.attrs() {
                if config.drops_attribute(name) {
                    continue;
                }
                attributes.insert(name.to_string(), value.to_string());
            }

            CanonicalNode::element(tag_name, attributes, parent_path, parent_selector_path)
        }
        Node::Text(text) => return normalize_text(text, config).map(CanonicalNode::text),
        Node::Comment(_) | Node::Doctype(_) | Node::ProcessingInstruction(_) => return None,
    };

    let (path, selector_path) = (
        result.computed_path().to_string(),
        result.selector_path().to_string(),
    );
    for child in node.children() {
        if let Some(child) = normalize_node(child, config, &path, &selector_path) {
            result.push_child(child);
        }
    }

    Some(result)
}

/// Apply the whitespace rule to raw text, `None` if nothing is left.
pub fn normalize_text(text: &str, config: &NormalizeConfig) -> Option<String> {
    let text = if config.normalize_whitespace {
        collapse_whitespace(text)
    } else {
        text.to_string()
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Collapse every whitespace run to a single space and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
