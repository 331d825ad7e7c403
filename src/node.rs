//! The canonical node model produced by normalization.
//!
//! A [`CanonicalNode`] tree is built once from a parsed document and never
//! mutated afterwards, so it can be shared freely between readers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a canonical node. Comments, doctypes and other raw node
/// kinds never survive normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Element,
    Text,
    Document,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Element => "element",
            NodeKind::Text => "text",
            NodeKind::Document => "document",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the canonical tree.
///
/// Empty collections and strings stand in for absent fields: a childless
/// element has an empty `children` vector, an element without an `id`
/// attribute has an empty `id`. Both are omitted from the JSON encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalNode {
    kind: NodeKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    tag_name: Option<String>,

    /// Every kept attribute in source order, `id` and `class` included.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    attributes: IndexMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    text_content: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<CanonicalNode>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    class_list: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    computed_path: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    selector_path: String,
}

impl CanonicalNode {
    /// Create the document root.
    pub fn document(children: Vec<CanonicalNode>) -> Self {
        Self {
            kind: NodeKind::Document,
            tag_name: None,
            attributes: IndexMap::new(),
            text_content: None,
            children,
            class_list: Vec::new(),
            id: String::new(),
            computed_path: String::new(),
            selector_path: String::new(),
        }
    }

    /// Create a text leaf. The content is stored as given.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            tag_name: None,
            attributes: IndexMap::new(),
            text_content: Some(content.into()),
            children: Vec::new(),
            class_list: Vec::new(),
            id: String::new(),
            computed_path: String::new(),
            selector_path: String::new(),
        }
    }

    /// Create a childless element whose paths are resolved against its parent.
    ///
    /// `id` and `class_list` are derived from `attributes` so they can never
    /// disagree with the mapping.
    pub fn element(
        tag_name: impl Into<String>,
        attributes: IndexMap<String, String>,
        parent_path: &str,
        parent_selector_path: &str,
    ) -> Self {
        let tag_name = tag_name.into().to_ascii_lowercase();

        let mut id = String::new();
        let mut class_list = Vec::new();
        for (name, value) in &attributes {
            if name.eq_ignore_ascii_case("id") {
                id = value.clone();
            } else if name.eq_ignore_ascii_case("class") {
                class_list = value.split_whitespace().map(str::to_string).collect();
            }
        }

        let segment = if !id.is_empty() {
            format!("{}#{}", tag_name, id)
        } else if !class_list.is_empty() {
            format!("{}.{}", tag_name, class_list.join("."))
        } else {
            tag_name.clone()
        };

        Self {
            kind: NodeKind::Element,
            computed_path: join_path(parent_path, &tag_name),
            selector_path: join_path(parent_selector_path, &segment),
            tag_name: Some(tag_name),
            attributes,
            text_content: None,
            children: Vec::new(),
            class_list,
            id,
        }
    }

    /// Children are attached while the tree is being built, after the
    /// parent's own paths are known.
    pub(crate) fn push_child(&mut self, child: CanonicalNode) {
        self.children.push(child);
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    pub fn is_document(&self) -> bool {
        self.kind == NodeKind::Document
    }

    /// Lowercase tag name; `None` unless this is an element.
    pub fn tag_name(&self) -> Option<&str> {
        self.tag_name.as_deref()
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Normalized text; `None` unless this is a text node.
    pub fn text_content(&self) -> Option<&str> {
        self.text_content.as_deref()
    }

    pub fn children(&self) -> &[CanonicalNode] {
        &self.children
    }

    /// Class tokens in source order.
    pub fn class_list(&self) -> &[String] {
        &self.class_list
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_list.iter().any(|c| c == class)
    }

    /// The `id` attribute value, or an empty string.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Tag-only ancestor chain such as `html > body > div`.
    pub fn computed_path(&self) -> &str {
        &self.computed_path
    }

    /// Diagnostic ancestor chain such as `body > div#main > p.note`: each
    /// segment is the tag plus its id, else its classes. Siblings may share the same string.
    pub fn selector_path(&self) -> &str {
        &self.selector_path
    }

    /// Number of nodes in this subtree, this node included.
    pub fn count_nodes(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(CanonicalNode::count_nodes)
            .sum::<usize>()
    }
}

fn join_path(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{} > {}", parent, segment)
    }
}
