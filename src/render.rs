//! Renderings of a canonical tree: pretty JSON and an indented tree view.

use crate::error::Result;
use crate::node::{CanonicalNode, NodeKind};
use std::fmt::{self, Write};

impl CanonicalNode {
    /// Pretty JSON with two-space indentation. Absent fields are omitted.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a tree previously produced by [`CanonicalNode::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The indented tree rendering.
    pub fn to_tree_string(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = render_tree(&mut out, self, 0);
        out
    }
}

/// Render `node` as an indented tree, two spaces per level.
///
/// The document node contributes no level of its own.
pub fn render_tree<W: Write>(out: &mut W, node: &CanonicalNode, level: usize) -> fmt::Result {
    let indent = "  ".repeat(level);

    match node.kind() {
        NodeKind::Element => {
            let tag = node.tag_name().unwrap_or_default();
            write!(out, "{}<{}", indent, tag)?;

            if !node.id().is_empty() {
                write!(out, " id=\"{}\"", node.id())?;
            }
            if !node.class_list().is_empty() {
                write!(out, " class=\"{}\"", node.class_list().join(" "))?;
            }
            for (name, value) in node.attributes() {
                if name.eq_ignore_ascii_case("id") || name.eq_ignore_ascii_case("class") {
                    continue;
                }
                write!(out, " {}=\"{}\"", name, value)?;
            }

            if node.children().is_empty() {
                writeln!(out, "/>")?;
            } else {
                writeln!(out, ">")?;
                for child in node.children() {
                    render_tree(out, child, level + 1)?;
                }
                writeln!(out, "{}</{}>", indent, tag)?;
            }
        }
        NodeKind::Text => {
            writeln!(out, "{}\"{}\"", indent, node.text_content().unwrap_or_default())?;
        }
        NodeKind::Document => {
            for child in node.children() {
                render_tree(out, child, level)?;
            }
        }
    }

    Ok(())
}
