//! Structural comparison of two canonical trees.

use crate::node::{CanonicalNode, NodeKind};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// A single semantic difference between an expected and an actual tree.
///
/// The `Display` form is self-contained: it names the location and both
/// observed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Difference {
    #[error("Node type mismatch: {expected} vs {actual} at {path}")]
    KindMismatch {
        path: String,
        expected: NodeKind,
        actual: NodeKind,
    },
    #[error("Text content mismatch at {path}: \"{expected}\" vs \"{actual}\"")]
    TextMismatch {
        path: String,
        expected: String,
        actual: String,
    },
    #[error("Tag name mismatch at {path}: {expected} vs {actual}")]
    TagMismatch {
        path: String,
        expected: String,
        actual: String,
    },
    #[error("ID mismatch at {path}: \"{expected}\" vs \"{actual}\"")]
    IdMismatch {
        path: String,
        expected: String,
        actual: String,
    },
    #[error("Class list mismatch at {path}: [{}] vs [{}]", .expected.join(" "), .actual.join(" "))]
    ClassListMismatch {
        path: String,
        expected: Vec<String>,
        actual: Vec<String>,
    },
    #[error("Missing attribute {name}=\"{expected}\" at {path}")]
    MissingAttribute {
        path: String,
        name: String,
        expected: String,
    },
    #[error("Attribute {name} mismatch at {path}: \"{expected}\" vs \"{actual}\"")]
    AttributeMismatch {
        path: String,
        name: String,
        expected: String,
        actual: String,
    },
    #[error("Extra attribute {name}=\"{actual}\" at {path}")]
    ExtraAttribute {
        path: String,
        name: String,
        actual: String,
    },
    #[error("Children count mismatch at {path}: {expected} vs {actual}")]
    ChildCountMismatch {
        path: String,
        expected: usize,
        actual: usize,
    },
}

impl Difference {
    /// The location the difference was reported at
    pub fn path(&self) -> &str {
        match self {
            Difference::KindMismatch { path, .. }
            | Difference::TextMismatch { path, .. }
            | Difference::TagMismatch { path, .. }
            | Difference::IdMismatch { path, .. }
            | Difference::ClassListMismatch { path, .. }
            | Difference::MissingAttribute { path, .. }
            | Difference::AttributeMismatch { path, .. }
            | Difference::ExtraAttribute { path, .. }
            | Difference::ChildCountMismatch { path, .. } => path,
        }
    }
}

/// Outcome of comparing two trees: every difference, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    differences: Vec<Difference>,
}

impl Comparison {
    /// True iff no difference was found
    pub fn is_equal(&self) -> bool {
        self.differences.is_empty()
    }

    pub fn differences(&self) -> &[Difference] {
        &self.differences
    }

    /// Human-readable messages, one per difference
    pub fn messages(&self) -> Vec<String> {
        self.differences.iter().map(ToString::to_string).collect()
    }

    pub fn into_differences(self) -> Vec<Difference> {
        self.differences
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_equal() {
            return f.write_str("no differences");
        }
        for (i, difference) in self.differences.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "- {}", difference)?;
        }
        Ok(())
    }
}

/// Compare an expected tree against an actual one.
///
/// Comparison only stops descending on a kind mismatch; everything else is
/// accumulated across the whole tree.
pub fn compare(expected: &CanonicalNode, actual: &CanonicalNode) -> Comparison {
    let mut differences = Vec::new();
    compare_nodes(expected, actual, "", &mut differences);
    log::debug!(
        "comparison finished with {} difference(s)",
        differences.len()
    );
    Comparison { differences }
}

/// Text nodes carry no path of their own, so they are reported at the
/// nearest enclosing element's path.
fn location(node: &CanonicalNode, parent_path: &str) -> String {
    let path = if node.computed_path().is_empty() {
        parent_path
    } else {
        node.computed_path()
    };
    if path.is_empty() {
        "(document)".to_string()
    } else {
        path.to_string()
    }
}

fn compare_nodes(
    expected: &CanonicalNode,
    actual: &CanonicalNode,
    parent_path: &str,
    differences: &mut Vec<Difference>,
) {
    let path = location(expected, parent_path);

    if expected.kind() != actual.kind() {
        differences.push(Difference::KindMismatch {
            path,
            expected: expected.kind(),
            actual: actual.kind(),
        });
        return;
    }

    if expected.is_text() {
        let (expected_text, actual_text) = (
            expected.text_content().unwrap_or_default(),
            actual.text_content().unwrap_or_default(),
        );
        if expected_text != actual_text {
            differences.push(Difference::TextMismatch {
                path,
                expected: expected_text.to_string(),
                actual: actual_text.to_string(),
            });
        }
        return;
    }

    let (expected_tag, actual_tag) = (
        expected.tag_name().unwrap_or_default(),
        actual.tag_name().unwrap_or_default(),
    );
    if expected_tag != actual_tag {
        differences.push(Difference::TagMismatch {
            path: path.clone(),
            expected: expected_tag.to_string(),
            actual: actual_tag.to_string(),
        });
    }

    if expected.id() != actual.id() {
        differences.push(Difference::IdMismatch {
            path: path.clone(),
            expected: expected.id().to_string(),
            actual: actual.id().to_string(),
        });
    }

    if !same_class_multiset(expected.class_list(), actual.class_list()) {
        differences.push(Difference::ClassListMismatch {
            path: path.clone(),
            expected: expected.class_list().to_vec(),
            actual: actual.class_list().to_vec(),
        });
    }

    compare_attributes(expected, actual, &path, differences);

    let (expected_children, actual_children) = (expected.children(), actual.children());
    if expected_children.len() != actual_children.len() {
        differences.push(Difference::ChildCountMismatch {
            path: path.clone(),
            expected: expected_children.len(),
            actual: actual_children.len(),
        });
    }

    let child_parent_path = expected.computed_path();
    for (expected_child, actual_child) in expected_children.iter().zip(actual_children) {
        compare_nodes(expected_child, actual_child, child_parent_path, differences);
    }
}

fn is_promoted(name: &str) -> bool {
    name.eq_ignore_ascii_case("id") || name.eq_ignore_ascii_case("class")
}

fn compare_attributes(
    expected: &CanonicalNode,
    actual: &CanonicalNode,
    path: &str,
    differences: &mut Vec<Difference>,
) {
    for (name, expected_value) in expected.attributes() {
        if is_promoted(name) {
            continue;
        }
        match actual.attributes().get(name) {
            None => differences.push(Difference::MissingAttribute {
                path: path.to_string(),
                name: name.clone(),
                expected: expected_value.clone(),
            }),
            Some(actual_value) if actual_value != expected_value => {
                differences.push(Difference::AttributeMismatch {
                    path: path.to_string(),
                    name: name.clone(),
                    expected: expected_value.clone(),
                    actual: actual_value.clone(),
                })
            }
            Some(_) => {}
        }
    }

    for (name, actual_value) in actual.attributes() {
        if is_promoted(name) || expected.attributes().contains_key(name) {
            continue;
        }
        differences.push(Difference::ExtraAttribute {
            path: path.to_string(),
            name: name.clone(),
            actual: actual_value.clone(),
        });
    }
}

/// Multiset equality: every token occurs equally often on both sides
fn same_class_multiset(expected: &[String], actual: &[String]) -> bool {
    if expected.len() != actual.len() {
        return false;
    }

    let mut counts: HashMap<&str, isize> = HashMap::new();
    for class in expected {
        *counts.entry(class.as_str()).or_default() += 1;
    }
    for class in actual {
        *counts.entry(class.as_str()).or_default() -= 1;
    }
    counts.values().all(|count| *count == 0)
}
