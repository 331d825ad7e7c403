use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Configuration for normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Collapse whitespace runs in text nodes to a single space and trim them
    pub normalize_whitespace: bool,
    /// Elements dropped together with their whole subtree
    pub drop_tags: BTreeSet<String>,
    /// Attribute name prefixes that are never kept
    pub drop_attribute_prefixes: Vec<String>,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            normalize_whitespace: true,
            drop_tags: ["script", "style"].iter().map(|t| t.to_string()).collect(),
            drop_attribute_prefixes: vec!["data-".to_string(), "aria-".to_string()],
        }
    }
}

impl NormalizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: toggle whitespace normalization
    pub fn with_normalize_whitespace(mut self, enabled: bool) -> Self {
        self.normalize_whitespace = enabled;
        self
    }

    /// Builder method: drop another tag
    pub fn with_drop_tag(mut self, tag: impl Into<String>) -> Self {
        self.drop_tags.insert(tag.into().to_ascii_lowercase());
        self
    }

    /// Builder method: drop attributes starting with another prefix
    pub fn with_drop_attribute_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.drop_attribute_prefixes
            .push(prefix.into().to_ascii_lowercase());
        self
    }

    /// Whether an element with this tag is dropped, subtree included
    pub fn drops_tag(&self, tag: &str) -> bool {
        self.drop_tags
            .iter()
            .any(|dropped| dropped.eq_ignore_ascii_case(tag))
    }

    /// Whether an attribute with this name is dropped
    pub fn drops_attribute(&self, name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        self.drop_attribute_prefixes
            .iter()
            .any(|prefix| name.starts_with(&prefix.to_ascii_lowercase()))
    }
}

/// Convenience functions for creating common normalization configurations
pub mod presets {
    use super::*;

    /// Drop scripts, styles, `data-*` and `aria-*`, collapse whitespace
    pub fn standard() -> NormalizeConfig {
        NormalizeConfig::default()
    }

    /// Same noise filtering as [`standard`], but text is kept verbatim
    pub fn preserve_whitespace() -> NormalizeConfig {
        NormalizeConfig {
            normalize_whitespace: false,
            ..NormalizeConfig::default()
        }
    }
}
