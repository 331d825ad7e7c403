//! Normalize HTML into a canonical tree for semantic comparison.
//!
//! This crate turns an HTML document into a [`CanonicalNode`] tree that drops
//! noise such as scripts, styles, comments, `data-*`/`aria-*` attributes and
//! incidental whitespace. Two such trees can be compared structurally, and a
//! tree can be queried with simple descendant selectors.
//!
//! # Example
//! ```ignore
//! use html_canon::HtmlComparer;
//!
//! let html1 = "<div><p>Hello</p></div>";
//! let html2 = "<div data-x=\"1\">\n  <p>Hello</p>\n</div>";
//!
//! let comparer = HtmlComparer::new();
//! assert!(comparer.compare(html1, html2).is_equal());
//! ```
//!
//! Querying a normalized tree:
//! ```ignore
//! use html_canon::{normalize_html, select, NormalizeConfig};
//!
//! let root = normalize_html(
//!     r#"<div id="main"><p class="x">Hi</p><p>Bye</p></div>"#,
//!     &NormalizeConfig::default(),
//! );
//! assert_eq!(select(&root, "#main p").len(), 2);
//! ```
//!
//! For testing, you can use the provided assertion macros:
//! ```ignore
//! # use html_canon::assert_html_eq;
//! assert_html_eq!(
//!     "<div><p>Hello</p></div>",
//!     "<div>\n  <p>Hello</p>\n</div>"
//! );
//! ```

/// Asserts that two HTML strings normalize to equal canonical trees.
///
/// # Examples
/// ```ignore
/// use html_canon::assert_html_eq;
///
/// assert_html_eq!(
///     "<div><p>Hello</p></div>",
///     "<div>\n  <p>Hello</p>\n</div>"
/// );
///
/// // With a custom configuration
/// use html_canon::presets;
/// assert_html_eq!(
///     "<pre>a  b</pre>",
///     "<pre>a  b</pre>",
///     presets::preserve_whitespace()
/// );
/// ```
#[macro_export]
macro_rules! assert_html_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_html_eq!($left, $right, $crate::NormalizeConfig::default())
    };
    ($left:expr, $right:expr, $config:expr $(,)?) => {{
        match (&$left, &$right, &$config) {
            (left_val, right_val, config) => {
                let comparer = $crate::HtmlComparer::with_config(config.clone());
                let comparison = comparer.compare(left_val, right_val);
                if !comparison.is_equal() {
                    panic!(
                        "\n\
                        HTML comparison failed:\n\
                        {}\n\n\
                        left HTML:\n\
                        {}\n\n\
                        right HTML:\n\
                        {}\n\n\
                        config: {:#?}\
                    ",
                        comparison, left_val, right_val, config
                    );
                }
            }
        }
    }};
}

/// Asserts that two HTML strings do not normalize to equal canonical trees.
///
/// # Examples
/// ```ignore
/// use html_canon::assert_html_ne;
///
/// assert_html_ne!(
///     "<div><p>Hello</p></div>",
///     "<div><p>Different</p></div>"
/// );
/// ```
#[macro_export]
macro_rules! assert_html_ne {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_html_ne!($left, $right, $crate::NormalizeConfig::default())
    };
    ($left:expr, $right:expr, $config:expr $(,)?) => {{
        match (&$left, &$right, &$config) {
            (left_val, right_val, config) => {
                let comparer = $crate::HtmlComparer::with_config(config.clone());
                if comparer.compare(left_val, right_val).is_equal() {
                    panic!(
                        "\n\
                        HTML strings were equal but expected to be different:\n\n\
                        HTML:\n\
                        {}\n\n\
                        config: {:#?}\
                    ",
                        left_val, config
                    );
                }
            }
        }
    }};
}

pub mod compare;
pub mod config;
pub mod error;
pub mod input;
pub mod node;
pub mod normalize;
pub mod render;
pub mod select;

pub use compare::{compare, Comparison, Difference};
pub use config::{presets, NormalizeConfig};
pub use error::{HtmlCanonError, Result};
pub use input::{InputSource, OutputFormat};
pub use node::{CanonicalNode, NodeKind};
pub use normalize::{normalize_document, normalize_html, normalize_node};
pub use render::render_tree;
pub use select::{select, Selector, SimpleSelector};

/// Normalizes and compares HTML strings with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct HtmlComparer {
    config: NormalizeConfig,
}

impl HtmlComparer {
    /// Create a comparer with the default configuration.
    ///
    /// Note about whitespace handling:
    /// - Whitespace runs inside text collapse to a single space and text is trimmed
    /// - Whitespace-only text between elements disappears entirely
    /// - Elements like <pre> get no special treatment
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a comparer with a custom configuration
    pub fn with_config(config: NormalizeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    /// Parse and normalize one HTML string
    pub fn normalize(&self, html: &str) -> CanonicalNode {
        normalize_html(html, &self.config)
    }

    /// Compare two HTML strings
    pub fn compare(&self, expected: &str, actual: &str) -> Comparison {
        compare(&self.normalize(expected), &self.normalize(actual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_comparison() {
        assert_html_eq!("<div><p>Hello</p></div>", "<div><p>Hello</p></div>");
    }

    #[test]
    fn test_empty_elements() {
        assert_html_eq!("<div></div>", "<div></div>");
        assert_html_eq!("<div></div>", "<div/>");
        assert_html_eq!("<br>", "<br/>");
        assert_html_eq!("<img src='test.jpg'>", "<img src='test.jpg'/>");

        // Empty elements with whitespace
        assert_html_eq!("<div></div>", "<div>   </div>");
        assert_html_eq!("<p></p>", "<p>\n</p>");
    }

    #[test]
    fn test_whitespace_handling() {
        // Runs inside text collapse by default
        assert_html_eq!("<p>Hello   World</p>", "<p>Hello World</p>");
        assert_html_eq!("<p>Hello \t World</p>", "<p>Hello World</p>");
        assert_html_eq!("<p>Hello\nWorld</p>", "<p>Hello World</p>");
        assert_html_eq!("<p>   Hello   </p>", "<p>Hello</p>");

        // Whitespace between elements is ignored by default
        assert_html_eq!(
            "<div><p>Hello</p></div>",
            "<div>\n  <p>\n    Hello\n  </p>\n</div>"
        );

        // Verbatim text makes every space count
        assert_html_ne!(
            "<p>Hello   World</p>",
            "<p>Hello World</p>",
            presets::preserve_whitespace()
        );
        assert_html_ne!(
            "<div><p>Hello</p></div>",
            "<div>\n  <p>Hello</p>\n</div>",
            presets::preserve_whitespace()
        );
        assert_html_eq!(
            "<p>Hello   World</p>",
            "<p>Hello   World</p>",
            presets::preserve_whitespace()
        );
    }

    #[test]
    fn test_whitespace_with_multiple_text_nodes() {
        assert_html_eq!(
            "<p>Hello <strong>beautiful</strong> World</p>",
            "<p>Hello <strong>beautiful</strong> World</p>"
        );

        // Trimming makes whitespace around inline elements irrelevant
        assert_html_eq!(
            "<p>Hello<strong>beautiful</strong>World</p>",
            "<p>Hello <strong>beautiful</strong> World</p>"
        );
    }

    #[test]
    fn test_attribute_handling() {
        // Different attribute order
        assert_html_eq!(
            "<div class='test' id='1'>Test</div>",
            "<div id='1' class='test'>Test</div>"
        );

        // Different attribute values
        assert_html_ne!(
            "<div class='test'>Test</div>",
            "<div class='different'>Test</div>"
        );
        assert_html_ne!("<a href='/a'>x</a>", "<a href='/b'>x</a>");

        // Noise attributes never matter
        assert_html_eq!(
            "<div class='a b' id='1' data-test='value'>Content</div>",
            "<div class='b a' id='1' data-test='other' aria-hidden='true'>Content</div>"
        );

        // Boolean attributes
        assert_html_eq!(
            "<input type='checkbox' checked>",
            "<input checked type='checkbox'>"
        );
        assert_html_ne!("<input type='checkbox' checked>", "<input type='checkbox'>");

        // Extra noise prefixes can be configured
        assert_html_eq!(
            "<div x-track='1'>Test</div>",
            "<div x-track='2'>Test</div>",
            NormalizeConfig::default().with_drop_attribute_prefix("x-")
        );
    }

    #[test]
    fn test_text_handling() {
        assert_html_eq!("<p>Hello World</p>", "<p>Hello World</p>");
        assert_html_ne!("<p>Hello World</p>", "<p>Goodbye World</p>");
        assert_html_eq!("<p>Hello &amp; World</p>", "<p>Hello &amp; World</p>");
        assert_html_eq!(
            "<div>Hello <strong>World</strong>!</div>",
            "<div>Hello <strong>World</strong>!</div>"
        );
    }

    #[test]
    fn test_nested_structure() {
        assert_html_eq!(
            "<div><section><h1>Title</h1><p>Text</p></section></div>",
            "<div><section><h1>Title</h1><p>Text</p></section></div>"
        );

        assert_html_ne!(
            "<div><section><h1>Title</h1><p>Text</p></section></div>",
            "<div><h1>Title</h1><section><p>Text</p></section></div>"
        );

        assert_html_eq!(
            "<div><article><section><header><h1>Title</h1></header><p>Text</p></section></article></div>",
            "<div><article><section><header><h1>Title</h1></header><p>Text</p></section></article></div>"
        );
    }

    #[test]
    fn test_noise_nodes() {
        assert_html_eq!(
            "<div><!-- Comment --><p>Test</p></div>",
            "<div><p>Test</p></div>"
        );
        assert_html_eq!(
            "<div><!-- Multiple --><!-- Comments --><p>Test</p></div>",
            "<div><p>Test</p></div>"
        );
        assert_html_eq!(
            "<div><script>alert(1)</script><p>Test</p><style>p { color: red }</style></div>",
            "<div><p>Test</p></div>"
        );
        assert_html_eq!(
            "<html><head><script src='a.js'></script></head><body><p>x</p></body></html>",
            "<p>x</p>"
        );
    }

    #[test]
    fn test_sibling_order() {
        assert_html_ne!(
            "<div><p>First</p><p>Second</p></div>",
            "<div><p>Second</p><p>First</p></div>"
        );
    }

    #[test]
    fn test_special_characters() {
        assert_html_eq!(
            "<p>&lt;div&gt; &amp; &quot;quotes&quot;</p>",
            "<p>&lt;div&gt; &amp; &quot;quotes&quot;</p>"
        );
        assert_html_eq!("<p>Hello 世界 🌍</p>", "<p>Hello 世界 🌍</p>");
        assert_html_eq!("<p>&quot;quoted&quot;</p>", "<p>&#34;quoted&#34;</p>");
    }

    #[test]
    fn test_comparer_reports_differences() {
        let comparison = HtmlComparer::new().compare("<div>Test</div>", "<span>Test</span>");
        assert!(!comparison.is_equal());
        assert_eq!(
            comparison.messages(),
            vec!["Tag name mismatch at html > body > div: div vs span"]
        );

        let comparison = HtmlComparer::new().compare(
            "<div class='test'>Content</div>",
            "<div class='different'>Content</div>",
        );
        assert_eq!(
            comparison.messages(),
            vec!["Class list mismatch at html > body > div: [test] vs [different]"]
        );
    }

    #[test]
    fn test_edge_cases() {
        assert_html_eq!("", "");
        assert_html_eq!("   ", "");
        assert_html_eq!("\n\t  \n", "");
        assert_html_eq!("Hello", "Hello");

        assert_html_eq!(
            "<div><div><div><div><div>Text</div></div></div></div></div>",
            "<div><div><div><div><div>Text</div></div></div></div></div>"
        );

        let many_siblings: String = (0..100).map(|i| format!("<p>{}</p>", i)).collect();
        assert_html_eq!(
            &format!("<div>{}</div>", many_siblings),
            &format!("<div>{}</div>", many_siblings)
        );

        assert_html_eq!(
            r#"<div class="wrapper" id="main">
                <!-- Header section -->
                <header class="header">
                    <h1>Title &amp; Subtitle</h1>
                </header>
                <main>
                    <p>Hello 世界!</p>
                    <ul>
                        <li>Item 1</li>
                        <li>Item 2</li>
                    </ul>
                    <img src="test.jpg" alt="Test Image"/>
                </main>
                <script>init();</script>
                <footer data-build="1234">
                    <p>&copy; 2024</p>
                </footer>
            </div>"#,
            r#"<div class="wrapper" id="main"><header class="header"><h1>Title &amp; Subtitle</h1></header><main><p>Hello 世界!</p><ul><li>Item 1</li><li>Item 2</li></ul><img src="test.jpg" alt="Test Image"/></main><footer><p>&copy; 2024</p></footer></div>"#
        );
    }

    #[test]
    fn test_malformed_html() {
        // Unclosed tags are closed by the parser
        assert_html_eq!("<p>Text", "<p>Text</p>");

        // A stray closing tag becomes an extra empty element
        let comparison = HtmlComparer::new().compare("<p>Text</p></p>", "<p>Text</p>");
        assert_eq!(
            comparison.messages(),
            vec!["Children count mismatch at html > body: 2 vs 1"]
        );
    }

    #[test]
    #[should_panic(expected = "HTML comparison failed")]
    fn test_assert_html_eq_panics_with_differences() {
        assert_html_eq!("<p>a</p>", "<p>b</p>");
    }
}
