//! Parsed HTML document and the tree queries the checks rely on

use scraper::{ElementRef, Html, Selector};

/// Script `type` that marks a JSON-LD block; matched exactly
pub const JSON_LD_TYPE: &str = "application/ld+json";

/// Elements whose text is never rendered
const HIDDEN_TEXT_TAGS: &[&str] = &["script", "style", "template"];

/// A parsed page
///
/// Wraps a `scraper` document and exposes only the lookups the check battery
/// needs: elements by CSS selector, attribute access, and rendered text.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document. Parsing never fails; malformed markup is
    /// recovered the way browsers do.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// All elements matching `selector` in document order.
    ///
    /// An unparseable selector matches nothing.
    pub fn find_all(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(selector) {
            Ok(selector) => self.html.select(&selector).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// First element matching `selector`
    pub fn find_first(&self, selector: &str) -> Option<ElementRef<'_>> {
        let selector = Selector::parse(selector).ok()?;
        self.html.select(&selector).next()
    }

    /// First `tag` element whose attribute `name` equals `value` exactly
    pub fn find_first_with_attr(&self, tag: &str, name: &str, value: &str) -> Option<ElementRef<'_>> {
        self.find_all(tag)
            .into_iter()
            .find(|element| attr(element, name) == Some(value))
    }

    pub fn exists(&self, selector: &str) -> bool {
        self.find_first(selector).is_some()
    }

    /// Rendered text: every text node concatenated, except those inside
    /// `script`, `style` or `template` elements
    pub fn text(&self) -> String {
        self.html
            .root_element()
            .descendants()
            .filter(|node| {
                !node.ancestors().any(|ancestor| {
                    ancestor
                        .value()
                        .as_element()
                        .is_some_and(|element| HIDDEN_TEXT_TAGS.contains(&element.name()))
                })
            })
            .filter_map(|node| node.value().as_text().map(|text| &**text))
            .collect()
    }

    /// Bodies of all JSON-LD script blocks, in document order.
    ///
    /// Empty blocks are kept so callers can tell "no block" from "unusable block".
    pub fn json_ld_blocks(&self) -> Vec<String> {
        self.find_all("script")
            .into_iter()
            .filter(|element| attr(element, "type") == Some(JSON_LD_TYPE))
            .map(|element| element_text(&element).trim().to_string())
            .collect()
    }
}

/// Attribute value of an element
pub fn attr<'a>(element: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

/// Concatenated text of an element and its descendants
pub fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_ld_blocks_empty_html() {
        let doc = HtmlDocument::parse("<html><body>No JSON-LD here</body></html>");
        assert!(doc.json_ld_blocks().is_empty());
    }

    #[test]
    fn test_json_ld_blocks_require_exact_type() {
        let html = r#"
            <script type="application/ld+json">
            {"@type": "Hotel", "name": "Test"}
            </script>
            <script type="text/x-ld+json-template">{"@type": "Hotel"}</script>
            <script type="APPLICATION/LD+JSON">{"@type": "Hotel"}</script>
            <script type="application/ld+json; charset=utf-8">{"@type": "Hotel"}</script>
            <script>var x = 1;</script>
        "#;

        let blocks = HtmlDocument::parse(html).json_ld_blocks();
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].starts_with('{'));
        assert!(blocks[0].contains("Test"));
    }

    #[test]
    fn test_json_ld_blocks_keeps_empty_scripts() {
        let html = r#"<script type="application/ld+json">   </script>"#;

        let blocks = HtmlDocument::parse(html).json_ld_blocks();
        assert_eq!(blocks, vec![String::new()]);
    }

    #[test]
    fn test_find_first_with_attr_is_exact() {
        let html = r#"
            <head>
                <meta name="Description" content="wrong case">
                <meta name="description" content="right one">
                <meta name="description" content="second">
            </head>
        "#;

        let doc = HtmlDocument::parse(html);
        let meta = doc.find_first_with_attr("meta", "name", "description").unwrap();
        assert_eq!(attr(&meta, "content"), Some("right one"));
        assert!(doc.find_first_with_attr("meta", "name", "keywords").is_none());
    }

    #[test]
    fn test_text_includes_visible_nodes() {
        let html = "<html><head><title>Grand</title></head><body><p>Pool</p><p>Spa</p></body></html>";

        let text = HtmlDocument::parse(html).text();
        assert!(text.contains("Grand"));
        assert!(text.contains("PoolSpa"));
    }

    #[test]
    fn test_text_skips_script_style_and_template() {
        let html = r#"
            <html>
            <head>
                <style>.room-card { color: red; } .contact { margin: 0; }</style>
                <script type="application/ld+json">{"address": "1 Beach Rd", "telephone": "555"}</script>
            </head>
            <body>
                <p>Welcome.</p>
                <script>if (window.location.hash) { scroll(); }</script>
                <template><p>Pool and gym</p></template>
            </body>
            </html>
        "#;

        let text = HtmlDocument::parse(html).text();
        assert!(text.contains("Welcome."));
        assert!(!text.contains("room-card"));
        assert!(!text.contains("address"));
        assert!(!text.contains("window.location"));
        assert!(!text.contains("Pool and gym"));
    }

    #[test]
    fn test_find_all_and_exists() {
        let html = "<body><header></header><section></section><section></section></body>";

        let doc = HtmlDocument::parse(html);
        assert_eq!(doc.find_all("section").len(), 2);
        assert!(doc.exists("header"));
        assert!(!doc.exists("footer"));
        assert!(doc.find_all("[[invalid").is_empty());
    }
}
