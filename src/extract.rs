//! Article body extraction from parsed article pages.
//!
//! NYTimes pages wrap the actual writing in a single container element
//! marked with `name="articleBody"`. Everything outside of it (navigation,
//! bylines, related links, ads) is noise. Inside it, only text sitting
//! directly in a `<p>` element is kept, one line per text node.
//!
//! Interactive features usually have no such container; extraction then
//! yields an empty string, which the pipeline treats as "no text".
//!
//! Both traversals walk the tree with `ego_tree`'s iterative pre-order
//! cursor, so a deeply nested page cannot exhaust the call stack.

use scraper::node::{Element, Node};
use scraper::{ElementRef, Html};

/// Attribute name marking the article body container.
pub const BODY_MARKER_ATTR: &str = "name";
/// Attribute value marking the article body container.
pub const BODY_MARKER_VALUE: &str = "articleBody";

const PARAGRAPH_TAG: &str = "p";

/// Parse an HTML page.
///
/// html5ever recovers from malformed markup, so this never fails; the
/// recovered tree is what extraction sees.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Whether `element` is the article body container.
pub fn is_article_body(element: &Element) -> bool {
    element.attr(BODY_MARKER_ATTR) == Some(BODY_MARKER_VALUE)
}

/// Find the first article body container in document order.
pub fn find_article_body(document: &Html) -> Option<ElementRef<'_>> {
    document
        .tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|element| is_article_body(element.value()))
}

/// Extract the paragraph text of the article body.
///
/// Every text node beneath the body container whose direct parent is a
/// `<p>` contributes its data followed by `\n`, in document order. Returns
/// an empty string when the page has no body container.
pub fn extract_text(document: &Html) -> String {
    let Some(body) = find_article_body(document) else {
        return String::new();
    };

    let mut paragraph = String::new();
    for node in body.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let in_paragraph = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .is_some_and(|parent| parent.name() == PARAGRAPH_TAG);
        if in_paragraph {
            paragraph.push_str(text);
            paragraph.push('\n');
        }
    }
    paragraph
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> String {
        extract_text(&parse_document(html))
    }

    #[test]
    fn test_extract_paragraphs_across_nesting() {
        let html = r#"<html><body>
            <section name="articleBody"><p>A</p><div><p>B</p></div></section>
        </body></html>"#;
        assert_eq!(extract(html), "A\nB\n");
    }

    #[test]
    fn test_extract_ignores_noise_outside_body() {
        let html = r#"<html><body>
            <header><p>Subscribe now</p></header>
            <h1>Headline</h1>
            <section name="articleBody">
                <div class="byline">By Someone</div>
                <p>First paragraph.</p>
                <p>Second paragraph.</p>
                <p>Third paragraph.</p>
            </section>
            <footer><p>Copyright</p></footer>
        </body></html>"#;
        assert_eq!(
            extract(html),
            "First paragraph.\nSecond paragraph.\nThird paragraph.\n"
        );
    }

    #[test]
    fn test_extract_without_body_container() {
        let html = r#"<html><body>
            <div id="interactive"><p>Scroll to explore</p></div>
        </body></html>"#;
        assert_eq!(extract(html), "");
    }

    #[test]
    fn test_extract_only_direct_paragraph_text() {
        let html = r#"<div name="articleBody">
            <p>Lead <a href="/x">linked</a> tail</p>
            <span>caption</span>
            <p><em>styled</em></p>
        </div>"#;
        assert_eq!(extract(html), "Lead \n tail\n");
    }

    #[test]
    fn test_extract_empty_paragraphs() {
        let html = r#"<div name="articleBody"><p></p><p>Only</p><p></p></div>"#;
        assert_eq!(extract(html), "Only\n");
    }

    #[test]
    fn test_extract_nested_paragraphs_are_split_by_parser() {
        let html = r#"<div name="articleBody"><p>A<p>B</p></p></div>"#;
        assert_eq!(extract(html), "A\nB\n");
    }

    #[test]
    fn test_first_body_container_wins() {
        let html = r#"<body>
            <div name="articleBody"><p>first</p></div>
            <div name="articleBody"><p>second</p></div>
        </body>"#;
        assert_eq!(extract(html), "first\n");
    }

    #[test]
    fn test_marker_value_must_match_exactly() {
        let html = r#"<div name="articlebody"><p>nope</p></div><div data-name="articleBody"><p>nope</p></div>"#;
        assert_eq!(extract(html), "");
    }

    #[test]
    fn test_find_article_body_tag() {
        let document = parse_document(r#"<article><section name="articleBody"></section></article>"#);
        let body = find_article_body(&document).unwrap();
        assert_eq!(body.value().name(), "section");
    }

    #[test]
    fn test_malformed_markup_is_recovered() {
        let html = r#"<div name="articleBody"><p>Unclosed<p>Next</div><p>Outside"#;
        assert_eq!(extract(html), "Unclosed\nNext\n");
    }

    #[test]
    fn test_deeply_nested_document() {
        let depth = 5_000;
        let mut html = String::from(r#"<div name="articleBody">"#);
        html.push_str(&"<div>".repeat(depth));
        html.push_str("<p>deep</p>");
        html.push_str(&"</div>".repeat(depth));
        html.push_str("</div>");
        assert_eq!(extract(&html), "deep\n");
    }
}
