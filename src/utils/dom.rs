// src/utils/dom.rs

//! Typed node queries over a parsed document.

use scraper::{ElementRef, Selector};

use crate::error::{AppError, Result};

/// Query capabilities the extractors need from a document node.
pub trait Node: Sized + Clone {
    /// All descendants matching a CSS selector, in document order.
    fn find(&self, selector: &str) -> Result<Vec<Self>>;

    /// Concatenated visible text of the node and its descendants.
    fn text(&self) -> String;

    /// Value of an attribute, if present.
    fn attr(&self, name: &str) -> Option<String>;
}

impl Node for ElementRef<'_> {
    fn find(&self, selector: &str) -> Result<Vec<Self>> {
        let sel = parse_selector(selector)?;
        Ok(self.select(&sel).collect())
    }

    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_string)
    }
}

/// The single node matching `selector`.
///
/// Zero or several matches mean the markup is not what we expect.
pub fn find_one<N: Node>(node: &N, selector: &str) -> Result<N> {
    let mut matches = node.find(selector)?;
    if matches.len() != 1 {
        return Err(AppError::UnexpectedFormat);
    }
    Ok(matches.remove(0))
}

pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const DOC: &str = r#"<div id="root"><p class="a">one</p><p class="a b">t<b>w</b>o</p><span title="x">s</span></div>"#;

    #[test]
    fn test_parse_selector_valid() {
        assert!(parse_selector("td > span[class*='rank']").is_ok());
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(matches!(
            parse_selector("[[invalid"),
            Err(AppError::Selector { .. })
        ));
    }

    #[test]
    fn test_find_and_text() {
        let doc = Html::parse_document(DOC);
        let root = doc.root_element();
        let paragraphs = root.find("p.a").unwrap();
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(Node::text(&paragraphs[1]), "two");
    }

    #[test]
    fn test_attr() {
        let doc = Html::parse_document(DOC);
        let span = find_one(&doc.root_element(), "span").unwrap();
        assert_eq!(Node::attr(&span, "title"), Some("x".to_string()));
        assert_eq!(Node::attr(&span, "href"), None);
    }

    #[test]
    fn test_find_one_requires_exactly_one() {
        let doc = Html::parse_document(DOC);
        let root = doc.root_element();
        assert!(matches!(
            find_one(&root, "p"),
            Err(AppError::UnexpectedFormat)
        ));
        assert!(matches!(
            find_one(&root, "table"),
            Err(AppError::UnexpectedFormat)
        ));
        assert!(find_one(&root, "p.b").is_ok());
    }
}
