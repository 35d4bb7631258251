//! Host backed by a rendered HTML page
//!
//! The page is scanned once for start tags; every tag carrying an `id`
//! becomes an [`Element`] with its `data-*` attributes as the dataset.
//! Numeric character references and the common named entities in attribute
//! values are decoded; other named entities are kept as written.

use std::path::Path;

use regex::Regex;
use tracing::debug;

use super::{dataset_key, Element, Host};
use crate::error::{CountdownError, CountdownResult};

const COMMENT_PATTERN: &str = r"(?s)<!--.*?-->";
const TAG_PATTERN: &str = r#"<[A-Za-z][A-Za-z0-9-]*((?:[^>"']|"[^"]*"|'[^']*')*)>"#;
const ENTITY_PATTERN: &str = r"&(#[0-9]+|#[xX][0-9A-Fa-f]+|[A-Za-z]+);";
const ATTR_PATTERN: &str =
    r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#;

/// Elements with an id, in document order
#[derive(Debug, Clone, Default)]
pub struct PageHost {
    elements: Vec<Element>,
}

impl PageHost {
    /// Read and scan a page from disk
    pub async fn load(path: impl AsRef<Path>) -> CountdownResult<Self> {
        let path = path.as_ref();
        let html = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CountdownError::PageRead {
                path: path.to_path_buf(),
                source,
            })?;
        let page = Self::parse(&html)?;
        debug!(
            "Loaded page {} with {} identified elements",
            path.display(),
            page.elements.len()
        );
        Ok(page)
    }

    /// Scan page markup for identified elements
    pub fn parse(html: &str) -> CountdownResult<Self> {
        let comment_regex = compile(COMMENT_PATTERN)?;
        let tag_regex = compile(TAG_PATTERN)?;
        let attr_regex = compile(ATTR_PATTERN)?;
        let entity_regex = compile(ENTITY_PATTERN)?;

        let markup = comment_regex.replace_all(html, "");
        let mut elements = Vec::new();

        for tag in tag_regex.captures_iter(&markup) {
            let attributes = tag.get(1).map_or("", |m| m.as_str());
            let mut id: Option<String> = None;
            let mut element = Element::default();

            for attr in attr_regex.captures_iter(attributes) {
                let name = attr[1].to_ascii_lowercase();
                let value = attr
                    .get(2)
                    .or_else(|| attr.get(3))
                    .or_else(|| attr.get(4))
                    .map_or("", |m| m.as_str());
                let value = decode_entities(&entity_regex, value);

                if name == "id" {
                    id.get_or_insert(value);
                } else if let Some(key) = dataset_key(&name) {
                    element.dataset.entry(key).or_insert(value);
                }
            }

            if let Some(id) = id {
                element.id = id;
                elements.push(element);
            }
        }

        Ok(Self { elements })
    }

    /// Number of elements carrying an id
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the page has no identified elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Host for PageHost {
    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.elements.iter().find(|element| element.id == id).cloned()
    }
}

fn decode_entities(entity_regex: &Regex, value: &str) -> String {
    entity_regex
        .replace_all(value, |caps: &regex::Captures<'_>| {
            let reference = &caps[1];
            let decoded = if let Some(hex) = reference
                .strip_prefix("#x")
                .or_else(|| reference.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(decimal) = reference.strip_prefix('#') {
                decimal.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                match reference {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    "nbsp" => Some('\u{a0}'),
                    _ => None,
                }
            };

            match decoded {
                Some(ch) => ch.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn compile(pattern: &'static str) -> CountdownResult<Regex> {
    Regex::new(pattern).map_err(|source| CountdownError::RegexCompile { pattern, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PAGE: &str = r#"<!doctype html>
<html>
  <body>
    <!-- <span id="verify-countdown" data-remaining="999"></span> -->
    <p class="hint">Your code expires in
      <span id="verify-countdown" class="mono" data-remaining="125" aria-live="polite"></span>
    </p>
    <div id='single' data-remaining='7' data-expires-at='2026-01-01T00:00:00Z'></div>
    <div id=bare data-remaining=42 hidden></div>
    <div data-remaining="5">no id here</div>
    <span id="verify-countdown" data-remaining="1"></span>
  </body>
</html>"#;

    #[test]
    fn finds_first_element_by_id() {
        let page = PageHost::parse(PAGE).expect("page should parse");
        let element = page
            .element_by_id("verify-countdown")
            .expect("countdown element should exist");
        assert_eq!(element.data("remaining"), Some("125"));
    }

    #[test]
    fn reads_single_quoted_and_unquoted_attributes() {
        let page = PageHost::parse(PAGE).expect("page should parse");

        let single = page.element_by_id("single").expect("single should exist");
        assert_eq!(single.data("remaining"), Some("7"));
        assert_eq!(single.data("expiresAt"), Some("2026-01-01T00:00:00Z"));

        let bare = page.element_by_id("bare").expect("bare should exist");
        assert_eq!(bare.data("remaining"), Some("42"));
    }

    #[test]
    fn skips_elements_without_id() {
        let page = PageHost::parse(PAGE).expect("page should parse");
        assert_eq!(page.len(), 4);
    }

    #[test]
    fn attribute_values_are_entity_decoded() {
        let page = PageHost::parse(
            r#"<span id="a&amp;b" data-remaining="&#49;2" data-label="&lt;&#x41;&gt; &copy;"></span>"#,
        )
        .expect("page should parse");

        let element = page.element_by_id("a&b").expect("decoded id should match");
        assert_eq!(element.data("remaining"), Some("12"));
        assert_eq!(element.data("label"), Some("<A> &copy;"));
    }

    #[test]
    fn missing_id_yields_none() {
        let page = PageHost::parse("<p>nothing to see</p>").expect("page should parse");
        assert!(page.is_empty());
        assert!(page.element_by_id("verify-countdown").is_none());
    }

    #[tokio::test]
    async fn load_reads_page_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(PAGE.as_bytes()).expect("write page");

        let page = PageHost::load(file.path()).await.expect("page should load");
        assert!(page.element_by_id("bare").is_some());
    }

    #[tokio::test]
    async fn load_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = PageHost::load(dir.path().join("absent.html"))
            .await
            .unwrap_err();
        assert!(matches!(err, CountdownError::PageRead { .. }));
    }
}
