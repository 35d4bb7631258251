//! Host environment module
//!
//! A host owns the elements a countdown can be attached to. The controller
//! looks its element up once by id and reads the initial duration from the
//! element's data attributes.

pub mod inline;
pub mod page;

use std::collections::HashMap;

// Re-export main types
pub use inline::InlineHost;
pub use page::PageHost;

/// Dataset key holding the initial seconds remaining (`data-remaining`)
pub const REMAINING_KEY: &str = "remaining";

/// Identifier of the countdown element unless configured otherwise
pub const DEFAULT_ELEMENT_ID: &str = "verify-countdown";

/// An element found in the host, with its `data-*` attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    pub dataset: HashMap<String, String>,
}

impl Element {
    /// Create an element with an empty dataset
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            dataset: HashMap::new(),
        }
    }

    /// Builder-style helper to attach a dataset entry
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.dataset.insert(key.into(), value.into());
        self
    }

    /// Look up a dataset entry by its camelCase key
    pub fn data(&self, key: &str) -> Option<&str> {
        self.dataset.get(key).map(String::as_str)
    }
}

/// Capability to locate elements by id
pub trait Host {
    /// Return the element with the given id, if the host has one
    fn element_by_id(&self, id: &str) -> Option<Element>;
}

/// Convert a `data-*` attribute name into its dataset key.
///
/// Returns `None` for attributes outside the `data-` namespace.
/// `data-foo-bar` becomes `fooBar`.
pub fn dataset_key(attribute: &str) -> Option<String> {
    let name = attribute.strip_prefix("data-")?;
    let mut key = String::with_capacity(name.len());
    let mut upper_next = false;

    for ch in name.chars() {
        if ch == '-' {
            if upper_next {
                key.push('-');
            }
            upper_next = true;
            continue;
        }
        if upper_next && ch.is_ascii_lowercase() {
            key.push(ch.to_ascii_uppercase());
        } else {
            if upper_next {
                key.push('-');
            }
            key.push(ch);
        }
        upper_next = false;
    }
    if upper_next {
        key.push('-');
    }

    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_key_camel_cases_dashed_names() {
        assert_eq!(dataset_key("data-remaining").as_deref(), Some("remaining"));
        assert_eq!(dataset_key("data-expires-at").as_deref(), Some("expiresAt"));
        assert_eq!(dataset_key("data-a--b").as_deref(), Some("a-B"));
        assert_eq!(dataset_key("data-x-1").as_deref(), Some("x-1"));
        assert_eq!(dataset_key("id"), None);
        assert_eq!(dataset_key("aria-live"), None);
    }

    #[test]
    fn element_data_lookup() {
        let element = Element::new("verify-countdown").with_data(REMAINING_KEY, "30");
        assert_eq!(element.data(REMAINING_KEY), Some("30"));
        assert_eq!(element.data("other"), None);
    }
}
