//! Host holding a fixed set of elements supplied up front

use super::{Element, Host};

/// In-memory host, used when the duration comes from the command line
#[derive(Debug, Clone, Default)]
pub struct InlineHost {
    elements: Vec<Element>,
}

impl InlineHost {
    /// Create an empty host
    pub fn new() -> Self {
        Self::default()
    }

    /// Host with a single element
    pub fn single(element: Element) -> Self {
        Self {
            elements: vec![element],
        }
    }

    /// Add an element; earlier elements win on duplicate ids
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }
}

impl Host for InlineHost {
    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.elements.iter().find(|element| element.id == id).cloned()
    }
}
