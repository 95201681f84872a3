//! Document root owning the `<body>` mount point.

use crate::dom::element::Element;

/// An in-memory page with a body to mount banners into.
///
/// Cloning a `Document` yields another handle to the same page.
#[derive(Debug, Clone)]
pub struct Document {
    body: Element,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self {
            body: Element::new("body"),
        }
    }

    /// The `<body>` element.
    pub fn body(&self) -> Element {
        self.body.clone()
    }

    /// Creates a detached element owned by this document.
    pub fn create_element(&self, tag: &str) -> Element {
        Element::new(tag)
    }

    /// All elements in the body carrying the class, in document order.
    pub fn get_elements_by_class_name(&self, class: &str) -> Vec<Element> {
        self.body.query_by_class(class)
    }

    /// The first element in the body with the given id.
    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.body.query_by_id(id)
    }

    /// Replaces the body content with a markup fragment.
    pub fn reset_body(&self, markup: &str) {
        self.body.set_inner_html(markup);
    }

    /// Serializes the body content.
    pub fn body_html(&self) -> String {
        self.body.inner_html()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
