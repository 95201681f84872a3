//! Shared element nodes with classes, ids, content and click listeners.
//!
//! Elements are reference-counted handles: cloning an `Element` yields
//! another handle to the same node. Parents own their children; children
//! only hold a weak link back, so detaching a subtree frees it once the
//! last outside handle is dropped.

use std::{
    cell::RefCell,
    fmt::{Debug, Formatter, Result as FmtResult},
    rc::{Rc, Weak},
};

use tracing::debug;

use crate::{
    dom::{
        event::{Event, EventType},
        markup::{escape_html, markup_to_text},
    },
    error::DomError,
};

type Listener = Rc<dyn Fn(&Event)>;

/// A child slot of an element.
#[derive(Clone)]
enum Node {
    Element(Element),
    Text(String),
    Markup(String),
}

struct ElementData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    children: Vec<Node>,
    parent: Weak<RefCell<ElementData>>,
    listeners: Vec<(EventType, Listener)>,
}

/// Handle to a node in the document tree.
#[derive(Clone)]
pub struct Element(Rc<RefCell<ElementData>>);

/// Non-owning handle to an element, used by listeners that refer back to
/// an ancestor.
#[derive(Clone)]
pub struct WeakElement(Weak<RefCell<ElementData>>);

impl WeakElement {
    /// Returns the element if it is still alive.
    pub fn upgrade(&self) -> Option<Element> {
        self.0.upgrade().map(Element)
    }
}

impl Element {
    /// Creates a detached element with the given tag name.
    ///
    /// # Arguments
    ///
    /// * `tag` - Tag name, e.g. `"div"`.
    ///
    /// # Returns
    ///
    /// A new `Element` with no parent, classes or content.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(ElementData {
            tag: tag.into().to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            children: Vec::new(),
            parent: Weak::new(),
            listeners: Vec::new(),
        })))
    }

    /// Returns a weak handle to this element.
    pub fn downgrade(&self) -> WeakElement {
        WeakElement(Rc::downgrade(&self.0))
    }

    /// Returns `true` if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// The lowercase tag name.
    pub fn tag_name(&self) -> String {
        self.0.borrow().tag.clone()
    }

    /// The element id, if set.
    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    /// Sets the element id.
    pub fn set_id(&self, id: impl Into<String>) {
        self.0.borrow_mut().id = Some(id.into());
    }

    /// Adds a class unless it is already present.
    pub fn add_class(&self, class: impl Into<String>) {
        let class = class.into();
        let mut data = self.0.borrow_mut();
        if !data.classes.contains(&class) {
            data.classes.push(class);
        }
    }

    /// Returns `true` if the element carries the class.
    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    /// The space-separated class attribute.
    pub fn class_name(&self) -> String {
        self.0.borrow().classes.join(" ")
    }

    /// Replaces the content with a markup fragment, inserted verbatim.
    pub fn set_inner_html(&self, markup: impl Into<String>) {
        let markup = markup.into();
        self.replace_children((!markup.is_empty()).then_some(Node::Markup(markup)));
    }

    /// Replaces the content with text, escaped on serialization.
    pub fn set_text_content(&self, text: impl Into<String>) {
        let text = text.into();
        self.replace_children((!text.is_empty()).then_some(Node::Text(text)));
    }

    fn replace_children(&self, content: Option<Node>) {
        let old = std::mem::take(&mut self.0.borrow_mut().children);
        for node in old {
            if let Node::Element(child) = node {
                child.0.borrow_mut().parent = Weak::new();
            }
        }
        self.0.borrow_mut().children.extend(content);
    }

    /// Serializes the content of the element.
    pub fn inner_html(&self) -> String {
        let children = self.0.borrow().children.clone();
        let mut html = String::new();
        for node in &children {
            match node {
                Node::Element(child) => html.push_str(&child.outer_html()),
                Node::Text(text) => html.push_str(&escape_html(text)),
                Node::Markup(markup) => html.push_str(markup),
            }
        }
        html
    }

    /// Serializes the element itself and its content.
    pub fn outer_html(&self) -> String {
        let (tag, id, class_name) = {
            let data = self.0.borrow();
            (data.tag.clone(), data.id.clone(), data.classes.join(" "))
        };

        let mut html = format!("<{tag}");
        if let Some(id) = id {
            html.push_str(&format!(" id=\"{}\"", escape_html(&id)));
        }
        if !class_name.is_empty() {
            html.push_str(&format!(" class=\"{}\"", escape_html(&class_name)));
        }
        html.push('>');
        html.push_str(&self.inner_html());
        html.push_str(&format!("</{tag}>"));
        html
    }

    /// The concatenated text of the element and its descendants.
    pub fn text_content(&self) -> String {
        let children = self.0.borrow().children.clone();
        children
            .iter()
            .map(|node| match node {
                Node::Element(child) => child.text_content(),
                Node::Text(text) => text.clone(),
                Node::Markup(markup) => markup_to_text(markup),
            })
            .collect()
    }

    /// The parent element, if attached.
    pub fn parent(&self) -> Option<Element> {
        self.0.borrow().parent.upgrade().map(Element)
    }

    /// The element children, in document order.
    pub fn children(&self) -> Vec<Element> {
        self.0
            .borrow()
            .children
            .iter()
            .filter_map(|node| match node {
                Node::Element(child) => Some(child.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of element children.
    pub fn child_element_count(&self) -> usize {
        self.children().len()
    }

    /// Returns `true` if `self` is `other` or one of its ancestors.
    pub fn is_inclusive_ancestor_of(&self, other: &Element) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if node.ptr_eq(self) {
                return true;
            }
            current = node.parent();
        }
        false
    }

    /// Appends `child` as the last child, moving it from any previous parent.
    ///
    /// # Errors
    ///
    /// Returns `DomError::HierarchyRequest` if `child` is this element or
    /// one of its ancestors.
    pub fn append_child(&self, child: &Element) -> Result<(), DomError> {
        self.insert_child(child, false)
    }

    /// Inserts `child` as the first child, moving it from any previous parent.
    ///
    /// # Errors
    ///
    /// Returns `DomError::HierarchyRequest` if `child` is this element or
    /// one of its ancestors.
    pub fn prepend_child(&self, child: &Element) -> Result<(), DomError> {
        self.insert_child(child, true)
    }

    fn insert_child(&self, child: &Element, at_front: bool) -> Result<(), DomError> {
        if child.is_inclusive_ancestor_of(self) {
            return Err(DomError::hierarchy_request(format!(
                "<{}> cannot be inserted into itself or its descendants",
                child.tag_name()
            )));
        }

        child.remove();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);

        let mut data = self.0.borrow_mut();
        let node = Node::Element(child.clone());
        if at_front {
            data.children.insert(0, node);
        } else {
            data.children.push(node);
        }
        Ok(())
    }

    /// Detaches the element from its parent.
    ///
    /// # Returns
    ///
    /// `true` if the element was attached, `false` if it had no parent
    /// (removing a detached element is a no-op).
    pub fn remove(&self) -> bool {
        let Some(parent) = self.parent() else {
            return false;
        };

        parent.0.borrow_mut().children.retain(|node| match node {
            Node::Element(child) => !child.ptr_eq(self),
            _ => true,
        });
        self.0.borrow_mut().parent = Weak::new();
        true
    }

    /// Registers a listener for an event type.
    pub fn add_event_listener<F>(&self, event_type: EventType, listener: F)
    where
        F: Fn(&Event) + 'static,
    {
        self.0
            .borrow_mut()
            .listeners
            .push((event_type, Rc::new(listener)));
    }

    /// Dispatches an event to the listeners registered on this element.
    ///
    /// Listeners run synchronously, in registration order, and may freely
    /// mutate the tree (including removing this element).
    ///
    /// # Returns
    ///
    /// The number of listeners invoked.
    pub fn dispatch_event(&self, event_type: EventType) -> usize {
        let listeners: Vec<Listener> = self
            .0
            .borrow()
            .listeners
            .iter()
            .filter(|(kind, _)| *kind == event_type)
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        debug!(
            event = %event_type,
            tag = %self.tag_name(),
            listeners = listeners.len(),
            "Dispatching event"
        );

        let event = Event {
            event_type,
            target: self.clone(),
        };
        for listener in &listeners {
            listener(&event);
        }
        listeners.len()
    }

    /// Simulates a click on the element.
    pub fn click(&self) -> usize {
        self.dispatch_event(EventType::Click)
    }

    /// Descendants carrying the class, in document order.
    pub fn query_by_class(&self, class: &str) -> Vec<Element> {
        let mut found = Vec::new();
        self.collect_descendants(&mut |element| element.has_class(class), &mut found);
        found
    }

    /// The first descendant with the given id, in document order.
    pub fn query_by_id(&self, id: &str) -> Option<Element> {
        let mut found = Vec::new();
        self.collect_descendants(
            &mut |element| element.id().as_deref() == Some(id),
            &mut found,
        );
        found.into_iter().next()
    }

    fn collect_descendants(
        &self,
        predicate: &mut dyn FnMut(&Element) -> bool,
        found: &mut Vec<Element>,
    ) {
        for child in self.children() {
            if predicate(&child) {
                found.push(child.clone());
            }
            child.collect_descendants(predicate, found);
        }
    }
}

impl Debug for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let data = self.0.borrow();
        f.debug_struct("Element")
            .field("tag", &data.tag)
            .field("id", &data.id)
            .field("classes", &data.classes)
            .field("children", &data.children.len())
            .finish()
    }
}

impl Debug for WeakElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("WeakElement")
    }
}
