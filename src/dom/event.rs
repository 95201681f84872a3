//! Events dispatched to element listeners.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::dom::element::Element;

/// Kinds of events the document model dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Pointer activation of an element.
    Click,
}

impl EventType {
    /// The DOM event name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Click => "click",
        }
    }
}

impl Display for EventType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// An event delivered to a listener.
#[derive(Debug, Clone)]
pub struct Event {
    /// What happened.
    pub event_type: EventType,
    /// The element the event was dispatched on.
    pub target: Element,
}
