//! Minimal in-memory document model.
//!
//! Banners are mounted into an explicit `Element` rather than a global page,
//! so this module provides just enough of a DOM to build, query, click and
//! serialize them.

pub mod document;
pub mod element;
pub mod event;
pub mod markup;

pub use {
    document::Document,
    element::{Element, WeakElement},
    event::{Event, EventType},
    markup::escape_html,
};
