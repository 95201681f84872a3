//! Error handling built on `thiserror` and `anyhow`.
//!
//! This module provides the closed `ScriptError` hierarchy used to tell
//! user-facing failures apart from unexpected ones, plus operational error
//! context propagation for everything else.

pub mod domain;
pub mod operational;

pub use {
    domain::{DomError, ScriptError, UiError, UserError},
    operational::{ErrorReporter, ResultExt},
};
