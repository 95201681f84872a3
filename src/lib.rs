//! Alert banners and user-error handling for browser-hosted script pages.
//!
//! Banners are mounted into an explicit element of an in-memory document
//! model. Error banners are permanent; warning banners carry a close button.
//! Messages are echoed to an error or warning diagnostic channel. Callbacks
//! run through [`with_user_error_handler`] have their [`UserError`]s shown
//! as banners while every other failure propagates unchanged.

pub mod config;
pub mod diagnostics;
pub mod dom;
pub mod error;
pub mod logging;
pub mod ui;

// Re-export key types for convenience
pub use {
    config::{AlertSettings, SettingsError, SettingsManager},
    diagnostics::{Channel, DiagnosticSink, RecordingSink, TracingSink},
    dom::{Document, Element},
    error::{ScriptError, UserError},
    ui::{
        AlertBanner, MessageType, Severity, UserErrorHandler, render_banner,
        with_user_error_handler,
    },
};
