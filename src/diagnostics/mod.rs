//! Diagnostic channels banners echo their messages to.

pub mod recording;
pub mod sink;

pub use {
    recording::RecordingSink,
    sink::{CONSOLE_TARGET, Channel, DiagnosticSink, TracingSink},
};
