//! Console-equivalent diagnostic channels.
//!
//! A banner echoes its message to one of two independent channels: the
//! error channel or the warning channel. `TracingSink` maps them onto
//! `tracing` events; other sinks can capture or forward them elsewhere.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    rc::Rc,
    sync::Arc,
};

use tracing::{error, warn};

/// The `tracing` target diagnostic messages are emitted under.
pub const CONSOLE_TARGET: &str = "alert_banner::console";

/// One of the two diagnostic channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Error-level messages.
    Error,
    /// Warning-level messages.
    Warning,
}

impl Display for Channel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Channel::Error => f.write_str("error"),
            Channel::Warning => f.write_str("warning"),
        }
    }
}

/// Destination for messages echoed by banners.
pub trait DiagnosticSink {
    /// Writes a message to the error channel.
    fn error(&self, message: &str);

    /// Writes a message to the warning channel.
    fn warn(&self, message: &str);

    /// Writes a message to the given channel.
    fn log(&self, channel: Channel, message: &str) {
        match channel {
            Channel::Error => self.error(message),
            Channel::Warning => self.warn(message),
        }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn error(&self, message: &str) {
        (**self).error(message);
    }

    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Rc<S> {
    fn error(&self, message: &str) {
        (**self).error(message);
    }

    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn error(&self, message: &str) {
        (**self).error(message);
    }

    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

/// Sink forwarding to `tracing::error!` and `tracing::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn error(&self, message: &str) {
        error!(target: CONSOLE_TARGET, "{message}");
    }

    fn warn(&self, message: &str) {
        warn!(target: CONSOLE_TARGET, "{message}");
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::diagnostics::{
        recording::RecordingSink,
        sink::{Channel, DiagnosticSink, TracingSink},
    };

    #[test]
    fn test_log_routes_by_channel() {
        let sink = RecordingSink::new();
        sink.log(Channel::Error, "broken");
        sink.log(Channel::Warning, "careful");

        assert_eq!(sink.errors(), vec!["broken".to_string()]);
        assert_eq!(sink.warnings(), vec!["careful".to_string()]);
    }

    fn emit_error(sink: impl DiagnosticSink, message: &str) {
        sink.error(message);
    }

    #[test]
    fn test_forwarding_impls() {
        let sink = Rc::new(RecordingSink::new());
        let shared: Rc<dyn DiagnosticSink> = sink.clone();
        shared.warn("through rc");
        emit_error(&*sink, "through ref");

        assert!(sink.was_called_with(Channel::Warning, "through rc"));
        assert!(sink.was_called_with(Channel::Error, "through ref"));
    }

    #[test]
    fn test_tracing_sink_does_not_panic_without_subscriber() {
        TracingSink.error("no subscriber installed");
        TracingSink.warn("no subscriber installed");
    }

    #[test]
    fn test_channel_display() {
        assert_eq!(Channel::Error.to_string(), "error");
        assert_eq!(Channel::Warning.to_string(), "warning");
    }
}
