//! A sink that keeps every message, for assertions in tests.

use parking_lot::Mutex;

use crate::diagnostics::sink::{Channel, DiagnosticSink};

/// Captures diagnostic messages per channel instead of printing them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<(Channel, String)>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message recorded so far, in order.
    pub fn entries(&self) -> Vec<(Channel, String)> {
        self.entries.lock().clone()
    }

    /// Messages written to the error channel.
    pub fn errors(&self) -> Vec<String> {
        self.messages(Channel::Error)
    }

    /// Messages written to the warning channel.
    pub fn warnings(&self) -> Vec<String> {
        self.messages(Channel::Warning)
    }

    fn messages(&self, channel: Channel) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|(recorded, _)| *recorded == channel)
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// Returns `true` if `message` was written to `channel`.
    pub fn was_called_with(&self, channel: Channel, message: &str) -> bool {
        self.entries
            .lock()
            .iter()
            .any(|(recorded, text)| *recorded == channel && text == message)
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Forgets every recorded message.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    fn record(&self, channel: Channel, message: &str) {
        self.entries.lock().push((channel, message.to_string()));
    }
}

impl DiagnosticSink for RecordingSink {
    fn error(&self, message: &str) {
        self.record(Channel::Error, message);
    }

    fn warn(&self, message: &str) {
        self.record(Channel::Warning, message);
    }
}

#[cfg(test)]
mod tests {
    use crate::diagnostics::{
        recording::RecordingSink,
        sink::{Channel, DiagnosticSink},
    };

    #[test]
    fn test_records_in_order() {
        let sink = RecordingSink::new();
        assert!(sink.is_empty());

        sink.warn("first");
        sink.error("second");

        assert_eq!(
            sink.entries(),
            vec![
                (Channel::Warning, "first".to_string()),
                (Channel::Error, "second".to_string()),
            ]
        );
        assert!(!sink.was_called_with(Channel::Error, "first"));

        sink.clear();
        assert!(sink.is_empty());
    }
}
