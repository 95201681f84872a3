//! Running callbacks with user errors turned into banners.
//!
//! A callback that fails with `ScriptError::User` gets its message shown as
//! an error banner and the failure is absorbed; the caller carries on with
//! `Ok(None)`. Any other failure is handed back unchanged.

use std::{cell::Cell, rc::Rc};

use tracing::debug;

use crate::{
    config::AlertSettings,
    diagnostics::DiagnosticSink,
    dom::Element,
    error::{ErrorReporter, ScriptError, UserError},
    ui::components::alert_banner::{AlertBanner, Severity},
};

/// Runs `f`, showing a `UserError` as an error banner in `mount`.
///
/// # Arguments
///
/// * `mount` - Element banners are appended to.
/// * `sink` - Diagnostic channels for the banner message.
/// * `f` - The callback to run.
///
/// # Returns
///
/// `Ok(Some(value))` when `f` succeeds, `Ok(None)` when it failed with a
/// user error that is now on screen.
///
/// # Errors
///
/// Returns the callback's error, untouched, when it is not a user error.
pub fn with_user_error_handler<T, E, F>(
    mount: &Element,
    sink: &dyn DiagnosticSink,
    f: F,
) -> Result<Option<T>, ScriptError>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<ScriptError>,
{
    run_with_settings(mount, sink, &AlertSettings::default(), f)
}

/// `Ok(None)` means a user error was shown.
fn run_with_settings<T, E, F>(
    mount: &Element,
    sink: &dyn DiagnosticSink,
    settings: &AlertSettings,
    f: F,
) -> Result<Option<T>, ScriptError>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<ScriptError>,
{
    match f().map_err(Into::into) {
        Ok(value) => Ok(Some(value)),
        Err(ScriptError::User(user_error)) => {
            show_user_error(mount, sink, settings, &user_error);
            Ok(None)
        }
        Err(ScriptError::Other(error)) => {
            ErrorReporter::debug(&error, "Propagating non-user error");
            Err(ScriptError::Other(error))
        }
    }
}

fn show_user_error(
    mount: &Element,
    sink: &dyn DiagnosticSink,
    settings: &AlertSettings,
    user_error: &UserError,
) -> AlertBanner {
    debug!(user_message = user_error.message(), "Showing user error");
    AlertBanner::builder(user_error.message())
        .severity(Severity::Error)
        .message_type(user_error.message_type())
        .settings(settings.clone())
        .render(mount, sink)
}

/// Holds a mount point and sink so callbacks can be wrapped repeatedly.
pub struct UserErrorHandler {
    mount: Element,
    sink: Rc<dyn DiagnosticSink>,
    settings: AlertSettings,
    absorbed: Cell<usize>,
}

impl UserErrorHandler {
    /// Creates a handler mounting banners into `mount`.
    pub fn new(mount: Element, sink: Rc<dyn DiagnosticSink>) -> Self {
        Self {
            mount,
            sink,
            settings: AlertSettings::default(),
            absorbed: Cell::new(0),
        }
    }

    /// Uses custom banner settings.
    #[must_use]
    pub fn with_settings(mut self, settings: AlertSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Runs `f` like [`with_user_error_handler`].
    ///
    /// # Errors
    ///
    /// Returns the callback's error, untouched, when it is not a user error.
    pub fn run<T, E, F>(&self, f: F) -> Result<Option<T>, ScriptError>
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<ScriptError>,
    {
        let outcome = run_with_settings(&self.mount, &*self.sink, &self.settings, f)?;
        if outcome.is_none() {
            self.absorbed.set(self.absorbed.get() + 1);
        }
        Ok(outcome)
    }

    /// Number of user errors shown so far.
    pub fn absorbed_count(&self) -> usize {
        self.absorbed.get()
    }

    /// The element banners are mounted into.
    pub fn mount(&self) -> &Element {
        &self.mount
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use anyhow::anyhow;

    use crate::{
        config::AlertSettings,
        diagnostics::RecordingSink,
        dom::Document,
        error::{ScriptError, UserError},
        ui::handler::{UserErrorHandler, with_user_error_handler},
    };

    #[test]
    fn test_success_passes_value_through() {
        let document = Document::new();
        let sink = RecordingSink::new();

        let result = with_user_error_handler(&document.body(), &sink, || {
            Ok::<_, ScriptError>(42)
        });

        assert_eq!(result.unwrap(), Some(42));
        assert!(document.get_elements_by_class_name("alert-banner").is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_user_error_from_anyhow_is_recognised() {
        let document = Document::new();
        let sink = RecordingSink::new();

        let result = with_user_error_handler(&document.body(), &sink, || -> anyhow::Result<()> {
            Err(UserError::new("Bad input").into())
        });

        assert!(matches!(result, Ok(None)));
        assert_eq!(sink.errors(), vec!["Bad input".to_string()]);
    }

    #[test]
    fn test_user_error_text_is_escaped() {
        let document = Document::new();
        let sink = RecordingSink::new();

        with_user_error_handler(&document.body(), &sink, || -> Result<(), UserError> {
            Err(UserError::new("<i>nope</i>"))
        })
        .unwrap();

        let banners = document.get_elements_by_class_name("alert-banner");
        assert_eq!(banners[0].inner_html(), "&lt;i&gt;nope&lt;/i&gt;");
    }

    #[test]
    fn test_user_error_html_is_kept() {
        let document = Document::new();
        let sink = RecordingSink::new();

        with_user_error_handler(&document.body(), &sink, || -> Result<(), UserError> {
            Err(UserError::html("<i>nope</i>"))
        })
        .unwrap();

        let banners = document.get_elements_by_class_name("alert-banner");
        assert_eq!(banners[0].inner_html(), "<i>nope</i>");
    }

    #[test]
    fn test_handler_counts_absorbed_errors() {
        let document = Document::new();
        let sink = Rc::new(RecordingSink::new());
        let handler = UserErrorHandler::new(document.body(), sink.clone());

        assert_eq!(handler.run(|| Ok::<_, UserError>("fine")).unwrap(), Some("fine"));
        assert_eq!(
            handler
                .run(|| -> Result<(), UserError> { Err(UserError::new("first")) })
                .unwrap(),
            None
        );
        handler
            .run(|| -> Result<(), UserError> { Err(UserError::new("second")) })
            .unwrap();
        let other = handler.run(|| -> anyhow::Result<()> { Err(anyhow!("boom")) });

        assert!(other.is_err());
        assert_eq!(handler.absorbed_count(), 2);
        assert_eq!(sink.errors(), vec!["first".to_string(), "second".to_string()]);
        assert_eq!(handler.mount().child_element_count(), 2);
    }

    #[test]
    fn test_handler_uses_settings() {
        let document = Document::new();
        let sink = Rc::new(RecordingSink::new());
        let handler = UserErrorHandler::new(document.body(), sink.clone()).with_settings(
            AlertSettings {
                banner_class: "py-error".to_string(),
                log_by_default: false,
                ..AlertSettings::default()
            },
        );

        handler
            .run(|| -> Result<(), UserError> { Err(UserError::new("quiet")) })
            .unwrap();

        assert_eq!(document.get_elements_by_class_name("py-error").len(), 1);
        assert!(sink.is_empty());
    }
}
