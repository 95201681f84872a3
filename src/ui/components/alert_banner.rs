//! Alert banners surfacing user-facing errors and warnings.
//!
//! This module implements the `AlertBanner` component: a `div` carrying the
//! banner class and a severity modifier, mounted into an explicit parent
//! element. Warning banners get a close button that removes the banner when
//! clicked; error banners stay until something else clears them. Unless
//! logging is turned off, the message is also echoed to the error or warning
//! diagnostic channel.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use {
    serde::{Deserialize, Serialize},
    tracing::{debug, error},
};

use crate::{
    config::AlertSettings,
    diagnostics::{Channel, DiagnosticSink},
    dom::{Element, EventType},
    error::UiError,
};

/// How serious a banner is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Permanent banner, logged to the error channel.
    #[default]
    Error,
    /// Dismissible banner, logged to the warning channel.
    Warning,
}

impl Severity {
    /// Gets the CSS modifier class for this severity.
    ///
    /// # Returns
    ///
    /// The CSS class name as a string slice.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Error => "alert-error",
            Severity::Warning => "alert-warning",
        }
    }

    /// Whether banners of this severity get a close button.
    pub fn is_dismissible(&self) -> bool {
        matches!(self, Severity::Warning)
    }

    /// The diagnostic channel messages of this severity go to.
    pub fn channel(&self) -> Channel {
        match self {
            Severity::Error => Channel::Error,
            Severity::Warning => Channel::Warning,
        }
    }

    /// The lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            other => Err(UiError::UnknownSeverity(other.to_string())),
        }
    }
}

/// How a banner message is put into the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Trusted markup, inserted verbatim.
    #[default]
    Html,
    /// Plain text, escaped.
    Text,
}

impl FromStr for MessageType {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(MessageType::Html),
            "text" => Ok(MessageType::Text),
            other => Err(UiError::UnknownMessageType(other.to_string())),
        }
    }
}

/// Builder pattern for configuring and rendering alert banners.
#[derive(Debug, Clone)]
pub struct AlertBannerBuilder {
    message: String,
    severity: Severity,
    should_log: Option<bool>,
    message_type: MessageType,
    settings: AlertSettings,
}

impl AlertBannerBuilder {
    /// Sets the severity (defaults to `Severity::Error`).
    ///
    /// # Returns
    ///
    /// The builder instance for method chaining.
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets whether the message is echoed to the diagnostic channel.
    ///
    /// Defaults to the `log_by_default` setting. Turning logging off never
    /// stops the banner from being inserted.
    ///
    /// # Returns
    ///
    /// The builder instance for method chaining.
    pub fn should_log(mut self, should_log: bool) -> Self {
        self.should_log = Some(should_log);
        self
    }

    /// Sets how the message is inserted (defaults to `MessageType::Html`).
    ///
    /// # Returns
    ///
    /// The builder instance for method chaining.
    pub fn message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    /// Uses custom class names and logging defaults.
    ///
    /// # Returns
    ///
    /// The builder instance for method chaining.
    pub fn settings(mut self, settings: AlertSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Builds the banner, mounts it and logs the message.
    ///
    /// # Arguments
    ///
    /// * `mount` - Element the banner is appended to.
    /// * `sink` - Diagnostic channels for the message.
    ///
    /// # Returns
    ///
    /// The mounted `AlertBanner`.
    pub fn render(self, mount: &Element, sink: &dyn DiagnosticSink) -> AlertBanner {
        let element = Element::new("div");
        element.add_class(self.settings.banner_class.as_str());
        element.add_class(self.severity.css_class());
        match self.message_type {
            MessageType::Html => element.set_inner_html(self.message.as_str()),
            MessageType::Text => element.set_text_content(self.message.as_str()),
        }

        let close_button = self
            .severity
            .is_dismissible()
            .then(|| Self::attach_close_button(&element, &self.settings));

        // A freshly created banner cannot be an ancestor of the mount point.
        if let Err(e) = mount.append_child(&element) {
            error!(error = %e, "Failed to mount alert banner");
        }
        debug!(
            severity = %self.severity,
            dismissible = close_button.is_some(),
            "Alert banner mounted"
        );

        if self.should_log.unwrap_or(self.settings.log_by_default) {
            sink.log(self.severity.channel(), &self.message);
        }

        AlertBanner {
            element,
            close_button,
            severity: self.severity,
        }
    }

    fn attach_close_button(banner: &Element, settings: &AlertSettings) -> Element {
        let button = Element::new("button");
        button.set_id(settings.close_button_id.as_str());
        button.set_inner_html(settings.close_button_label.as_str());

        let banner_ref = banner.downgrade();
        button.add_event_listener(EventType::Click, move |_| {
            if let Some(banner) = banner_ref.upgrade()
                && banner.remove()
            {
                debug!("Alert banner dismissed");
            }
        });

        if let Err(e) = banner.append_child(&button) {
            error!(error = %e, "Failed to attach close button");
        }
        button
    }
}

/// A banner mounted in the page.
#[derive(Debug, Clone)]
pub struct AlertBanner {
    /// The banner element.
    pub element: Element,
    /// The close button, present on warning banners only.
    pub close_button: Option<Element>,
    /// The banner severity.
    pub severity: Severity,
}

impl AlertBanner {
    /// Starts configuring a banner for `message`.
    pub fn builder(message: impl Into<String>) -> AlertBannerBuilder {
        AlertBannerBuilder {
            message: message.into(),
            severity: Severity::default(),
            should_log: None,
            message_type: MessageType::default(),
            settings: AlertSettings::default(),
        }
    }

    /// Removes the banner from the page.
    ///
    /// # Returns
    ///
    /// `true` if the banner was mounted, `false` if it was already gone.
    pub fn dismiss(&self) -> bool {
        let removed = self.element.remove();
        if removed {
            debug!(severity = %self.severity, "Alert banner dismissed");
        }
        removed
    }

    /// Whether the banner is still attached to a parent.
    pub fn is_mounted(&self) -> bool {
        self.element.parent().is_some()
    }

    /// The banner content as markup, close button included.
    pub fn inner_html(&self) -> String {
        self.element.inner_html()
    }
}

/// Renders a banner with the given severity into `mount`.
///
/// The message is inserted as markup. When `should_log` is set, the message
/// is also written to the error channel for `Severity::Error` or the warning
/// channel for `Severity::Warning`.
///
/// # Arguments
///
/// * `mount` - Element the banner is appended to, usually the page body.
/// * `sink` - Diagnostic channels for the message.
/// * `message` - Trusted markup shown in the banner.
/// * `severity` - Banner severity.
/// * `should_log` - Whether to echo the message to the diagnostic channel.
///
/// # Returns
///
/// The mounted `AlertBanner`.
pub fn render_banner(
    mount: &Element,
    sink: &dyn DiagnosticSink,
    message: &str,
    severity: Severity,
    should_log: bool,
) -> AlertBanner {
    AlertBanner::builder(message)
        .severity(severity)
        .should_log(should_log)
        .render(mount, sink)
}
