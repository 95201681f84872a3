//! Domain-specific error types using `thiserror`.
//!
//! This module defines the closed error hierarchy that script callbacks fail
//! with (`ScriptError`), the user-facing `UserError` it singles out, and the
//! errors raised by the document model and UI helpers themselves.

use std::result::Result as StdResult;

use {anyhow::Error, thiserror::Error};

use crate::ui::components::alert_banner::MessageType;

/// An expected, recoverable failure that should be shown to the end user.
///
/// Raising a `UserError` inside a callback run by the user-error handler
/// turns it into an error banner instead of aborting the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct UserError {
    message: String,
    message_type: MessageType,
}

impl UserError {
    /// Creates a new `UserError` whose message is displayed as plain text.
    ///
    /// # Arguments
    ///
    /// * `message` - Message shown to the user.
    ///
    /// # Returns
    ///
    /// A new `UserError`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            message_type: MessageType::Text,
        }
    }

    /// Creates a new `UserError` whose message is trusted markup.
    ///
    /// # Arguments
    ///
    /// * `message` - Markup inserted verbatim into the banner.
    ///
    /// # Returns
    ///
    /// A new `UserError`.
    pub fn html(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            message_type: MessageType::Html,
        }
    }

    /// The message shown to the user.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// How the message is inserted into the banner.
    pub fn message_type(&self) -> MessageType {
        self.message_type
    }
}

/// Everything a callback wrapped by the user-error handler can fail with.
///
/// The variant, not the shape of the message, decides whether an error is
/// shown to the user or handed back to the caller.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// Expected failure, converted into an error banner.
    #[error(transparent)]
    User(#[from] UserError),
    /// Any other failure, propagated untouched.
    #[error(transparent)]
    Other(Error),
}

impl ScriptError {
    /// Classifies an `anyhow::Error` by its concrete type.
    ///
    /// An error whose concrete type is `UserError` becomes `User`; anything
    /// else, including errors that merely carry a similar message, stays
    /// `Other` with its identity preserved.
    ///
    /// # Arguments
    ///
    /// * `error` - The error to classify.
    ///
    /// # Returns
    ///
    /// The classified `ScriptError`.
    pub fn classify(error: Error) -> Self {
        match error.downcast::<UserError>() {
            Ok(user_error) => ScriptError::User(user_error),
            Err(other) => ScriptError::Other(other),
        }
    }

    /// Returns `true` if this is a user-facing error.
    pub fn is_user_error(&self) -> bool {
        matches!(self, ScriptError::User(_))
    }

    /// Returns the user-facing error, if any.
    pub fn as_user_error(&self) -> Option<&UserError> {
        match self {
            ScriptError::User(user_error) => Some(user_error),
            ScriptError::Other(_) => None,
        }
    }

    /// Consumes the error and returns the unexpected failure, if any.
    pub fn into_other(self) -> Option<Error> {
        match self {
            ScriptError::User(_) => None,
            ScriptError::Other(error) => Some(error),
        }
    }
}

impl From<Error> for ScriptError {
    fn from(error: Error) -> Self {
        Self::classify(error)
    }
}

/// Errors raised by the in-memory document model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// The requested insertion would break the tree structure.
    #[error("Hierarchy request error: {reason}")]
    HierarchyRequest { reason: String },
}

impl DomError {
    /// Creates a new `HierarchyRequest` error.
    pub fn hierarchy_request(reason: impl Into<String>) -> Self {
        Self::HierarchyRequest {
            reason: reason.into(),
        }
    }
}

/// UI-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// Severity name not recognised.
    #[error("Unknown severity: {0}")]
    UnknownSeverity(String),
    /// Message type name not recognised.
    #[error("Unknown message type: {0}")]
    UnknownMessageType(String),
}

/// Operational error context propagation with `anyhow`.
///
/// This type is used for operational errors that need rich context
/// but don't require specific handling logic.
pub type Result<T> = StdResult<T, Error>;

#[cfg(test)]
mod tests {
    use std::io::{Error as IoError, ErrorKind::NotFound};

    use anyhow::{Error, anyhow};

    use crate::{
        error::domain::{DomError, ScriptError, UiError, UserError},
        ui::components::alert_banner::MessageType,
    };

    #[test]
    fn test_user_error_display() {
        let user_error = UserError::new("Computer says no");
        assert_eq!(user_error.to_string(), "Computer says no");
        assert_eq!(user_error.message(), "Computer says no");
        assert_eq!(user_error.message_type(), MessageType::Text);

        let html_error = UserError::html("<b>Careful</b>");
        assert_eq!(html_error.message_type(), MessageType::Html);
    }

    #[test]
    fn test_classify_recognises_user_error() {
        let wrapped = Error::new(UserError::new("Computer says no"));
        let classified = ScriptError::classify(wrapped);

        assert!(classified.is_user_error());
        assert_eq!(
            classified.as_user_error().map(UserError::message),
            Some("Computer says no")
        );
    }

    #[test]
    fn test_classify_ignores_lookalike_messages() {
        let lookalike = ScriptError::from(anyhow!("Computer says no"));
        assert!(!lookalike.is_user_error());
        assert_eq!(lookalike.to_string(), "Computer says no");
    }

    #[test]
    fn test_other_error_keeps_identity() {
        let io_error = IoError::new(NotFound, "missing script");
        let script_error = ScriptError::from(Error::new(io_error));

        let other = script_error.into_other().expect("should stay Other");
        let io_error = other.downcast_ref::<IoError>().expect("should be io::Error");
        assert_eq!(io_error.kind(), NotFound);
    }

    #[test]
    fn test_user_error_converts_directly() {
        let script_error: ScriptError = UserError::new("nope").into();
        assert!(script_error.is_user_error());
        assert!(script_error.into_other().is_none());
    }

    #[test]
    fn test_dom_and_ui_error_display() {
        let dom_error = DomError::hierarchy_request("node is an ancestor");
        assert_eq!(
            dom_error.to_string(),
            "Hierarchy request error: node is an ancestor"
        );

        let ui_error = UiError::UnknownSeverity("fatal".to_string());
        assert_eq!(ui_error.to_string(), "Unknown severity: fatal");
    }
}
