//! Reusable UI components.
//!
//! This module provides the page-level components the rest of the
//! application uses to surface messages to the user.

pub mod alert_banner;

pub use alert_banner::{AlertBanner, AlertBannerBuilder, MessageType, Severity, render_banner};
