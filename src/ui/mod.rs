//! User-facing error reporting for script pages.
//!
//! This module provides the alert banner component and the handler that
//! turns user errors raised by callbacks into banners.


pub mod components;
pub mod handler;

pub use {
    components::{AlertBanner, AlertBannerBuilder, MessageType, Severity, render_banner},
    handler::{UserErrorHandler, with_user_error_handler},
};
