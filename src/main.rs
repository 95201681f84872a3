//! Alert banner demo.
//!
//! Renders banners into a fresh in-memory page and prints the resulting
//! body markup. With arguments, `alert-banner <error|warning> <message...>`
//! renders a single banner; without, it shows a warning followed by a user
//! error raised through the handler.

use std::{env::args, rc::Rc};

use {anyhow::Result, tracing::info};

use alert_banner::{
    AlertBanner, Document, ScriptError, Severity, TracingSink, UserError, UserErrorHandler,
    config::SettingsManager, error::ResultExt, logging::init_logging,
};

fn main() -> Result<()> {
    init_logging();

    let settings_manager = SettingsManager::new().add_context("Failed to load alert settings")?;
    let settings = settings_manager.get_settings().clone();
    info!(
        "Using alert settings from {:?}",
        settings_manager.get_config_path()
    );

    let document = Document::new();
    let body = document.body();
    let cli_args: Vec<String> = args().skip(1).collect();

    if let Some((severity, message)) = cli_args.split_first() {
        let severity: Severity = severity.parse()?;
        AlertBanner::builder(message.join(" "))
            .severity(severity)
            .settings(settings)
            .render(&body, &TracingSink);
    } else {
        AlertBanner::builder("The runtime is still loading, output may be delayed")
            .severity(Severity::Warning)
            .settings(settings.clone())
            .render(&body, &TracingSink);

        let handler =
            UserErrorHandler::new(body.clone(), Rc::new(TracingSink)).with_settings(settings);
        handler.run(|| -> Result<(), ScriptError> {
            Err(UserError::new("The script tag must have a src or inline code").into())
        })?;
    }

    println!("{}", document.body_html());
    Ok(())
}
