//! Terminal chat UI for interacting with an AI agent.
//!
//! The interesting subsystem here is skills selection: the composer
//! recognizes the `/skills` trigger command, the app mounts a
//! [`bottom_pane::SkillsSelectionView`] in the bottom pane, and the view
//! resolves to exactly one `SkillsSelected` or `SkillsCancelled` event.

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

mod app;
mod app_event;
mod app_event_sender;
mod bottom_pane;
mod chatwidget;
mod colors;
mod components;
mod composer;
mod slash_command;
mod text_formatting;
mod ui_interaction;

use agentchat_core::Settings;

#[derive(Debug, Parser)]
#[command(name = "agentchat", about = "Terminal chat for AI agents")]
pub struct Cli {
    /// Agent identifier used to resolve the user skills directory.
    #[arg(long, default_value = "agent")]
    pub agent: String,
}

pub async fn run_main(cli: Cli) -> Result<()> {
    let settings = Settings::new()?;
    let _log_guard = init_logging(&settings)?;

    app::run_app(settings, cli.agent).await
}

/// Route tracing to a file under the app home; the terminal belongs to the
/// UI while we run.
fn init_logging(settings: &Settings) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = settings.log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let appender = tracing_appender::rolling::never(log_dir, "agentchat.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("AGENTCHAT_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
