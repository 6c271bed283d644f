use agentchat_tui::Cli;
use agentchat_tui::run_main;
use clap::Parser;
use color_eyre::eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    run_main(cli).await
}
