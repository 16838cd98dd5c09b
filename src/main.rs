use clap::Parser;

use roster_rs::cli::{
    Cli, CommandOutcome, execute_command, init_logger_from_settings, load_and_merge_config,
};
use roster_rs::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (settings, environment) = load_and_merge_config(&cli)?;
    init_logger_from_settings(&settings)?;

    match execute_command(&cli, settings.clone()).await? {
        CommandOutcome::Exit => Ok(()),
        CommandOutcome::StartServer => Server::new(settings, environment).run().await,
    }
}
