use anyhow::Context;
use clap::Parser;
use shelter_cli::utils::logger;
use shelter_cli::{CliConfig, MenuSession, Shelter};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting shelter-cli");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut shelter = Shelter::new();
    let mut session = MenuSession::new(stdin.lock(), stdout.lock());

    session
        .run(&mut shelter)
        .context("menu session ended abnormally")?;

    tracing::info!(
        "Session finished, discarding {} in-memory record(s)",
        shelter.animals().len()
    );

    Ok(())
}
