use crate::cli::{Cli, Commands};
use crate::client::CliClient;
use crate::error::Result;
use clap::Parser;
mod cli;
mod client;
mod commands;
mod error;

#[tokio::main]
async fn main() {
    if let Err(err) = try_main().await {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }
}

async fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let cli_client = CliClient::new(&cli.server);

    match cli.command {
        Commands::Suggest { text, file, json } => {
            commands::suggest::handle(&cli_client, text, file, json).await?
        }
    }

    Ok(())
}
