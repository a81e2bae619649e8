use clap::Parser;
use clap::Subcommand;
use rl_core::server::default_config::DEFAULT_SERVER_BACKEND_URL;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the redline server
    #[arg(short, long, global = true, default_value = DEFAULT_SERVER_BACKEND_URL)]
    pub server: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask for three improvement suggestions. Reads stdin when neither TEXT nor --file is given.
    Suggest {
        #[arg()]
        text: Option<String>,
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Print the raw JSON array
        #[arg(long)]
        json: bool,
    },
}
