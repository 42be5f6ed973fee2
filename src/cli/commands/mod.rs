//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `enrich`: Enriching record files and one-off lookups
//! - `config`: Writing the default config file

mod config;
mod enrich;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

pub use config::cmd_init_config;
pub use enrich::{cmd_enrich, cmd_lookup};

/// Song Enricher CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file location (defaults to the OS config directory)
    #[arg(long, global = true, env = "SONG_ENRICHER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Enrich track records from a JSON file
    Enrich {
        /// JSON file with one track object or an array of them ("-" for stdin)
        input: PathBuf,
        /// Write enriched records here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Skip the YouTube Music lookup
        #[arg(long)]
        no_ytmusic: bool,
    },
    /// Look up a single song and print what the providers know
    Lookup {
        /// Artist name
        #[arg(short, long)]
        artist: String,
        /// Song title
        #[arg(short, long)]
        title: String,
        /// Skip the YouTube Music lookup
        #[arg(long)]
        no_ytmusic: bool,
        /// Print the enriched record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a config file with default settings
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config_path = cli.config.as_deref();

    match &cli.command {
        Commands::Enrich {
            input,
            output,
            no_ytmusic,
        } => {
            let rt = Runtime::new()?;
            cmd_enrich(&rt, config_path, input, output.as_deref(), *no_ytmusic)
        }
        Commands::Lookup {
            artist,
            title,
            no_ytmusic,
            json,
        } => {
            let rt = Runtime::new()?;
            cmd_lookup(&rt, config_path, artist, title, *no_ytmusic, *json)
        }
        Commands::InitConfig { force } => cmd_init_config(config_path, *force),
    }
}
