use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use wifi_button::cli;

#[derive(Parser)]
#[command(name = "wifi-button")]
#[command(about = "Configuration portal for the WiFi Button device")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the configuration portal
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = 8080)]
        port: u16,

        /// Directory holding config.toml and staged firmware
        /// (default: ~/.wifi-button)
        #[arg(long)]
        config_dir: Option<PathBuf>,

        /// Root of the device filesystem served back out and written
        /// to by uploads (default: <config-dir>/data)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Enable debug logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the stored device configuration
    Status {
        /// Directory holding config.toml (default: ~/.wifi-button)
        #[arg(long)]
        config_dir: Option<PathBuf>,
    },

    /// Remove the stored device configuration
    Reset {
        /// Directory holding config.toml (default: ~/.wifi-button)
        #[arg(long)]
        config_dir: Option<PathBuf>,

        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            config_dir,
            data_dir,
            verbose,
        } => cli::serve::execute(port, config_dir, data_dir, verbose),
        Commands::Status { config_dir } => cli::status::execute(config_dir),
        Commands::Reset { config_dir, force } => cli::reset::execute(config_dir, force),
    }
}
