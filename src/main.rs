mod cli_messages;
mod config;
mod consts;
mod dataset;
mod locale;
mod logging;
mod metrics;
mod session;
mod ui;
mod views;

use crate::config::{Config, get_config_path};
use crate::session::{run_summary_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Path to the configuration file. Defaults to ~/.weather-dashboard/config.json
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive weather dashboard
    Start {
        /// Directory holding the hourly and daily Feather files
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,

        /// Paint a dark background behind the dashboard
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Print the dashboard contents as text and exit
    Summary {
        /// Directory holding the hourly and daily Feather files
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,
    },
    /// Write the default configuration file
    InitConfig,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = match args.config {
        Some(path) => path,
        None => get_config_path()?,
    };

    match args.command {
        Command::Start {
            data_dir,
            with_background,
        } => {
            let session = setup_session(&config_path, data_dir, with_background)?;
            run_tui_mode(session)
        }
        Command::Summary { data_dir } => {
            let session = setup_session(&config_path, data_dir, false)?;
            run_summary_mode(session)
        }
        Command::InitConfig => init_config(&config_path),
    }
}

/// Writes the default configuration unless a file already exists.
fn init_config(config_path: &std::path::Path) -> Result<(), Box<dyn Error>> {
    if config_path.exists() {
        crate::print_cmd_info!(
            "Config exists",
            "{} was left unchanged",
            config_path.display()
        );
        return Ok(());
    }
    Config::default()
        .save(config_path)
        .map_err(|e| format!("Failed to save config: {}", e))?;
    crate::print_cmd_success!("Config written", "{}", config_path.display());
    Ok(())
}
