use anyhow::Result;
use clap::{Parser, Subcommand};

use sisgefi::cli::{handle_committee_command, handle_movement_command, handle_user_command};
use sisgefi::config::{paths::SisgefiPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "sisgefi",
    version,
    about = "Committee finance snapshot toolkit",
    long_about = "SISGEFI takes JSON snapshots of users, committees and financial \
                  movements and lets you search, filter, sort, summarize and export \
                  them from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// User directory commands
    #[command(subcommand, alias = "usuarios")]
    Users(sisgefi::cli::UserCommands),

    /// Committee roster commands
    #[command(subcommand, alias = "comites")]
    Committees(sisgefi::cli::CommitteeCommands),

    /// Movement log commands
    #[command(subcommand, alias = "movimientos")]
    Movements(sisgefi::cli::MovementCommands),

    /// Create the config and exports directories and write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SisgefiPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Users(cmd)) => {
            handle_user_command(&paths, &settings, cmd)?;
        }
        Some(Commands::Committees(cmd)) => {
            handle_committee_command(&paths, &settings, cmd)?;
        }
        Some(Commands::Movements(cmd)) => {
            handle_movement_command(&paths, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing SISGEFI at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("SISGEFI Configuration");
            println!("=====================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
        None => {
            println!("SISGEFI - Committee finance snapshot toolkit");
            println!();
            println!("Run 'sisgefi --help' for usage information.");
        }
    }

    Ok(())
}
