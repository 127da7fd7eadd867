//! Main entry point for the DevForum CLI.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use dotenv::dotenv;
use shared::config::ClientConfig;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{profile::ProfileCommand, session::SessionCommand, theme::ThemeCommand};

/// DevForum CLI
#[derive(Parser)]
#[command(name = "devforum", version)]
#[command(about = "Command-line client for the DevForum API", long_about = None)]
struct Cli {
    /// Path to the configuration file (optional)
    #[arg(
        long,
        short,
        global = true,
        help = "Path to the configuration file (e.g., devforum.yaml or devforum.json). If not provided, defaults and DEVFORUM_* variables are used."
    )]
    config: Option<PathBuf>,

    /// Path to the local storage file (optional)
    #[arg(
        long,
        global = true,
        help = "Path to the JSON file holding the session token and theme preference. Defaults to <config dir>/devforum/storage.json."
    )]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Subcommands for the DevForum CLI
#[derive(Subcommand)]
enum Commands {
    /// Log in, register, or inspect the current session
    #[command(subcommand)]
    Session(SessionCommand),

    /// Manage the signed-in user's profile
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Show or change the stored theme preference
    #[command(subcommand)]
    Theme(ThemeCommand),

    /// Generate shell completion scripts for the CLI
    Completion {
        /// The shell type for which to generate the completion script
        #[arg(long, short, value_enum)]
        shell: Shell,
    },

    /// Print a configuration file with the resolved settings
    Config {
        /// Format of the configuration file to generate (yaml or json). Defaults to yaml.
        #[arg(long, short, default_value = "yaml")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let config = ClientConfig::load_config(cli.config.clone()).with_context(|| match &cli.config {
        Some(path) => format!("failed to load configuration from {}", path.display()),
        None => "failed to load configuration".to_string(),
    })?;
    init_tracing(&config.log_level);
    debug!(api_url = %config.api_url, "resolved configuration");

    let storage = cli.storage.unwrap_or_else(commands::storage_path);

    match cli.command {
        Commands::Session(command) => commands::session::run(command, config, &storage).await?,
        Commands::Profile(command) => commands::profile::run(command, config, &storage).await?,
        Commands::Theme(command) => commands::theme::run(&command, config, &storage)?,
        Commands::Completion { shell } => commands::completion::generate_completion(shell),
        Commands::Config { format } => commands::config::generate_config(&config, &format)?,
    }

    Ok(())
}

/// Log to stderr so command output on stdout stays scriptable.
fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}
