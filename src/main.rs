use anyhow::Context;
use clap::{Parser, Subcommand};
use rinkview::config;
use rinkview::{commands, Client, DataProvider};
use tracing_subscriber::EnvFilter;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "rinkview")]
#[command(about = "NHL standings, scores, games and team rosters", version)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Serve fixture data instead of calling the API
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display current standings grouped by division
    Standings,
    /// Display scores for a day with period-by-period breakdown
    Scores {
        /// Date in YYYY-MM-DD format (optional, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Display goals, status and period scores for a game
    Game {
        /// Game ID (e.g., 2024020001)
        game_id: u64,
    },
    /// Display a team's roster, top scorers and schedule
    Team {
        /// Team abbreviation (e.g., BOS)
        abbrev: String,

        /// Season in 8-digit form, e.g. 20242025 (defaults to the current season)
        #[arg(short, long)]
        season: Option<String>,

        /// Number of top scorers to show
        #[arg(short, long)]
        top: Option<usize>,
    },
    /// Display the season in progress on a date
    Season {
        /// Date in YYYY-MM-DD format (optional, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("api_base_url: {}", cfg.api_base_url);
    println!("proxy_prefix: {}", cfg.proxy_prefix.as_deref().unwrap_or("(none)"));
    println!("request_timeout_secs: {}", cfg.request_timeout_secs);
    println!("top_scorer_limit: {}", cfg.top_scorer_limit);
    println!("time_format: {}", cfg.time_format);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

#[cfg(feature = "development")]
fn create_provider(cli: &Cli, config: &config::Config) -> anyhow::Result<Box<dyn DataProvider>> {
    if cli.mock {
        return Ok(Box::new(rinkview::dev::MockClient::new()));
    }
    create_client(config)
}

#[cfg(not(feature = "development"))]
fn create_provider(_cli: &Cli, config: &config::Config) -> anyhow::Result<Box<dyn DataProvider>> {
    create_client(config)
}

fn create_client(config: &config::Config) -> anyhow::Result<Box<dyn DataProvider>> {
    let client = Client::new(config.client_settings()).context("Failed to create NHL API client")?;
    Ok(Box::new(client))
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(cli: &Cli, config: &config::Config) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Config => {
            handle_config_command();
            Ok(())
        }
        Commands::Season { date } => commands::season::run(date.clone()),
        command => {
            let client = create_provider(cli, config)?;
            let client = client.as_ref();
            match command {
                Commands::Standings => commands::standings::run(client, config).await,
                Commands::Scores { date } => {
                    commands::scores::run(client, date.clone(), config).await
                }
                Commands::Game { game_id } => commands::game::run(client, *game_id, config).await,
                Commands::Team { abbrev, season, top } => {
                    commands::team::run(client, abbrev, season.clone(), *top, config).await
                }
                Commands::Config | Commands::Season { .. } => Ok(()),
            }
        }
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    if let Err(e) = execute_command(&cli, &config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
