//! # Command Line Interface
//!
//! Starts the admin server and offers database management commands.

use crate::api::{start_api_server, ApiState};
use crate::config::{load_config, AppConfig, DatabaseConfig};
use crate::observability::{init_logging, log_config_info};
use crate::storage::{create_pool, list_migrations, run_migrations, MigrationInfo};
use crate::{APP_NAME, VERSION};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "repology-admin")]
#[command(about = "Repology administrative service")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path (TOML, YAML or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Database URL override
    #[arg(long)]
    pub database_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the admin server
    Serve {
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,
    },

    /// Database management commands
    Database {
        #[command(subcommand)]
        command: DatabaseCommands,
    },
}

#[derive(Subcommand)]
pub enum DatabaseCommands {
    /// Run pending migrations
    Migrate,

    /// Show migration status
    Status,
}

/// Run CLI commands
pub async fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if cli.verbose {
        config.observability.log_level = "debug".to_string();
    }
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }

    init_logging(&config.observability)?;

    match cli.command {
        Some(Commands::Serve { port, host }) => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            serve(config).await?;
        }

        Some(Commands::Database { command }) => {
            handle_database_command(command, &config.database).await?;
        }

        None => serve(config).await?,
    }

    Ok(())
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!(app_name = APP_NAME, version = VERSION, "Starting repology admin server");
    log_config_info(&config);

    let pool = create_pool(&config.database).await?;
    let server = config.server.clone();
    let state = ApiState::with_database(config, pool.clone());

    start_api_server(&server, state).await?;
    pool.close().await;
    Ok(())
}

/// Handle database management commands
async fn handle_database_command(
    command: DatabaseCommands,
    config: &DatabaseConfig,
) -> anyhow::Result<()> {
    let config = DatabaseConfig { auto_migrate: false, ..config.clone() };
    let pool = create_pool(&config).await?;

    match command {
        DatabaseCommands::Migrate => {
            println!("Running database migrations...");
            run_migrations(&pool).await?;
            println!("Migrations completed successfully");
        }

        DatabaseCommands::Status => {
            let migrations = list_migrations(&pool).await?;
            print_migrations_table(&migrations);
            if migrations.iter().any(|m| !m.applied) {
                println!("Database schema has pending migrations");
                process::exit(1);
            }
            println!("Database schema is up to date");
        }
    }

    Ok(())
}

/// Print migrations in a formatted table
fn print_migrations_table(migrations: &[MigrationInfo]) {
    println!();
    println!("{:<16} {:<50} {:<8}", "Version", "Description", "Applied");
    println!("{}", "-".repeat(76));

    for migration in migrations {
        println!(
            "{:<16} {:<50} {:<8}",
            migration.version,
            truncate_string(&migration.description, 48),
            if migration.applied { "yes" } else { "no" }
        );
    }
    println!();
}

/// Truncate string to fit in table column
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
