//! Jobly CLI - Composition root
//!
//! Loads configuration, sets up logging, opens the store and dispatches to
//! the repository-backed subcommands.

mod commands;
mod settings;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use jobly_core::AppError;
use jobly_infra_sqlite::{create_pool, run_migrations, SqliteCompanyRepository, SqliteJobRepository};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{run_company_command, run_job_command, CompanyCommand, JobCommand};
use settings::AppConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "jobly")]
#[command(about = "Jobly job-board store", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Database URL (overrides JOBLY_DATABASE_URL and jobly.toml)
    #[arg(long)]
    database_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending schema migrations
    Migrate,

    /// Manage companies
    Companies {
        #[command(subcommand)]
        command: CompanyCommand,
    },

    /// Manage jobs
    Jobs {
        #[command(subcommand)]
        command: JobCommand,
    },
}

/// Logs go to stderr so command output on stdout stays machine-readable.
fn init_logging(log_format: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn,jobly=info,jobly_infra_sqlite=info"))
        .context("Failed to create env filter")?;

    match log_format {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            // Development: human-readable
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load configuration
    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }

    // 2. Initialize logging
    init_logging(&config.log_format)?;
    info!("Jobly v{} starting...", VERSION);
    info!(database_url = %config.database_url, "Initializing database...");

    // 3. Initialize database
    let pool = create_pool(&config.database_url, config.max_connections)
        .await
        .context("DB pool creation failed")?;
    run_migrations(&pool).await.context("Migration failed")?;

    // 4. Dispatch
    let outcome = match cli.command {
        Commands::Migrate => {
            println!("{}", "✓ Schema is up to date".green().bold());
            Ok(())
        }
        Commands::Companies { command } => {
            let repo = SqliteCompanyRepository::new(pool.clone());
            run_company_command(&repo, command).await
        }
        Commands::Jobs { command } => {
            let repo = SqliteJobRepository::new(pool.clone());
            run_job_command(&repo, command).await
        }
    };

    pool.close().await;

    if let Err(err) = outcome {
        // Bad input or unknown record: one line on stderr, exit code 2
        if let Some(app_err) = err.downcast_ref::<AppError>() {
            if app_err.is_client_error() {
                eprintln!("{}", format!("✗ {}", app_err).red().bold());
                std::process::exit(2);
            }
        }
        return Err(err);
    }

    Ok(())
}
