use papermind::APP_DIR_NAME;
use papermind::cli::{Cli, Commands};
use papermind::commands;
use papermind::error::PapermindError;
use papermind::logger;

use client_core::api::ApiClient;
use client_core::config::AppConfig;

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;
use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("Error: {error}");
        if let Some(hint) = error.hint() {
            eprintln!("{hint}");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), PapermindError> {
    let config_dir = app_dir(dirs::config_dir(), "config")?;
    let log_dir = app_dir(dirs::data_local_dir(), "data")?;

    create_dir_all(&log_dir).map_err(|e| PapermindError::App {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    logger::initialize(&log_dir)?;

    info!("PaperMind client starting");

    // Load .env before resolving config so PAPERMIND_BASE_URL can come
    // from it.
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded .env from {}", path.display());
    }

    let config = AppConfig::load(&config_dir)?;

    match cli.command {
        Commands::Config { set_url } => match set_url {
            Some(url) => commands::config::set_url(&config_dir, &url),
            None => {
                commands::config::show(&config, &config_dir);
                Ok(())
            }
        },
        command => {
            let base_url = cli
                .base_url
                .unwrap_or_else(|| config.resolve_base_url());
            debug!("Backend base URL: {base_url}");

            let client = ApiClient::new(&base_url)?;

            match command {
                Commands::Upload { path } => commands::documents::upload(&client, &path).await,
                Commands::List => commands::documents::list(&client).await,
                Commands::Show { id } => commands::documents::show(&client, id).await,
                Commands::Delete { id } => commands::documents::delete(&client, id).await,
                Commands::Ask { id, question } => {
                    commands::questions::ask(&client, id, &question).await
                }
                Commands::Status { watch } => {
                    if watch {
                        commands::status::watch(&client).await
                    } else {
                        commands::status::status(&client).await
                    }
                }
                Commands::Config { .. } => unreachable!("handled above"),
            }
        }
    }
}

fn app_dir(root: Option<PathBuf>, kind: &str) -> Result<PathBuf, PapermindError> {
    root.map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| PapermindError::App {
            message: format!("Cannot determine {kind} directory for this platform"),
            location: ErrorLocation::from(Location::caller()),
        })
}
