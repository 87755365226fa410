use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use showcase::app_list::{AppListController, AppListSnapshot, ControllerOptions};
use showcase::config::Config;
use showcase::gateway::RestGateway;
use showcase::{logging, report};

/// List showcased apps grouped by status.
#[derive(Debug, Parser)]
#[command(name = "showcase", version)]
struct Cli {
    /// Config file (default: ~/.config/showcase/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Record store URL, overrides config and environment.
    #[arg(long)]
    base_url: Option<String>,

    /// Collection to query.
    #[arg(long)]
    table: Option<String>,

    /// Print the list state as JSON.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::read_from(&path)?;
        config.apply_env_overrides();

        if let Some(base_url) = &self.base_url {
            config.store.base_url = base_url.clone();
        }
        if let Some(table) = &self.table {
            config.store.table = table.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    logging::init_tracing();
    let cli = Cli::parse();

    let config = cli.load_config()?;
    tracing::debug!(store = ?config.store, "Configuration loaded");

    let gateway = RestGateway::from_config(&config).context("Failed to build HTTP client")?;
    let controller = AppListController::new(
        Arc::new(gateway),
        ControllerOptions::from(&config.controller),
    );
    controller.refetch().await;

    let snapshot = controller.state();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", report::render(&snapshot));
    }

    // The error is already part of the printed output.
    Ok(exit_code(&snapshot))
}

fn exit_code(snapshot: &AppListSnapshot) -> ExitCode {
    if snapshot.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
