mod cli_messages;
mod config;
mod consts;
mod environment;
mod events;
mod logging;
mod network;
mod runtime;
mod session;
mod stats;
mod stats_api;
mod ui;
mod workers;

use crate::config::{Config, get_config_path};
use crate::logging::init_console_logger;
use crate::session::{print_view, run_headless_mode, run_tui_mode, setup_session};
use crate::stats::FetchOutcome;
use crate::stats_api::{StatsApi, StatsClient};
use crate::ui::dashboard::{DashboardView, render_stats};
use crate::workers::fetcher::StatsFetcher;
use clap::{Parser, Subcommand};
use std::error::Error;

/// Environment variable selecting a built-in backend (`local` or `lan`)
const ENVIRONMENT_VAR: &str = "LOAN_DASHBOARD_ENVIRONMENT";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard refresh loop
    Start {
        /// Base URL of the loan-management backend
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Seconds between automatic refreshes
        #[arg(long, value_name = "SECS")]
        interval_secs: Option<u64>,

        /// Print events and stats to the console instead of drawing the dashboard
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Paint the dashboard background
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,

        /// Remember the given URL and interval in the config file
        #[arg(long, default_value_t = false)]
        save: bool,
    },
    /// Run one fetch cycle and print the rendered stats
    Fetch {
        /// Base URL of the loan-management backend
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Print the stats as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Check that the backend is up
    Health {
        /// Base URL of the loan-management backend
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Delete the saved configuration file
    ResetConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let env_var = std::env::var(ENVIRONMENT_VAR).ok();
    let config_path = get_config_path()?;
    let args = Args::parse();

    match args.command {
        Command::Start {
            api_url,
            interval_secs,
            headless,
            with_background,
            save,
        } => {
            let mut config = Config::load_or_default(&config_path)?;
            let environment = config.resolve_environment(api_url.clone(), env_var.as_deref());
            let refresh_interval = config.resolve_refresh_interval(interval_secs);
            let with_background = with_background || config.with_background_color;

            if save {
                config.api_url = api_url.or(config.api_url);
                config.refresh_interval_secs = interval_secs.or(config.refresh_interval_secs);
                config.with_background_color = with_background;
                config
                    .save(&config_path)
                    .map_err(|e| format!("Failed to save config: {}", e))?;
                crate::print_cmd_info!("Config saved", "{}", config_path.display());
            }

            let session = setup_session(environment, refresh_interval).await?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::Fetch { api_url, json } => {
            init_console_logger();
            let config = Config::load_or_default(&config_path)?;
            let environment = config.resolve_environment(api_url, env_var.as_deref());

            let fetcher = StatsFetcher::new(Box::new(StatsClient::new(environment)?));
            let outcome = fetcher.fetch_stats().await;
            if let FetchOutcome::Fallback { reason, .. } = &outcome {
                crate::print_cmd_warn!("Backend unavailable", "Showing fallback stats ({})", reason);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(outcome.stats())?);
            } else {
                let mut view = DashboardView::standard();
                render_stats(outcome.stats(), &mut view)?;
                print_view(&view);
            }
            Ok(())
        }
        Command::Health { api_url } => {
            init_console_logger();
            let config = Config::load_or_default(&config_path)?;
            let environment = config.resolve_environment(api_url, env_var.as_deref());
            let client = StatsClient::new(environment)?;

            match client.get_health().await {
                Ok(health) if health.is_healthy() => {
                    crate::print_cmd_success!(
                        "Backend healthy",
                        "{} at {}",
                        health.service.as_deref().unwrap_or("unknown service"),
                        client.environment().base_url()
                    );
                    Ok(())
                }
                Ok(health) => {
                    crate::print_cmd_error!("Backend unhealthy", health.status.as_str());
                    Err(format!("backend reported status '{}'", health.status).into())
                }
                Err(e) => {
                    crate::print_cmd_error!("Health check failed", e.to_string().as_str());
                    Err(e.into())
                }
            }
        }
        Command::ResetConfig => {
            println!("Removing saved dashboard configuration...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}
