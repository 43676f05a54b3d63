use std::sync::Arc;
use std::time::Duration;

use anyhow::{ Context, Result };
use clap::Parser;
use log::{ debug, info };

use factwatch::config::ClientConfig;
use factwatch::traits::FactCheckApi;
use factwatch::HttpFactCheckClient;

mod cli;
use cli::{ Commands, FactWatchCli };

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse the command line arguments
    let cli = FactWatchCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    if let Err(e) = run(cli).await {
        cli::ui::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: FactWatchCli) -> Result<()> {
    // A missing .env file is fine
    match dotenv::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }

    // Resolve configuration once; everything below receives it explicitly
    let mut config = ClientConfig::resolve(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url.clone())?;
    }
    if let Commands::Watch { period_ms: Some(ms), .. } = &cli.command {
        config = config.with_poll_period(Duration::from_millis(*ms))?;
    }
    info!("Using API at {}", config.base_url);

    let api: Arc<dyn FactCheckApi> = Arc::new(HttpFactCheckClient::new(&config)?);

    // Handle commands
    match &cli.command {
        Commands::Watch { once, .. } => {
            cli::commands::watch::execute(api, &config, *once, cli.output_format).await
        }
        Commands::Verify { text } => {
            cli::commands::verify::execute(api, text.as_deref(), cli.output_format).await
        }
        Commands::Health => cli::commands::health::execute(api).await,
        Commands::Queue { claim_id } => cli::commands::queue::execute(api, claim_id).await,
    }
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
