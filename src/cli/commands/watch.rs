use anyhow::{ Context, Result };
use log::{ info, warn };
use std::sync::Arc;

use crate::cli::{ ui, OutputFormat };
use factwatch::config::ClientConfig;
use factwatch::errors::RecoverableError;
use factwatch::models::Snapshot;
use factwatch::traits::FactCheckApi;
use factwatch::PollingSynchronizer;

/// Dashboard command: poll until interrupted, redrawing on every new snapshot
pub async fn execute(
    api: Arc<dyn FactCheckApi>,
    config: &ClientConfig,
    once: bool,
    format: OutputFormat
) -> Result<()> {
    let synchronizer = PollingSynchronizer::new(api, config);
    let mut handle = synchronizer.handle();

    if once {
        if let Err(err) = synchronizer.sync_now().await {
            report_tick_failure(&err);
        }
        emit(&handle.current(), handle.is_loading(), config, format)?;
        return Ok(());
    }

    synchronizer.start().context("Failed to start polling")?;
    ui::print_info(&format!("Polling {} every {} ms (Ctrl-C to quit)", config.base_url, config.poll_period.as_millis()));

    loop {
        let snapshot = tokio::select! {
            changed = handle.changed() => changed?,
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl-C")?;
                info!("Interrupted; stopping synchronizer");
                synchronizer.stop();
                break;
            }
        };
        emit(&snapshot, handle.is_loading(), config, format)?;
    }

    Ok(())
}

fn report_tick_failure(err: &factwatch::FactWatchError) {
    if err.is_recoverable() {
        warn!("Sync failed: {}", err);
        if let Some(hint) = err.recovery_strategy() {
            ui::print_warning(&hint);
        }
    } else {
        ui::print_error(&err.to_string());
    }
}

fn emit(snapshot: &Snapshot, loading: bool, config: &ClientConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => ui::render_dashboard(snapshot, loading, config.evidence_preview),
        OutputFormat::Json => println!("{}", serde_json::to_string(snapshot)?),
    }
    Ok(())
}
