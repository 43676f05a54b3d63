use anyhow::{ bail, Result };
use std::sync::Arc;

use crate::cli::ui;
use factwatch::traits::FactCheckApi;

/// Service health command
pub async fn execute(api: Arc<dyn FactCheckApi>) -> Result<()> {
    let health = api.health().await?;
    if health.is_ok() {
        ui::print_success("Service is healthy");
        Ok(())
    } else {
        bail!("Service reported status '{}'", health.status)
    }
}
