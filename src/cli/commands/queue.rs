use anyhow::Result;
use std::sync::Arc;

use crate::cli::ui;
use factwatch::traits::FactCheckApi;

/// Manual review command
pub async fn execute(api: Arc<dyn FactCheckApi>, claim_id: &str) -> Result<()> {
    api.queue_for_manual(claim_id).await?;
    ui::print_success(&format!("Claim {} queued for manual verification", claim_id.trim()));
    Ok(())
}
