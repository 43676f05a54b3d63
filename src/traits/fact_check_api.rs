use async_trait::async_trait;
use serde::{ Deserialize, Serialize };

use crate::errors::FactWatchResult;
use crate::models::{ ClaimRecord, SourceItemRecord, VerificationRecord, VerificationResult };

/// Access to the remote fact-checking service.
///
/// Every call suspends until the service answers or the transport fails;
/// implementations add no timeout or retry of their own.
#[async_trait]
pub trait FactCheckApi: Send + Sync {
    /// `GET /claims`
    async fn fetch_claims(&self) -> FactWatchResult<Vec<ClaimRecord>>;

    /// `GET /verifications`
    async fn fetch_verifications(&self) -> FactWatchResult<Vec<VerificationRecord>>;

    /// `GET /items`
    async fn fetch_items(&self) -> FactWatchResult<Vec<SourceItemRecord>>;

    /// `POST /verify-text` with `{"text": ...}`
    async fn verify_text(&self, text: &str) -> FactWatchResult<VerificationResult>;

    /// `GET /health`
    async fn health(&self) -> FactWatchResult<HealthStatus>;

    /// `POST /verify/{claim_id}`: ask the service to queue a stored claim for manual review
    async fn queue_for_manual(&self, claim_id: &str) -> FactWatchResult<()>;
}

/// Body returned by the health endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
