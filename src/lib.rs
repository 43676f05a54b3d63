pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ ClientConfig, ConfigError };
pub use errors::{ ErrorInfo, ErrorKind, FactWatchError, FactWatchResult, RecoverableError };
pub use implementations::{
    controller::{ RequestState, SubmitOutcome, VerificationController },
    http_client::HttpFactCheckClient,
    synchronizer::{ PollingSynchronizer, SnapshotHandle },
};
pub use models::{
    verdict::{ classify, Category, Verdict },
    claim::ClaimRecord,
    verification::{ EvidenceItem, Score, VerificationRecord, VerificationResult },
    source_item::SourceItemRecord,
    snapshot::Snapshot,
};
pub use traits::{ FactCheckApi, HealthStatus };
