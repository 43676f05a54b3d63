pub mod verdict;
pub mod claim;
pub mod verification;
pub mod source_item;
pub mod snapshot;
pub mod timestamp;

// Re-export common model types
pub use verdict::{ classify, Category, Verdict };
pub use claim::ClaimRecord;
pub use verification::{ EvidenceItem, Score, VerificationRecord, VerificationResult };
pub use source_item::SourceItemRecord;
pub use snapshot::{ Snapshot, SnapshotCounts };
