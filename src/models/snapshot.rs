use chrono::{ DateTime, Utc };
use serde::Serialize;

use crate::errors::ErrorInfo;
use crate::models::claim::ClaimRecord;
use crate::models::source_item::SourceItemRecord;
use crate::models::verification::VerificationRecord;

/// The merged, read-only view produced by the polling synchronizer.
///
/// A snapshot is never mutated in place. Each transition builds a new value,
/// so the three lists always come from the same tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub claims: Vec<ClaimRecord>,
    pub verifications: Vec<VerificationRecord>,
    pub items: Vec<SourceItemRecord>,
    /// Completion time of the last successful tick; `None` until one succeeds
    pub last_sync_at: Option<DateTime<Utc>>,
    pub last_error: Option<ErrorInfo>,
}

impl Snapshot {
    /// Snapshot for a tick where all three reads succeeded
    pub fn synced(
        claims: Vec<ClaimRecord>,
        verifications: Vec<VerificationRecord>,
        items: Vec<SourceItemRecord>,
        at: DateTime<Utc>
    ) -> Self {
        Self {
            claims,
            verifications,
            items,
            last_sync_at: Some(at),
            last_error: None,
        }
    }

    /// Copy of this snapshot with the lists and sync time kept and the error replaced
    pub fn with_error(&self, error: ErrorInfo) -> Self {
        Self {
            last_error: Some(error),
            ..self.clone()
        }
    }

    pub fn counts(&self) -> SnapshotCounts {
        SnapshotCounts {
            claims: self.claims.len(),
            verifications: self.verifications.len(),
            items: self.items.len(),
        }
    }
}

/// Sizes of the three lists, used for the dashboard header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnapshotCounts {
    pub claims: usize,
    pub verifications: usize,
    pub items: usize,
}
