use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Serialize };

use crate::models::timestamp;
use crate::models::verdict::{ Category, Verdict };

/// A statement extracted by the service, carrying its current status verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub status: Verdict,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub extracted_at: Option<DateTime<Utc>>,
}

impl ClaimRecord {
    pub fn category(&self) -> Category {
        self.status.category()
    }

    /// Trailing six characters of the id, as shown on the dashboard
    pub fn short_id(&self) -> &str {
        let start = self.id
            .char_indices()
            .rev()
            .nth(5)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &self.id[start..]
    }
}
