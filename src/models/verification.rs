use std::fmt;

use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Deserializer, Serialize };

use crate::models::timestamp;
use crate::models::verdict::{ Category, Verdict };

/// Confidence score, always within `[0, 1]`.
///
/// Out-of-range inputs are clamped on construction; NaN and missing values
/// become zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() { Score(0.0) } else { Score(raw.clamp(0.0, 1.0)) }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Score as a whole percentage, rounding half up
    pub fn percent(&self) -> u8 {
        (self.0 * 100.0 + 0.5).floor() as u8
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<f64>::deserialize(deserializer)?;
        Ok(Score::new(raw.unwrap_or(0.0)))
    }
}

/// A cited source backing a verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(default, deserialize_with = "deserialize_link")]
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl EvidenceItem {
    /// Best available caption: title, then snippet, then the link itself.
    /// Empty when none of the three is present.
    pub fn label(&self) -> &str {
        [self.title.as_deref(), self.snippet.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .unwrap_or(self.link.as_str())
    }
}

/// A stored verification of a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationRecord {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_id: Option<String>,
    #[serde(default)]
    pub verdict: Verdict,
    #[serde(default)]
    pub score: Score,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub checked_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_evidence")]
    pub evidence: Vec<EvidenceItem>,
}

impl VerificationRecord {
    pub fn category(&self) -> Category {
        self.verdict.category()
    }

    /// The first `limit` evidence items, in source order
    pub fn evidence_preview(&self, limit: usize) -> &[EvidenceItem] {
        &self.evidence[..self.evidence.len().min(limit)]
    }
}

/// Outcome of an ad-hoc text verification. Never merged into the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    #[serde(default)]
    pub verdict: Verdict,
    #[serde(default)]
    pub score: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub reasons: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_evidence")]
    pub evidence: Vec<EvidenceItem>,
}

impl VerificationResult {
    pub fn category(&self) -> Category {
        self.verdict.category()
    }
}

// The service sends `null` for empty lists on some records.
fn deserialize_evidence<'de, D>(deserializer: D) -> Result<Vec<EvidenceItem>, D::Error>
    where D: Deserializer<'de>
{
    Ok(Option::<Vec<EvidenceItem>>::deserialize(deserializer)?.unwrap_or_default())
}

// Search hits without a URL are stored with a null link.
fn deserialize_link<'de, D>(deserializer: D) -> Result<String, D::Error>
    where D: Deserializer<'de>
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where D: Deserializer<'de>
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
