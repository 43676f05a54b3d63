use std::fmt;

use serde::{ Deserialize, Deserializer, Serialize, Serializer };

/// Verdict tag attached to claims and verifications.
///
/// Any tag the client does not recognise (including a missing or non-string
/// value) collapses to `Unknown`, so decoding a verdict never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Verdict {
    True,
    False,
    Mixture,
    #[default]
    Unknown,
}

/// Display category a verdict maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Negative,
    Positive,
    Uncertain,
    Unknown,
}

impl Verdict {
    /// Parse a wire tag. Matching is exact: `"True"` is not `"true"`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "true" => Verdict::True,
            "false" => Verdict::False,
            "mixture" => Verdict::Mixture,
            _ => Verdict::Unknown,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Verdict::True => "true",
            Verdict::False => "false",
            Verdict::Mixture => "mixture",
            Verdict::Unknown => "unknown",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Verdict::True => Category::Positive,
            Verdict::False => Category::Negative,
            Verdict::Mixture => Category::Uncertain,
            Verdict::Unknown => Category::Unknown,
        }
    }
}

/// Map a raw status/verdict tag to its display category. Total over all inputs.
pub fn classify(tag: &str) -> Category {
    Verdict::from_tag(tag).category()
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag().to_uppercase())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Negative => write!(f, "negative"),
            Category::Positive => write!(f, "positive"),
            Category::Uncertain => write!(f, "uncertain"),
            Category::Unknown => write!(f, "unknown"),
        }
    }
}

impl Serialize for Verdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for Verdict {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(serde_json::Value::String(tag)) => Verdict::from_tag(&tag),
            _ => Verdict::Unknown,
        })
    }
}
