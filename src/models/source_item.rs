use serde::{ Deserialize, Serialize };

/// A raw item fetched by the service. Its contents are opaque to the client;
/// only the number of items is consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceItemRecord(pub serde_json::Value);
