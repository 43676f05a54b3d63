use async_trait::async_trait;
use log::{ debug, info, warn };
use serde::de::DeserializeOwned;
use serde::{ Deserialize, Serialize };
use thiserror::Error;

use crate::config::ClientConfig;
use crate::errors::{ FactWatchError, FactWatchResult };
use crate::models::{ ClaimRecord, SourceItemRecord, VerificationRecord, VerificationResult };
use crate::traits::fact_check_api::{ FactCheckApi, HealthStatus };

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to build HTTP client: {0}")] ClientBuild(String),

    #[error("Network error: {0}")] NetworkError(String),

    #[error("Failed to parse API response: {0}")] ParseError(String),

    #[error("HTTP error: {status} - {message}")] HttpError {
        status: u16,
        message: String,
    },
}

impl From<ApiError> for FactWatchError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::ClientBuild(msg) => FactWatchError::System(msg),
            ApiError::NetworkError(msg) => FactWatchError::Network(msg),
            ApiError::ParseError(msg) => FactWatchError::Parse(msg),
            ApiError::HttpError { status, message } => FactWatchError::Http { status, message },
        }
    }
}

#[derive(Debug, Serialize)]
struct VerifyTextRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct QueueResponse {
    #[serde(default)]
    ok: bool,
}

/// `FactCheckApi` over HTTP/JSON.
///
/// The client carries no request timeout: a stalled request stays pending
/// until the transport gives up.
#[derive(Clone)]
pub struct HttpFactCheckClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpFactCheckClient {
    /// Create a client for the base URL in `config`
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http_client = reqwest::Client
            ::builder()
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self::with_client(config, http_client))
    }

    /// Create a client that sends requests through an existing `reqwest::Client`
    pub fn with_client(config: &ClientConfig, http_client: reqwest::Client) -> Self {
        info!("Fact-check API client targeting {}", config.base_url);
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        debug!("GET {}", url);
        let response = self.http_client
            .get(&url)
            .send().await
            .map_err(|e| network_error(&url, e))?;
        decode(&url, response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        debug!("POST {}", url);
        let response = self.http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send().await
            .map_err(|e| network_error(&url, e))?;
        decode(&url, response).await
    }
}

fn network_error(url: &str, e: reqwest::Error) -> ApiError {
    let error_msg = format!("request to {} failed: {}", url, e);
    warn!("{}", error_msg);
    if e.is_timeout() {
        warn!("Request timed out");
    }
    if e.is_connect() {
        warn!("Connection error - check that the service is running");
    }
    ApiError::NetworkError(error_msg)
}

async fn decode<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> Result<T, ApiError> {
    if !response.status().is_success() {
        let status = response.status().as_u16();
        let error_text = response
            .text().await
            .unwrap_or_else(|_| "Failed to get error message".to_string());

        warn!("API error from {}: HTTP {} - {}", url, status, error_text);
        return Err(ApiError::HttpError {
            status,
            message: error_text,
        });
    }

    let response_text = response.text().await.map_err(|e| {
        warn!("Failed to get response text: {}", e);
        ApiError::ParseError(e.to_string())
    })?;
    debug!("Response from {}: {} bytes", url, response_text.len());

    serde_json::from_str(&response_text).map_err(|e| {
        warn!("JSON parsing error for {}: {}", url, e);
        ApiError::ParseError(e.to_string())
    })
}

#[async_trait]
impl FactCheckApi for HttpFactCheckClient {
    async fn fetch_claims(&self) -> FactWatchResult<Vec<ClaimRecord>> {
        Ok(self.get_json("/claims").await?)
    }

    async fn fetch_verifications(&self) -> FactWatchResult<Vec<VerificationRecord>> {
        Ok(self.get_json("/verifications").await?)
    }

    async fn fetch_items(&self) -> FactWatchResult<Vec<SourceItemRecord>> {
        Ok(self.get_json("/items").await?)
    }

    async fn verify_text(&self, text: &str) -> FactWatchResult<VerificationResult> {
        Ok(self.post_json("/verify-text", &(VerifyTextRequest { text })).await?)
    }

    async fn health(&self) -> FactWatchResult<HealthStatus> {
        Ok(self.get_json("/health").await?)
    }

    async fn queue_for_manual(&self, claim_id: &str) -> FactWatchResult<()> {
        let claim_id = claim_id.trim();
        if claim_id.is_empty() {
            return Err(FactWatchError::InvalidInput("claim id must not be empty".to_string()));
        }
        let path = format!("/verify/{}", claim_id);
        let response: QueueResponse = self.post_json(&path, &serde_json::json!({})).await?;
        if response.ok {
            Ok(())
        } else {
            Err(FactWatchError::Parse(format!("service did not acknowledge claim {}", claim_id)))
        }
    }
}
