pub mod model_tests;

use std::sync::atomic::{ AtomicBool, AtomicUsize, Ordering };
use std::sync::{ Arc, Mutex };

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::errors::{ FactWatchError, FactWatchResult };
use crate::models::{
    ClaimRecord,
    Score,
    SourceItemRecord,
    Verdict,
    VerificationRecord,
    VerificationResult,
};
use crate::traits::fact_check_api::{ FactCheckApi, HealthStatus };

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn claim(id: &str, text: &str, status: Verdict) -> ClaimRecord {
    ClaimRecord {
        id: id.to_string(),
        text: text.to_string(),
        status,
        extracted_at: None,
    }
}

pub fn verification(id: &str, verdict: Verdict, score: f64) -> VerificationRecord {
    VerificationRecord {
        id: id.to_string(),
        claim_id: None,
        verdict,
        score: Score::new(score),
        checked_at: None,
        evidence: Vec::new(),
    }
}

pub fn item(n: u64) -> SourceItemRecord {
    SourceItemRecord(serde_json::json!({ "_id": n.to_string(), "title": format!("item {}", n) }))
}

pub fn result(verdict: Verdict, score: f64) -> VerificationResult {
    VerificationResult {
        verdict,
        score: Score::new(score),
        summary: None,
        reasons: Vec::new(),
        evidence: Vec::new(),
    }
}

/// A gate a fake call waits on until the test releases it
#[derive(Clone, Default)]
pub struct Gate {
    pub entered: Arc<Notify>,
    pub release: Arc<Notify>,
}

/// Scripted in-memory `FactCheckApi`
#[derive(Default)]
pub struct FakeApi {
    pub claims: Mutex<Vec<ClaimRecord>>,
    pub verifications: Mutex<Vec<VerificationRecord>>,
    pub items: Mutex<Vec<SourceItemRecord>>,
    pub fail_items: AtomicBool,
    pub claims_gate: Mutex<Option<Gate>>,

    pub verify_result: Mutex<Option<VerificationResult>>,
    pub verify_gate: Mutex<Option<Gate>>,
    pub verify_texts: Mutex<Vec<String>>,

    pub claim_calls: AtomicUsize,
    pub item_calls: AtomicUsize,
    pub verify_calls: AtomicUsize,
}

impl FakeApi {
    pub fn with_lists(
        claims: Vec<ClaimRecord>,
        verifications: Vec<VerificationRecord>,
        items: Vec<SourceItemRecord>
    ) -> Self {
        let api = FakeApi::default();
        *api.claims.lock().unwrap() = claims;
        *api.verifications.lock().unwrap() = verifications;
        *api.items.lock().unwrap() = items;
        api
    }

    pub fn set_claims_gate(&self) -> Gate {
        let gate = Gate::default();
        *self.claims_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn set_verify_gate(&self) -> Gate {
        let gate = Gate::default();
        *self.verify_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn claim_calls(&self) -> usize {
        self.claim_calls.load(Ordering::SeqCst)
    }

    pub fn verify_calls(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }
}

async fn pass(gate: Option<Gate>) {
    if let Some(gate) = gate {
        gate.entered.notify_one();
        gate.release.notified().await;
    }
}

#[async_trait]
impl FactCheckApi for FakeApi {
    async fn fetch_claims(&self) -> FactWatchResult<Vec<ClaimRecord>> {
        self.claim_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.claims_gate.lock().unwrap().clone();
        pass(gate).await;
        Ok(self.claims.lock().unwrap().clone())
    }

    async fn fetch_verifications(&self) -> FactWatchResult<Vec<VerificationRecord>> {
        Ok(self.verifications.lock().unwrap().clone())
    }

    async fn fetch_items(&self) -> FactWatchResult<Vec<SourceItemRecord>> {
        self.item_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_items.load(Ordering::SeqCst) {
            return Err(FactWatchError::Network("connection refused".to_string()));
        }
        Ok(self.items.lock().unwrap().clone())
    }

    async fn verify_text(&self, text: &str) -> FactWatchResult<VerificationResult> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        self.verify_texts.lock().unwrap().push(text.to_string());
        let gate = self.verify_gate.lock().unwrap().clone();
        pass(gate).await;
        self.verify_result
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| FactWatchError::Http { status: 500, message: "verifier crashed".to_string() })
    }

    async fn health(&self) -> FactWatchResult<HealthStatus> {
        Ok(HealthStatus { status: "ok".to_string() })
    }

    async fn queue_for_manual(&self, _claim_id: &str) -> FactWatchResult<()> {
        Ok(())
    }
}
