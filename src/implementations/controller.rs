use std::sync::{ Arc, Mutex, MutexGuard };

use log::{ debug, error, info };

use crate::errors::ErrorInfo;
use crate::models::VerificationResult;
use crate::traits::fact_check_api::FactCheckApi;

/// Lifecycle of the controller's single request slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Submitting,
    Completed,
}

/// What a call to [`VerificationController::submit`] did
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Input was blank; nothing was sent
    IgnoredBlank,
    /// Another request was outstanding; nothing was sent
    IgnoredInFlight,
    /// The service answered and the result is now held by the controller
    Completed(VerificationResult),
    /// The request failed; the controller is idle again and holds no result
    Failed,
}

#[derive(Debug, Default)]
struct Slot {
    submitting: bool,
    result: Option<VerificationResult>,
    last_failure: Option<ErrorInfo>,
}

/// Runs ad-hoc text verifications, one at a time.
///
/// A submit while another is outstanding is dropped rather than queued.
/// Failures are kept for diagnostics only; they never become a result.
pub struct VerificationController {
    api: Arc<dyn FactCheckApi>,
    slot: Mutex<Slot>,
}

impl VerificationController {
    pub fn new(api: Arc<dyn FactCheckApi>) -> Self {
        Self {
            api,
            slot: Mutex::new(Slot::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self) -> RequestState {
        let slot = self.lock();
        if slot.submitting {
            RequestState::Submitting
        } else if slot.result.is_some() {
            RequestState::Completed
        } else {
            RequestState::Idle
        }
    }

    /// The result of the last successful submission, if it is still held
    pub fn result(&self) -> Option<VerificationResult> {
        self.lock().result.clone()
    }

    /// The most recent failure, for diagnostics
    pub fn last_failure(&self) -> Option<ErrorInfo> {
        self.lock().last_failure.clone()
    }

    /// Submit `text` for verification. The trimmed text is what gets sent.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring blank verification request");
            return SubmitOutcome::IgnoredBlank;
        }

        {
            // Check and claim the slot under one lock so two callers cannot both pass.
            let mut slot = self.lock();
            if slot.submitting {
                debug!("Verification already in flight; dropping request");
                return SubmitOutcome::IgnoredInFlight;
            }
            slot.submitting = true;
            slot.result = None;
        }

        let mut guard = SubmittingGuard { controller: self, armed: true };

        info!("Submitting text for verification ({} chars)", text.chars().count());
        let outcome = self.api.verify_text(text).await;

        guard.armed = false;
        let mut slot = self.lock();
        slot.submitting = false;
        match outcome {
            Ok(result) => {
                info!("Verification completed: {} ({})", result.verdict, result.score);
                slot.result = Some(result.clone());
                SubmitOutcome::Completed(result)
            }
            Err(err) => {
                error!("Verification request failed: {}", err);
                slot.last_failure = Some(ErrorInfo::from_error(&err));
                SubmitOutcome::Failed
            }
        }
    }
}

/// Releases the slot if a submit future is dropped before the service answers.
struct SubmittingGuard<'a> {
    controller: &'a VerificationController,
    armed: bool,
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.controller.lock().submitting = false;
        }
    }
}
