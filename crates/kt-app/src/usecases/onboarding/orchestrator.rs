//! Onboarding orchestrator.
//!
//! Holds the live [`OnboardingState`] and feeds user input through the pure
//! [`OnboardingFlow`]. Remembering that a rider finished onboarding is left to
//! the presentation layer, which reacts to [`OnboardingProgress::Completed`].

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, info_span, Instrument};

use kt_core::onboarding::{
    Advance, FlowError, OnboardingEvent, OnboardingFlow, OnboardingPage, OnboardingState,
};

/// Errors produced by the onboarding orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingError {
    #[error(transparent)]
    Flow(#[from] FlowError),
    #[error("onboarding is already completed")]
    AlreadyCompleted,
}

impl OnboardingError {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, OnboardingError::Flow(err) if err.is_recoverable())
    }
}

/// Where the rider is in onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OnboardingProgress {
    InProgress(OnboardingState),
    /// Terminal and absorbing; the state has been discarded.
    Completed,
}

/// Drives one rider's pass through the onboarding flow.
pub struct OnboardingOrchestrator {
    flow: Arc<OnboardingFlow>,
    /// Also serializes dispatch calls.
    progress: Mutex<OnboardingProgress>,
}

impl OnboardingOrchestrator {
    /// Start at the first page without consent.
    pub fn new(flow: Arc<OnboardingFlow>) -> Self {
        Self {
            flow,
            progress: Mutex::new(OnboardingProgress::InProgress(OnboardingState::new())),
        }
    }

    pub fn flow(&self) -> &OnboardingFlow {
        &self.flow
    }

    pub async fn progress(&self) -> OnboardingProgress {
        *self.progress.lock().await
    }

    pub async fn current_page(&self) -> Option<OnboardingPage> {
        match *self.progress.lock().await {
            OnboardingProgress::InProgress(state) => self.flow.current_page(&state).cloned(),
            OnboardingProgress::Completed => None,
        }
    }

    pub async fn next(&self) -> Result<OnboardingProgress, OnboardingError> {
        self.dispatch(OnboardingEvent::Next).await
    }

    pub async fn back(&self) -> Result<OnboardingProgress, OnboardingError> {
        self.dispatch(OnboardingEvent::Back).await
    }

    pub async fn set_consent(&self, consent: bool) -> Result<OnboardingProgress, OnboardingError> {
        self.dispatch(OnboardingEvent::SetConsent(consent)).await
    }

    pub async fn dispatch(
        &self,
        event: OnboardingEvent,
    ) -> Result<OnboardingProgress, OnboardingError> {
        let span = info_span!("usecase.onboarding_orchestrator.dispatch", event = ?event);
        async {
            let mut progress = self.progress.lock().await;
            let state = match *progress {
                OnboardingProgress::InProgress(state) => state,
                OnboardingProgress::Completed => return Err(OnboardingError::AlreadyCompleted),
            };

            match self.flow.transition(state, event) {
                Ok(Advance::Moved(next)) => {
                    debug!(from = ?state, to = ?next, "onboarding state transition");
                    *progress = OnboardingProgress::InProgress(next);
                }
                Ok(Advance::Completed) => {
                    info!(pages = self.flow.page_count(), "onboarding completed");
                    *progress = OnboardingProgress::Completed;
                }
                Err(err) => {
                    debug!(error = %err, state = ?state, "onboarding transition refused");
                    return Err(err.into());
                }
            }
            Ok(*progress)
        }
        .instrument(span)
        .await
    }
}
