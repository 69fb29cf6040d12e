//! Onboarding state machine.
//!
//! States are `Page(0) .. Page(N-1)` plus the absorbing `Completed`. `Next`
//! moves forward one page; on the terminal page it needs consent and leaves
//! the model. `Back` is always safe and floors at the first page.

use serde::{Deserialize, Serialize};

use super::{FlowError, OnboardingPage, OnboardingState};
use crate::config::OnboardingConfig;

/// Events that drive the onboarding flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnboardingEvent {
    /// Primary button ("Continue" / "Get Started").
    Next,
    /// Back chevron.
    Back,
    /// Consent checkbox toggled to the given value.
    SetConsent(bool),
}

/// Result of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Advance {
    /// Still onboarding, at the given state.
    Moved(OnboardingState),
    /// Terminal page accepted with consent; hand control to the main app.
    Completed,
}

/// Pure onboarding state machine over a fixed, non-empty page list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingFlow {
    pages: Vec<OnboardingPage>,
    consent_prompt: String,
}

impl OnboardingFlow {
    pub fn new(
        pages: Vec<OnboardingPage>,
        consent_prompt: impl Into<String>,
    ) -> Result<Self, FlowError> {
        if pages.is_empty() {
            return Err(FlowError::EmptyFlow);
        }
        Ok(Self {
            pages,
            consent_prompt: consent_prompt.into(),
        })
    }

    pub fn from_config(config: &OnboardingConfig) -> Result<Self, FlowError> {
        Self::new(config.pages.clone(), config.consent_prompt.clone())
    }

    /// The three stock pages ending in the data-sharing consent.
    pub fn standard() -> Self {
        let config = crate::config::defaults::onboarding();
        Self {
            pages: config.pages,
            consent_prompt: config.consent_prompt,
        }
    }

    pub fn pages(&self) -> &[OnboardingPage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn consent_prompt(&self) -> &str {
        &self.consent_prompt
    }

    pub fn terminal_index(&self) -> usize {
        self.pages.len() - 1
    }

    pub fn is_terminal(&self, state: &OnboardingState) -> bool {
        state.index == self.terminal_index()
    }

    pub fn current_page(&self, state: &OnboardingState) -> Option<&OnboardingPage> {
        self.pages.get(state.index)
    }

    /// Whether the primary button is enabled.
    pub fn can_advance(&self, state: &OnboardingState) -> bool {
        state.index < self.pages.len() && (!self.is_terminal(state) || state.consent)
    }

    /// Move forward one page, or complete from the terminal page.
    ///
    /// Fails with [`FlowError::ConsentRequired`] on the terminal page without
    /// consent; the caller keeps its current state.
    pub fn advance(&self, state: OnboardingState) -> Result<Advance, FlowError> {
        self.ensure_in_range(&state)?;
        if !self.is_terminal(&state) {
            return Ok(Advance::Moved(OnboardingState {
                index: state.index + 1,
                ..state
            }));
        }
        if !state.consent {
            return Err(FlowError::ConsentRequired);
        }
        Ok(Advance::Completed)
    }

    /// Step back one page. A no-op on the first page.
    pub fn go_back(&self, state: OnboardingState) -> OnboardingState {
        OnboardingState {
            index: state.index.saturating_sub(1),
            ..state
        }
    }

    /// Set the consent flag. Legal on any page.
    pub fn set_consent(&self, state: OnboardingState, consent: bool) -> OnboardingState {
        OnboardingState { consent, ..state }
    }

    pub fn transition(
        &self,
        state: OnboardingState,
        event: OnboardingEvent,
    ) -> Result<Advance, FlowError> {
        match event {
            OnboardingEvent::Next => self.advance(state),
            OnboardingEvent::Back => Ok(Advance::Moved(self.go_back(state))),
            OnboardingEvent::SetConsent(consent) => {
                Ok(Advance::Moved(self.set_consent(state, consent)))
            }
        }
    }

    fn ensure_in_range(&self, state: &OnboardingState) -> Result<(), FlowError> {
        if state.index >= self.pages.len() {
            return Err(FlowError::PageOutOfRange {
                index: state.index,
                page_count: self.pages.len(),
            });
        }
        Ok(())
    }
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::standard()
    }
}
