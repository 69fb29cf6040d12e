use serde::{Deserialize, Serialize};

/// Position in the onboarding flow.
///
/// Created at index 0 without consent; discarded once the flow completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingState {
    /// 0-based page index.
    pub index: usize,
    /// Consent checkbox. Only gates the terminal page.
    pub consent: bool,
}

impl OnboardingState {
    pub fn new() -> Self {
        Self::default()
    }
}
