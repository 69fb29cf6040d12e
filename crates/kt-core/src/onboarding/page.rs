use serde::{Deserialize, Serialize};

/// One informational page of the onboarding carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingPage {
    pub id: u32,
    /// Icon name resolved by the presentation layer.
    pub icon: String,
    pub title: String,
    pub description: String,
    pub button_label: String,
}
