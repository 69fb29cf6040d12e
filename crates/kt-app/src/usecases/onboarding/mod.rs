mod orchestrator;

pub use orchestrator::{OnboardingError, OnboardingOrchestrator, OnboardingProgress};
