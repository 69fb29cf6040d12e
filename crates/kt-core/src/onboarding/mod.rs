//! Onboarding domain models
//!
//! A linear, consent-gated sequence of introductory pages. The flow is pure:
//! callers hold an [`OnboardingState`] and feed it through [`OnboardingFlow`]
//! to get the next one.

mod error;
mod flow;
mod page;
mod state;

pub use error::FlowError;
pub use flow::{Advance, OnboardingEvent, OnboardingFlow};
pub use page::OnboardingPage;
pub use state::OnboardingState;
