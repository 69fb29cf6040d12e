/// Onboarding flow error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// The terminal page was advanced without consent.
    #[error("consent is required to finish onboarding")]
    ConsentRequired,

    #[error("page index {index} is outside a flow of {page_count} pages")]
    PageOutOfRange { index: usize, page_count: usize },

    #[error("onboarding flow has no pages")]
    EmptyFlow,
}

impl FlowError {
    /// Only a missing consent is an expected outcome of user action.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FlowError::ConsentRequired)
    }
}
