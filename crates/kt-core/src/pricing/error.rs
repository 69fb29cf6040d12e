/// Pricing error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    /// A category outside the four known riders reached the calculator, or
    /// the active table has no profile for it. Indicates a caller bug.
    #[error("unknown user category: {name}")]
    UnknownCategory { name: String },

    #[error("discount of {percent}% for {category} is outside 0..=100")]
    DiscountOutOfRange { category: String, percent: u32 },
}

impl PricingError {
    /// Pricing failures are never expected outcomes of user action.
    pub fn is_recoverable(&self) -> bool {
        false
    }
}
