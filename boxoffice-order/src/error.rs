use boxoffice_core::{CollaboratorError, RawAccountId};

/// Reasons a purchase is refused. Every failure of
/// [`PurchaseOrchestrator::purchase`](crate::PurchaseOrchestrator::purchase)
/// is one of these.
#[derive(Debug, thiserror::Error)]
pub enum PurchaseError {
    #[error("purchase must include at least one ticket request")]
    EmptyOrder,

    #[error("account id must be a positive integer, got {0}")]
    InvalidAccount(RawAccountId),

    #[error("Unexpected ticket type: {0}")]
    UnexpectedTicketType(String),

    #[error("All infants will require their own adult upon whom to sit ({infants} infants, {adults} adults)")]
    InfantsExceedAdults { adults: u64, infants: u64 },

    #[error("Children and infants require at least one adult")]
    MinorsWithoutAdult,

    #[error("Maximum of {max} tickets per order, {requested} seats requested")]
    CapacityExceeded { requested: u64, max: u32 },

    /// Payment or seat reservation failed after validation passed.
    /// Displays the collaborator's own message.
    #[error("{0}")]
    PaymentOrReservationFailed(#[source] CollaboratorError),
}

impl PurchaseError {
    /// True for errors the caller can fix by correcting the order.
    pub fn is_validation_failure(&self) -> bool {
        !matches!(self, Self::PaymentOrReservationFailed(_))
    }
}

pub type PurchaseResult<T> = Result<T, PurchaseError>;
