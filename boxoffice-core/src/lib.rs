pub mod account;
pub mod payment;
pub mod reservation;

pub use account::{AccountId, AccountIdError, RawAccountId};
pub use payment::{MockPaymentService, PaymentCharge, PaymentService};
pub use reservation::{MockSeatReservationService, SeatReservation, SeatReservationService};

/// Failure reported by an external collaborator. Its message is all the
/// purchase flow relies on.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

pub type CollaboratorResult<T> = Result<T, CollaboratorError>;
