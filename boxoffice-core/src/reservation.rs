use async_trait::async_trait;
use std::sync::Mutex;

use crate::account::AccountId;
use crate::CollaboratorResult;

/// External seat booking system.
#[async_trait]
pub trait SeatReservationService: Send + Sync {
    /// Reserve `seat_count` seats for the account.
    async fn reserve_seats(&self, account_id: AccountId, seat_count: u64) -> CollaboratorResult<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatReservation {
    pub account_id: AccountId,
    pub seat_count: u64,
}

/// In-memory seat booking that records every reservation request.
#[derive(Debug, Default)]
pub struct MockSeatReservationService {
    reservations: Mutex<Vec<SeatReservation>>,
    failure: Option<String>,
}

impl MockSeatReservationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reservations: Mutex::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    pub fn reservations(&self) -> Vec<SeatReservation> {
        self.reservations
            .lock()
            .map(|reservations| reservations.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SeatReservationService for MockSeatReservationService {
    async fn reserve_seats(&self, account_id: AccountId, seat_count: u64) -> CollaboratorResult<()> {
        if let Some(message) = &self.failure {
            return Err(message.clone().into());
        }

        self.reservations
            .lock()
            .map_err(|_| "reservation ledger lock poisoned")?
            .push(SeatReservation { account_id, seat_count });

        tracing::info!("Reserved {} seats for account {}", seat_count, account_id);
        Ok(())
    }
}
