use async_trait::async_trait;
use std::sync::Mutex;

use crate::account::AccountId;
use crate::CollaboratorResult;

/// External payment gateway charged once per accepted purchase.
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Charge `amount` to the account. Any error aborts the purchase.
    async fn charge(&self, account_id: AccountId, amount: f64) -> CollaboratorResult<()>;
}

/// A single recorded call to [`MockPaymentService::charge`].
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentCharge {
    pub account_id: AccountId,
    pub amount: f64,
}

/// In-memory payment gateway that records every charge.
#[derive(Debug, Default)]
pub struct MockPaymentService {
    charges: Mutex<Vec<PaymentCharge>>,
    failure: Option<String>,
}

impl MockPaymentService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway that rejects every charge with `message`.
    /// Declined charges are not recorded.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            charges: Mutex::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    /// Charges received so far, oldest first.
    pub fn charges(&self) -> Vec<PaymentCharge> {
        self.charges
            .lock()
            .map(|charges| charges.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl PaymentService for MockPaymentService {
    async fn charge(&self, account_id: AccountId, amount: f64) -> CollaboratorResult<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(format!("amount must be a non-negative number, got {}", amount).into());
        }

        if let Some(message) = &self.failure {
            return Err(message.clone().into());
        }

        self.charges
            .lock()
            .map_err(|_| "payment ledger lock poisoned")?
            .push(PaymentCharge { account_id, amount });

        tracing::info!("Charged {:.2} to account {}", amount, account_id);
        Ok(())
    }
}
