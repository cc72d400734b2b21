use boxoffice_catalog::TicketLine;
use boxoffice_core::{
    AccountId, AccountIdError, CollaboratorResult, PaymentService, RawAccountId,
    SeatReservationService,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{PurchaseError, PurchaseResult};
use crate::models::PurchaseOrder;
use crate::rules::OrderRules;

/// Validates ticket orders and hands accepted ones to payment and seat
/// reservation.
///
/// Holds no per-purchase state, so one instance can serve any number of
/// callers.
pub struct PurchaseOrchestrator {
    payments: Arc<dyn PaymentService>,
    seats: Arc<dyn SeatReservationService>,
    rules: OrderRules,
}

impl PurchaseOrchestrator {
    pub fn new(payments: Arc<dyn PaymentService>, seats: Arc<dyn SeatReservationService>) -> Self {
        Self {
            payments,
            seats,
            rules: OrderRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: OrderRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> &OrderRules {
        &self.rules
    }

    /// Purchase tickets for an account.
    ///
    /// The order is checked in full before anything is charged. Once it
    /// passes, the total price is charged and then the seats are reserved.
    /// A failure in either call is returned as
    /// [`PurchaseError::PaymentOrReservationFailed`]; a payment that went
    /// through before the reservation failed is not refunded.
    #[tracing::instrument(name = "purchase", skip_all, fields(purchase_id = %Uuid::new_v4()))]
    pub async fn purchase<L: TicketLine>(
        &self,
        account_id: impl Into<RawAccountId>,
        ticket_requests: &[L],
    ) -> PurchaseResult<()> {
        let (account_id, order) = match self.validate(account_id.into(), ticket_requests) {
            Ok(validated) => validated,
            Err(err) => {
                tracing::warn!("Rejected purchase: {}", err);
                return Err(err);
            }
        };

        if let Err(err) = self.charge_and_reserve(account_id, &order).await {
            tracing::error!(
                "Payment or seat reservation failed for account {}: {}",
                account_id,
                err
            );
            return Err(PurchaseError::PaymentOrReservationFailed(err));
        }

        tracing::info!(
            "Purchased {} adult, {} child and {} infant tickets for account {} ({:.2}, {} seats)",
            order.adults_requested,
            order.children_requested,
            order.infants_requested,
            account_id,
            order.total_price,
            order.total_seats_required
        );
        Ok(())
    }

    fn validate<L: TicketLine>(
        &self,
        account_id: RawAccountId,
        ticket_requests: &[L],
    ) -> PurchaseResult<(AccountId, PurchaseOrder)> {
        if ticket_requests.is_empty() {
            return Err(PurchaseError::EmptyOrder);
        }

        let account_id = AccountId::try_from(account_id).map_err(
            |AccountIdError::NotPositiveInteger(raw)| PurchaseError::InvalidAccount(raw),
        )?;

        let order = PurchaseOrder::tally(ticket_requests)?;
        self.rules.check(&order)?;

        Ok((account_id, order))
    }

    async fn charge_and_reserve(
        &self,
        account_id: AccountId,
        order: &PurchaseOrder,
    ) -> CollaboratorResult<()> {
        self.payments.charge(account_id, order.total_price).await?;
        self.seats
            .reserve_seats(account_id, order.total_seats_required)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use boxoffice_catalog::{TicketCategory, TicketRequest};
    use boxoffice_core::{MockPaymentService, MockSeatReservationService};
    use std::sync::Mutex;

    /// Records both collaborator calls in one list to observe their order.
    #[derive(Default)]
    struct CallLog {
        calls: Mutex<Vec<String>>,
    }

    impl CallLog {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PaymentService for CallLog {
        async fn charge(&self, account_id: AccountId, amount: f64) -> CollaboratorResult<()> {
            self.calls.lock().unwrap().push(format!("charge {} {}", account_id, amount));
            Ok(())
        }
    }

    #[async_trait]
    impl SeatReservationService for CallLog {
        async fn reserve_seats(&self, account_id: AccountId, seat_count: u64) -> CollaboratorResult<()> {
            self.calls.lock().unwrap().push(format!("reserve {} {}", account_id, seat_count));
            Ok(())
        }
    }

    fn adults(quantity: u32) -> TicketRequest {
        TicketRequest::new(TicketCategory::Adult, quantity)
    }

    #[tokio::test]
    async fn test_charges_before_reserving() {
        let log = Arc::new(CallLog::default());
        let orchestrator = PurchaseOrchestrator::new(log.clone(), log.clone());

        orchestrator
            .purchase(
                7,
                &[adults(2), TicketRequest::new(TicketCategory::Child, 1)],
            )
            .await
            .unwrap();

        assert_eq!(log.calls(), vec!["charge 7 50", "reserve 7 3"]);
    }

    #[tokio::test]
    async fn test_empty_order_is_checked_before_account() {
        let orchestrator = PurchaseOrchestrator::new(
            Arc::new(MockPaymentService::new()),
            Arc::new(MockSeatReservationService::new()),
        );

        let err = orchestrator
            .purchase::<TicketRequest>(0, &[])
            .await
            .unwrap_err();
        assert!(matches!(err, PurchaseError::EmptyOrder));
    }

    #[tokio::test]
    async fn test_account_is_checked_before_ticket_types() {
        struct Unknown;

        impl TicketLine for Unknown {
            fn ticket_type(&self) -> &str {
                "BALCONY"
            }

            fn quantity(&self) -> u32 {
                1
            }

            fn subtotal_price(&self) -> f64 {
                35.0
            }
        }

        let orchestrator = PurchaseOrchestrator::new(
            Arc::new(MockPaymentService::new()),
            Arc::new(MockSeatReservationService::new()),
        );

        let err = orchestrator.purchase(-4, &[Unknown]).await.unwrap_err();
        assert!(matches!(err, PurchaseError::InvalidAccount(RawAccountId::Integer(-4))));

        let err = orchestrator.purchase(4, &[Unknown]).await.unwrap_err();
        assert!(matches!(err, PurchaseError::UnexpectedTicketType(ref code) if code == "BALCONY"));
    }

    #[tokio::test]
    async fn test_configured_capacity_is_enforced() {
        let payments = Arc::new(MockPaymentService::new());
        let orchestrator =
            PurchaseOrchestrator::new(payments.clone(), Arc::new(MockSeatReservationService::new()))
                .with_rules(OrderRules { max_seats_per_order: 5 });

        let err = orchestrator.purchase(1, &[adults(6)]).await.unwrap_err();
        assert!(matches!(err, PurchaseError::CapacityExceeded { requested: 6, max: 5 }));
        assert!(payments.charges().is_empty());
    }

    #[tokio::test]
    async fn test_collaborator_failure_is_not_a_validation_failure() {
        let orchestrator = PurchaseOrchestrator::new(
            Arc::new(MockPaymentService::failing("insufficient funds")),
            Arc::new(MockSeatReservationService::new()),
        );

        let err = orchestrator.purchase(1, &[adults(1)]).await.unwrap_err();
        assert!(!err.is_validation_failure());
        assert_eq!(err.to_string(), "insufficient funds");
        assert!(std::error::Error::source(&err).is_some());
    }
}
