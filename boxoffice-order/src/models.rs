use boxoffice_catalog::{TicketCategory, TicketLine};
use serde::Serialize;

use crate::error::{PurchaseError, PurchaseResult};

/// Totals accumulated over the ticket lines of one purchase.
///
/// Built fresh for every purchase and dropped when it returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PurchaseOrder {
    pub total_price: f64,
    pub adults_requested: u64,
    pub children_requested: u64,
    pub infants_requested: u64,
    pub total_seats_required: u64,
}

impl PurchaseOrder {
    /// Sum every line into a new order.
    ///
    /// Fails on the first line whose ticket type is not one the venue sells.
    pub fn tally<L: TicketLine>(lines: &[L]) -> PurchaseResult<Self> {
        let mut order = Self::default();
        for line in lines {
            order.add_line(line)?;
        }
        Ok(order)
    }

    fn add_line<L: TicketLine + ?Sized>(&mut self, line: &L) -> PurchaseResult<()> {
        let category = TicketCategory::from_code(line.ticket_type())
            .ok_or_else(|| PurchaseError::UnexpectedTicketType(line.ticket_type().to_string()))?;
        let quantity = u64::from(line.quantity());

        self.total_price += line.subtotal_price();

        match category {
            TicketCategory::Adult => self.adults_requested += quantity,
            TicketCategory::Child => self.children_requested += quantity,
            TicketCategory::Infant => self.infants_requested += quantity,
        }
        if category.occupies_seat() {
            self.total_seats_required += quantity;
        }

        Ok(())
    }

    pub fn minors_requested(&self) -> u64 {
        self.children_requested + self.infants_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxoffice_catalog::TicketRequest;

    struct SeasonPass;

    impl TicketLine for SeasonPass {
        fn ticket_type(&self) -> &str {
            "SEASON"
        }

        fn quantity(&self) -> u32 {
            1
        }

        fn subtotal_price(&self) -> f64 {
            150.0
        }
    }

    struct LooseCode(&'static str);

    impl TicketLine for LooseCode {
        fn ticket_type(&self) -> &str {
            self.0
        }

        fn quantity(&self) -> u32 {
            1
        }

        fn subtotal_price(&self) -> f64 {
            20.0
        }
    }

    #[test]
    fn test_ticket_types_must_match_exactly() {
        for code in ["adult", " ADULT ", "Child"] {
            let err = PurchaseOrder::tally(&[LooseCode(code)]).unwrap_err();
            assert!(matches!(err, PurchaseError::UnexpectedTicketType(ref got) if got == code));
        }

        let order = PurchaseOrder::tally(&[LooseCode("ADULT")]).unwrap();
        assert_eq!(order.adults_requested, 1);
    }

    #[test]
    fn test_tally_sums_every_category() {
        let order = PurchaseOrder::tally(&[
            TicketRequest::new(TicketCategory::Adult, 2),
            TicketRequest::new(TicketCategory::Child, 3),
            TicketRequest::new(TicketCategory::Infant, 2),
            TicketRequest::new(TicketCategory::Adult, 1),
        ])
        .unwrap();

        assert_eq!(order.total_price, 90.0);
        assert_eq!(order.adults_requested, 3);
        assert_eq!(order.children_requested, 3);
        assert_eq!(order.infants_requested, 2);
        assert_eq!(order.total_seats_required, 6);
        assert_eq!(order.minors_requested(), 5);
    }

    #[test]
    fn test_tally_of_nothing_is_zero() {
        let order = PurchaseOrder::tally::<TicketRequest>(&[]).unwrap();
        assert_eq!(order, PurchaseOrder::default());
    }

    #[test]
    fn test_unknown_ticket_type_is_rejected() {
        let err = PurchaseOrder::tally(&[SeasonPass]).unwrap_err();
        assert!(matches!(err, PurchaseError::UnexpectedTicketType(ref code) if code == "SEASON"));
        assert_eq!(err.to_string(), "Unexpected ticket type: SEASON");
    }
}
