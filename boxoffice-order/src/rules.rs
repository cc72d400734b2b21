use serde::{Deserialize, Serialize};

use crate::error::{PurchaseError, PurchaseResult};
use crate::models::PurchaseOrder;

/// Business rules applied to every order after it has been tallied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRules {
    /// Seats (adult and child tickets) allowed in one order.
    #[serde(default = "default_max_seats")]
    pub max_seats_per_order: u32,
}

fn default_max_seats() -> u32 {
    20
}

impl Default for OrderRules {
    fn default() -> Self {
        Self {
            max_seats_per_order: default_max_seats(),
        }
    }
}

impl OrderRules {
    /// Run the order checks. The first violated rule wins, in this order:
    /// infant ratio, accompaniment, seat capacity.
    pub fn check(&self, order: &PurchaseOrder) -> PurchaseResult<()> {
        self.check_infants_within_adults(order)?;
        self.check_minors_accompanied(order)?;
        self.check_seat_capacity(order)
    }

    // Every infant needs an adult lap of their own.
    fn check_infants_within_adults(&self, order: &PurchaseOrder) -> PurchaseResult<()> {
        if order.adults_requested > 0 && order.infants_requested > order.adults_requested {
            return Err(PurchaseError::InfantsExceedAdults {
                adults: order.adults_requested,
                infants: order.infants_requested,
            });
        }
        Ok(())
    }

    fn check_minors_accompanied(&self, order: &PurchaseOrder) -> PurchaseResult<()> {
        if order.adults_requested == 0 && order.minors_requested() > 0 {
            return Err(PurchaseError::MinorsWithoutAdult);
        }
        Ok(())
    }

    fn check_seat_capacity(&self, order: &PurchaseOrder) -> PurchaseResult<()> {
        if order.total_seats_required > u64::from(self.max_seats_per_order) {
            return Err(PurchaseError::CapacityExceeded {
                requested: order.total_seats_required,
                max: self.max_seats_per_order,
            });
        }
        Ok(())
    }
}
