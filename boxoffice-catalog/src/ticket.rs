use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ticket categories sold at the venue
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 3] = [
        TicketCategory::Adult,
        TicketCategory::Child,
        TicketCategory::Infant,
    ];

    pub fn code(self) -> &'static str {
        match self {
            TicketCategory::Adult => "ADULT",
            TicketCategory::Child => "CHILD",
            TicketCategory::Infant => "INFANT",
        }
    }

    /// Exact match on the upper-case code, no trimming.
    pub fn from_code(code: &str) -> Option<Self> {
        TicketCategory::ALL
            .into_iter()
            .find(|category| category.code() == code)
    }

    /// Price of a single ticket
    pub fn unit_price(self) -> f64 {
        match self {
            TicketCategory::Adult => 20.0,
            TicketCategory::Child => 10.0,
            TicketCategory::Infant => 0.0,
        }
    }

    /// Infants sit on an adult's lap
    pub fn occupies_seat(self) -> bool {
        match self {
            TicketCategory::Adult | TicketCategory::Child => true,
            TicketCategory::Infant => false,
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TicketCategory {
    type Err = TicketRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketCategory::ALL
            .into_iter()
            .find(|category| category.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TicketRequestError::UnknownCategory(s.to_string()))
    }
}

/// Anything the purchase flow can price and count.
///
/// The category is reported as its code rather than as [`TicketCategory`],
/// so implementations outside this crate can carry categories the venue
/// does not sell and the purchase flow has to reject them.
pub trait TicketLine {
    fn ticket_type(&self) -> &str;

    fn quantity(&self) -> u32;

    fn subtotal_price(&self) -> f64;
}

impl<T: TicketLine + ?Sized> TicketLine for &T {
    fn ticket_type(&self) -> &str {
        (**self).ticket_type()
    }

    fn quantity(&self) -> u32 {
        (**self).quantity()
    }

    fn subtotal_price(&self) -> f64 {
        (**self).subtotal_price()
    }
}

impl<T: TicketLine + ?Sized> TicketLine for Box<T> {
    fn ticket_type(&self) -> &str {
        (**self).ticket_type()
    }

    fn quantity(&self) -> u32 {
        (**self).quantity()
    }

    fn subtotal_price(&self) -> f64 {
        (**self).subtotal_price()
    }
}

/// An immutable request for `quantity` tickets of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTicketRequest")]
pub struct TicketRequest {
    #[serde(rename = "type")]
    category: TicketCategory,
    quantity: u32,
}

impl TicketRequest {
    pub fn new(category: TicketCategory, quantity: u32) -> Self {
        Self { category, quantity }
    }

    /// Build a request from untyped input such as a category code typed by a user.
    pub fn try_new(code: &str, quantity: i64) -> Result<Self, TicketRequestError> {
        let category = code.parse()?;
        if quantity < 0 {
            return Err(TicketRequestError::Negative(quantity as f64));
        }
        let quantity =
            u32::try_from(quantity).map_err(|_| TicketRequestError::OutOfRange(quantity as f64))?;

        Ok(Self::new(category, quantity))
    }

    pub fn category(&self) -> TicketCategory {
        self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn seats_required(&self) -> u32 {
        if self.category.occupies_seat() {
            self.quantity
        } else {
            0
        }
    }

    pub fn subtotal_price(&self) -> f64 {
        self.category.unit_price() * f64::from(self.quantity)
    }
}

impl TicketLine for TicketRequest {
    fn ticket_type(&self) -> &str {
        self.category.code()
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn subtotal_price(&self) -> f64 {
        TicketRequest::subtotal_price(self)
    }
}

/// Wire shape of a ticket request before validation
#[derive(Debug, Clone, Deserialize)]
pub struct RawTicketRequest {
    #[serde(rename = "type")]
    pub ticket_type: String,
    pub quantity: f64,
}

impl TryFrom<RawTicketRequest> for TicketRequest {
    type Error = TicketRequestError;

    fn try_from(raw: RawTicketRequest) -> Result<Self, Self::Error> {
        let category: TicketCategory = raw.ticket_type.parse()?;
        let quantity = raw.quantity;

        if !quantity.is_finite() || quantity.fract() != 0.0 {
            return Err(TicketRequestError::NotAnInteger(quantity));
        }
        if quantity < 0.0 {
            return Err(TicketRequestError::Negative(quantity));
        }
        if quantity > f64::from(u32::MAX) {
            return Err(TicketRequestError::OutOfRange(quantity));
        }

        Ok(Self::new(category, quantity as u32))
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TicketRequestError {
    #[error("ticket type must be ADULT, CHILD, or INFANT, got {0:?}")]
    UnknownCategory(String),

    #[error("quantity must be an integer, got {0}")]
    NotAnInteger(f64),

    #[error("quantity must not be negative, got {0}")]
    Negative(f64),

    #[error("quantity {0} is too large")]
    OutOfRange(f64),
}
