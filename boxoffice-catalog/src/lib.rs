pub mod ticket;

pub use ticket::{RawTicketRequest, TicketCategory, TicketLine, TicketRequest, TicketRequestError};
