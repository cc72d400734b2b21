pub mod error;
pub mod models;
pub mod orchestrator;
pub mod rules;

pub use error::{PurchaseError, PurchaseResult};
pub use models::PurchaseOrder;
pub use orchestrator::PurchaseOrchestrator;
pub use rules::OrderRules;
