//! Domain services (business logic)

pub mod customer_service;
pub mod dashboard_service;
pub mod settlement_service;
pub mod ticket_service;
pub mod user_service;

pub use customer_service::{CustomerInput, CustomerService};
pub use dashboard_service::{DashboardService, DashboardSummary};
pub use settlement_service::{SettlementService, SETTLEMENTS_MODULE};
pub use ticket_service::{TicketInput, TicketListParams, TicketListing, TicketService};
pub use user_service::UserService;
