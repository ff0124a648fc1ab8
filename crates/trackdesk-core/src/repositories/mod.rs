//! Repository traits (ports)
//!
//! Every method takes the tenant alias explicitly; nothing here holds
//! per-user state.

pub mod customer_repository;
pub mod settings_repository;
pub mod settlement_repository;
pub mod ticket_repository;
pub mod user_repository;

pub use customer_repository::{CustomerQuery, CustomerRepository};
pub use settings_repository::SettingsRepository;
pub use settlement_repository::{SettlementQuery, SettlementRepository};
pub use ticket_repository::{TicketQuery, TicketRepository};
pub use user_repository::UserRepository;

#[cfg(any(test, feature = "mocks"))]
pub use customer_repository::MockCustomerRepository;
#[cfg(any(test, feature = "mocks"))]
pub use settings_repository::MockSettingsRepository;
#[cfg(any(test, feature = "mocks"))]
pub use settlement_repository::MockSettlementRepository;
#[cfg(any(test, feature = "mocks"))]
pub use ticket_repository::MockTicketRepository;
#[cfg(any(test, feature = "mocks"))]
pub use user_repository::MockUserRepository;

/// Outcome of an `add`/`update` write: the server's message and, when it
/// sends one back, the stored record.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteReceipt<T> {
    pub message: String,
    pub record: Option<T>,
}

impl<T> WriteReceipt<T> {
    pub fn new(message: impl Into<String>, record: Option<T>) -> Self {
        Self { message: message.into(), record }
    }
}
