//! Sheet-backed repository implementations

pub mod customer_repo_impl;
pub mod settings_repo_impl;
pub mod settlement_repo_impl;
pub mod ticket_repo_impl;
pub mod user_repo_impl;

pub use customer_repo_impl::SheetCustomerRepository;
pub use settings_repo_impl::SheetSettingsRepository;
pub use settlement_repo_impl::SheetSettlementRepository;
pub use ticket_repo_impl::SheetTicketRepository;
pub use user_repo_impl::SheetUserRepository;
