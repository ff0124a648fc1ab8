//! # TrackDesk Infrastructure
//!
//! Remote sheet API client and the repository adapters built on it.

pub mod remote;
pub mod sheets;

pub use remote::{RemoteError, SheetApiClient};
pub use sheets::{
    SheetCustomerRepository, SheetSettingsRepository, SheetSettlementRepository, SheetTicketRepository,
    SheetUserRepository,
};
