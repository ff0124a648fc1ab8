//! # TrackDesk Core - Domain Module
//!
//! Records owned by the remote sheets, as this service sees them.

pub mod activity;
pub mod customer;
pub mod lenient;
pub mod note;
pub mod settings;
pub mod settlement;
pub mod ticket;
pub mod user;

// Re-export all entities and enums
pub use activity::{ActivityAction, ActivityEntry, SettlementActivity, TicketActivity};
pub use customer::{Customer, CustomerDraft, SelectOption};
pub use note::TicketNote;
pub use settings::TenantSettings;
pub use settlement::{Settlement, SettlementData, SettlementDraft};
pub use ticket::{Ticket, TicketDraft};
pub use user::{SessionUser, UserDetails};
