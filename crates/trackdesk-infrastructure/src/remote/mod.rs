//! Remote spreadsheet API access

pub mod client;
pub mod error;
pub mod sheet;

pub use client::{SheetApiClient, WriteOutcome};
pub use error::RemoteError;
pub use sheet::{ReadQuery, Sheet, WriteAction};
