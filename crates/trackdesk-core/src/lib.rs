//! # TrackDesk Core
//!
//! Domain records, the embedded-JSON codec, settlement arithmetic, the
//! pagination view-model, repository traits, and the services behind each
//! user action.

pub mod domain;
pub mod embedded;
pub mod money;
pub mod pagination;
pub mod vocabulary;
pub mod repositories;
pub mod services;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use embedded::Embedded;
pub use error::DomainError;
pub use pagination::{Page, PageView};
