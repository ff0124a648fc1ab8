//! # TrackDesk API
//!
//! HTTP handlers, session extraction, middleware and DTOs.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod session;
pub mod state;

pub use router::build_router;
pub use state::{AppState, Repositories};
