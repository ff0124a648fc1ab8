//! HTTP handlers

pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod health;
pub mod settings;
pub mod settlements;
pub mod tickets;
pub mod users;
