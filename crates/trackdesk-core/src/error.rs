//! Domain errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Ticket not found: {0}")]
    TicketNotFound(i64),

    #[error("Settlement not found: {0}")]
    SettlementNotFound(i64),

    #[error("Settings not found for tenant: {0}")]
    SettingsNotFound(String),

    #[error("Invalid {field}: '{value}' is not configured for this tenant")]
    OutOfVocabulary { field: &'static str, value: String },

    #[error("Module not enabled for this tenant: {0}")]
    ModuleDisabled(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Failure reported by (or while reaching) the remote sheet API. The
    /// message is already suitable for showing to the user.
    #[error("{0}")]
    Remote(String),
}
