//! Ticket repository trait (port)

use async_trait::async_trait;

use trackdesk_shared::Pagination;

use super::WriteReceipt;
use crate::domain::{Ticket, TicketDraft};
use crate::error::DomainError;
use crate::pagination::Page;

/// Server-side query. Results are ordered by id, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketQuery {
    pub pagination: Pagination,
    /// Restrict to tickets assigned to this user.
    pub user_id: Option<i64>,
    pub id: Option<i64>,
}

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn list(&self, alias: &str, query: &TicketQuery) -> Result<Page<Ticket>, DomainError>;
    async fn find_by_id(&self, alias: &str, id: i64) -> Result<Option<Ticket>, DomainError>;
    async fn create(&self, alias: &str, draft: &TicketDraft) -> Result<WriteReceipt<Ticket>, DomainError>;
    /// Writes the whole record, including both embedded sequences.
    async fn update(&self, alias: &str, ticket: &Ticket) -> Result<WriteReceipt<Ticket>, DomainError>;
}
