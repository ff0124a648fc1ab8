//! Settlement repository trait (port)

use async_trait::async_trait;

use trackdesk_shared::Pagination;

use super::WriteReceipt;
use crate::domain::{Settlement, SettlementDraft};
use crate::error::DomainError;
use crate::pagination::Page;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettlementQuery {
    pub pagination: Pagination,
    pub ticket_id: Option<i64>,
    pub id: Option<i64>,
}

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait SettlementRepository: Send + Sync {
    async fn list(&self, alias: &str, query: &SettlementQuery) -> Result<Page<Settlement>, DomainError>;
    async fn find_by_id(&self, alias: &str, id: i64) -> Result<Option<Settlement>, DomainError>;
    async fn create(&self, alias: &str, draft: &SettlementDraft) -> Result<WriteReceipt<Settlement>, DomainError>;
    async fn update(&self, alias: &str, settlement: &Settlement) -> Result<WriteReceipt<Settlement>, DomainError>;
}
