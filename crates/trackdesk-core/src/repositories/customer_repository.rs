//! Customer repository trait (port)

use async_trait::async_trait;

use trackdesk_shared::Pagination;

use super::WriteReceipt;
use crate::domain::{Customer, CustomerDraft};
use crate::error::DomainError;
use crate::pagination::Page;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerQuery {
    pub pagination: Pagination,
    /// Substring match on the customer name.
    pub search: Option<String>,
}

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn list(&self, alias: &str, query: &CustomerQuery) -> Result<Page<Customer>, DomainError>;
    async fn create(&self, alias: &str, draft: &CustomerDraft) -> Result<WriteReceipt<Customer>, DomainError>;
    async fn update(&self, alias: &str, customer: &Customer) -> Result<WriteReceipt<Customer>, DomainError>;
}
