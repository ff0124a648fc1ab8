//! User repository trait (port)

use async_trait::async_trait;

use trackdesk_shared::Pagination;

use crate::domain::UserDetails;
use crate::error::DomainError;
use crate::pagination::Page;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self, alias: &str, pagination: Pagination) -> Result<Page<UserDetails>, DomainError>;
    async fn find_by_id(&self, alias: &str, id: i64) -> Result<Option<UserDetails>, DomainError>;
}
