//! Tenant settings repository trait (port)

use async_trait::async_trait;

use crate::domain::TenantSettings;
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn fetch(&self, alias: &str) -> Result<TenantSettings, DomainError>;
}
