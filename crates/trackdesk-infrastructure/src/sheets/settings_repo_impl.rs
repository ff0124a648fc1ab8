//! Tenant settings read from the single-row `settings` sheet

use async_trait::async_trait;
use tracing::warn;

use trackdesk_core::domain::TenantSettings;
use trackdesk_core::error::DomainError;
use trackdesk_core::repositories::SettingsRepository;
use trackdesk_core::Page;

use crate::remote::{ReadQuery, Sheet, SheetApiClient};

pub struct SheetSettingsRepository {
    client: SheetApiClient,
}

impl SheetSettingsRepository {
    pub fn new(client: SheetApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SettingsRepository for SheetSettingsRepository {
    async fn fetch(&self, alias: &str) -> Result<TenantSettings, DomainError> {
        let page: Page<TenantSettings> = self
            .client
            .read(alias, Sheet::Settings, &ReadQuery::default())
            .await
            .map_err(|e| e.into_domain("Failed to fetch settings"))?;

        page.data.into_iter().next().ok_or_else(|| {
            warn!(alias, "Tenant has no settings row");
            DomainError::SettingsNotFound(alias.to_string())
        })
    }
}
