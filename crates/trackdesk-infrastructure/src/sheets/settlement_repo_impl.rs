// ============================================================================
// TrackDesk Infrastructure - Settlement Sheet Repository
// File: crates/trackdesk-infrastructure/src/sheets/settlement_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use tracing::info;

use trackdesk_core::domain::{Settlement, SettlementDraft};
use trackdesk_core::error::DomainError;
use trackdesk_core::repositories::{SettlementQuery, SettlementRepository, WriteReceipt};
use trackdesk_core::Page;
use trackdesk_shared::Pagination;

use crate::remote::{ReadQuery, Sheet, SheetApiClient, WriteAction};

pub struct SheetSettlementRepository {
    client: SheetApiClient,
}

impl SheetSettlementRepository {
    pub fn new(client: SheetApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SettlementRepository for SheetSettlementRepository {
    async fn list(&self, alias: &str, query: &SettlementQuery) -> Result<Page<Settlement>, DomainError> {
        let params = ReadQuery {
            ticket_id: query.ticket_id,
            id: query.id,
            ..ReadQuery::paged(query.pagination)
        };

        self.client
            .read(alias, Sheet::Settlements, &params)
            .await
            .map_err(|e| e.into_domain("Failed to fetch settlements"))
    }

    async fn find_by_id(&self, alias: &str, id: i64) -> Result<Option<Settlement>, DomainError> {
        let query = SettlementQuery {
            pagination: Pagination::new(Some(1), Some(1)),
            ticket_id: None,
            id: Some(id),
        };
        let page = self.list(alias, &query).await?;
        Ok(page.data.into_iter().find(|settlement| settlement.id == id))
    }

    async fn create(&self, alias: &str, draft: &SettlementDraft) -> Result<WriteReceipt<Settlement>, DomainError> {
        let outcome = self
            .client
            .write(alias, Sheet::Settlements, WriteAction::Add, draft)
            .await
            .map_err(|e| e.into_domain("Failed to add settlement"))?;

        info!(alias, ticket_id = draft.ticket_id, "Settlement added");
        Ok(outcome.into_receipt("Settlement added successfully"))
    }

    async fn update(&self, alias: &str, settlement: &Settlement) -> Result<WriteReceipt<Settlement>, DomainError> {
        let outcome = self
            .client
            .write(alias, Sheet::Settlements, WriteAction::Update, settlement)
            .await
            .map_err(|e| e.into_domain("Failed to update settlement"))?;

        info!(alias, settlement_id = settlement.id, "Settlement updated");
        Ok(outcome.into_receipt("Settlement updated successfully"))
    }
}
