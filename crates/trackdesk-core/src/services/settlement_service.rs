// ============================================================================
// TrackDesk Core - Settlement Service
// File: crates/trackdesk-core/src/services/settlement_service.rs
// ============================================================================
//! Settlements are only reachable when the tenant has the `settlements`
//! module enabled. Line item types come from the tenant's `type` vocabulary.

use std::sync::Arc;
use tracing::{debug, info};

use trackdesk_shared::Pagination;

use crate::domain::{ActivityEntry, SessionUser, Settlement, SettlementData, SettlementDraft, TenantSettings};
use crate::error::DomainError;
use crate::pagination::PageView;
use crate::repositories::{SettingsRepository, SettlementQuery, SettlementRepository, WriteReceipt};
use crate::vocabulary::VocabularyKind;

pub const SETTLEMENTS_MODULE: &str = "settlements";

pub struct SettlementService {
    settlements: Arc<dyn SettlementRepository>,
    settings: Arc<dyn SettingsRepository>,
}

impl SettlementService {
    pub fn new(settlements: Arc<dyn SettlementRepository>, settings: Arc<dyn SettingsRepository>) -> Self {
        Self { settlements, settings }
    }

    pub async fn list(
        &self,
        user: &SessionUser,
        pagination: Pagination,
        ticket_id: Option<i64>,
        id: Option<i64>,
    ) -> Result<PageView<Settlement>, DomainError> {
        self.enabled_settings(user).await?;

        let query = SettlementQuery { pagination, ticket_id, id };
        let page = self.settlements.list(&user.alias, &query).await?;
        Ok(PageView::from_page(page))
    }

    pub async fn get(&self, user: &SessionUser, id: i64) -> Result<Settlement, DomainError> {
        self.enabled_settings(user).await?;
        self.settlements
            .find_by_id(&user.alias, id)
            .await?
            .ok_or(DomainError::SettlementNotFound(id))
    }

    pub async fn create(
        &self,
        user: &SessionUser,
        ticket_id: i64,
        items: Vec<SettlementData>,
    ) -> Result<WriteReceipt<Settlement>, DomainError> {
        let settings = self.enabled_settings(user).await?;
        let items = validate_items(&settings, items)?;

        let draft = SettlementDraft::new(ticket_id, user.id, &user.name, items);
        info!(
            alias = %user.alias,
            ticket_id,
            items = draft.data.len(),
            total = %draft.total(),
            "Creating settlement"
        );
        self.settlements.create(&user.alias, &draft).await
    }

    /// Replaces the line items; earlier activity is kept and one
    /// `settlement_updated` entry is appended.
    pub async fn update(
        &self,
        user: &SessionUser,
        id: i64,
        items: Vec<SettlementData>,
    ) -> Result<WriteReceipt<Settlement>, DomainError> {
        let settings = self.enabled_settings(user).await?;
        let items = validate_items(&settings, items)?;

        let mut settlement = self
            .settlements
            .find_by_id(&user.alias, id)
            .await?
            .ok_or(DomainError::SettlementNotFound(id))?;

        let count = items.len();
        settlement.replace_items(items);
        settlement.record(ActivityEntry::settlement_updated(&user.name, count));

        info!(alias = %user.alias, settlement_id = id, items = count, "Updating settlement");
        let receipt = self.settlements.update(&user.alias, &settlement).await?;
        Ok(WriteReceipt {
            record: receipt.record.or(Some(settlement)),
            message: receipt.message,
        })
    }

    async fn enabled_settings(&self, user: &SessionUser) -> Result<TenantSettings, DomainError> {
        let settings = self.settings.fetch(&user.alias).await?;
        if let Err(e) = settings.require_module(SETTLEMENTS_MODULE) {
            debug!(alias = %user.alias, "Settlements module disabled");
            return Err(e);
        }
        Ok(settings)
    }
}

fn validate_items(settings: &TenantSettings, items: Vec<SettlementData>) -> Result<Vec<SettlementData>, DomainError> {
    if items.is_empty() {
        return Err(DomainError::ValidationError("A settlement needs at least one item".into()));
    }

    let types = settings.vocabulary(VocabularyKind::Type);
    items
        .into_iter()
        .map(|mut item| {
            item.kind = types.require(&item.kind)?;
            Ok(item)
        })
        .collect()
}
