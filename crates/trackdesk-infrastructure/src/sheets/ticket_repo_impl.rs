// ============================================================================
// TrackDesk Infrastructure - Ticket Sheet Repository
// File: crates/trackdesk-infrastructure/src/sheets/ticket_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use tracing::info;

use trackdesk_core::domain::{Ticket, TicketDraft};
use trackdesk_core::error::DomainError;
use trackdesk_core::repositories::{TicketQuery, TicketRepository, WriteReceipt};
use trackdesk_core::Page;
use trackdesk_shared::Pagination;

use crate::remote::{ReadQuery, Sheet, SheetApiClient, WriteAction};

pub struct SheetTicketRepository {
    client: SheetApiClient,
}

impl SheetTicketRepository {
    pub fn new(client: SheetApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TicketRepository for SheetTicketRepository {
    async fn list(&self, alias: &str, query: &TicketQuery) -> Result<Page<Ticket>, DomainError> {
        let params = ReadQuery {
            user_id: query.user_id,
            id: query.id,
            ..ReadQuery::paged(query.pagination).newest_first()
        };

        self.client
            .read(alias, Sheet::Tickets, &params)
            .await
            .map_err(|e| e.into_domain("Failed to fetch tickets"))
    }

    async fn find_by_id(&self, alias: &str, id: i64) -> Result<Option<Ticket>, DomainError> {
        let params = ReadQuery {
            id: Some(id),
            ..ReadQuery::paged(Pagination::new(Some(1), Some(1)))
        };

        let page: Page<Ticket> = self
            .client
            .read(alias, Sheet::Tickets, &params)
            .await
            .map_err(|e| e.into_domain("Failed to fetch ticket"))?;

        Ok(page.data.into_iter().find(|ticket| ticket.id == id))
    }

    async fn create(&self, alias: &str, draft: &TicketDraft) -> Result<WriteReceipt<Ticket>, DomainError> {
        let outcome = self
            .client
            .write(alias, Sheet::Tickets, WriteAction::Add, draft)
            .await
            .map_err(|e| e.into_domain("Failed to add ticket"))?;

        info!(alias, "Ticket added");
        Ok(outcome.into_receipt("Ticket added successfully"))
    }

    async fn update(&self, alias: &str, ticket: &Ticket) -> Result<WriteReceipt<Ticket>, DomainError> {
        let outcome = self
            .client
            .write(alias, Sheet::Tickets, WriteAction::Update, ticket)
            .await
            .map_err(|e| e.into_domain("Failed to update ticket"))?;

        info!(alias, ticket_id = ticket.id, "Ticket updated");
        Ok(outcome.into_receipt("Ticket updated successfully"))
    }
}
