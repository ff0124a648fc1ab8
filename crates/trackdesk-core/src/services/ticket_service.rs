// ============================================================================
// TrackDesk Core - Ticket Service
// File: crates/trackdesk-core/src/services/ticket_service.rs
// ============================================================================
//! Ticket listing, creation, updates and notes

use std::sync::Arc;
use tracing::{info, warn};

use trackdesk_shared::Pagination;

use crate::domain::{ActivityEntry, SessionUser, TenantSettings, Ticket, TicketDraft, TicketNote};
use crate::error::DomainError;
use crate::pagination::{PageView, TicketFilter};
use crate::repositories::{SettingsRepository, TicketQuery, TicketRepository, WriteReceipt};
use crate::vocabulary::VocabularyKind;

/// Editable ticket fields, as submitted by the ticket form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketInput {
    pub title: String,
    pub status: String,
    pub priority: String,
    pub tags: String,
    /// Assignee; defaults to the acting user on creation.
    pub user_id: Option<i64>,
    pub customer_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketListParams {
    pub pagination: Pagination,
    pub filter: TicketFilter,
    pub id: Option<i64>,
}

/// One page of tickets plus the filter dropdown contents.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketListing {
    pub view: PageView<Ticket>,
    pub status_options: Vec<String>,
    pub priority_options: Vec<String>,
}

pub struct TicketService {
    tickets: Arc<dyn TicketRepository>,
    settings: Arc<dyn SettingsRepository>,
}

impl TicketService {
    pub fn new(tickets: Arc<dyn TicketRepository>, settings: Arc<dyn SettingsRepository>) -> Self {
        Self { tickets, settings }
    }

    /// Admins see every ticket of the tenant; everyone else only the tickets
    /// assigned to them. Filters apply to the fetched page only.
    pub async fn list(&self, user: &SessionUser, params: TicketListParams) -> Result<TicketListing, DomainError> {
        let settings = self.settings.fetch(&user.alias).await?;

        let query = TicketQuery {
            pagination: params.pagination,
            user_id: if user.is_admin() { None } else { Some(user.id) },
            id: params.id,
        };
        let page = self.tickets.list(&user.alias, &query).await?;

        let filter = params.filter;
        let view = PageView::filtered(page, |ticket| filter.matches(ticket));

        Ok(TicketListing {
            view,
            status_options: settings.vocabulary(VocabularyKind::Status).filter_options(),
            priority_options: settings.vocabulary(VocabularyKind::Priority).filter_options(),
        })
    }

    pub async fn create(&self, user: &SessionUser, input: TicketInput) -> Result<WriteReceipt<Ticket>, DomainError> {
        let settings = self.settings.fetch(&user.alias).await?;
        let input = validate_input(&settings, input)?;

        let draft = TicketDraft::new(
            input.title,
            input.status,
            input.priority,
            input.tags,
            input.user_id.unwrap_or(user.id),
            input.customer_id,
            Some(user.name.as_str()),
        );

        info!(alias = %user.alias, user_id = user.id, "Creating ticket");
        self.tickets.create(&user.alias, &draft).await
    }

    pub async fn update(
        &self,
        user: &SessionUser,
        id: i64,
        input: TicketInput,
    ) -> Result<WriteReceipt<Ticket>, DomainError> {
        let settings = self.settings.fetch(&user.alias).await?;
        let input = validate_input(&settings, input)?;
        let mut ticket = self.load(user, id).await?;

        ticket.title = input.title;
        ticket.status = input.status;
        ticket.priority = input.priority;
        ticket.tags = input.tags;
        if let Some(assignee) = input.user_id {
            ticket.user_id = Some(assignee);
        }
        ticket.customer_id = Some(input.customer_id);
        ticket.record(ActivityEntry::ticket_updated(&user.name));
        ticket.touch();

        info!(alias = %user.alias, ticket_id = id, "Updating ticket");
        let receipt = self.tickets.update(&user.alias, &ticket).await?;
        Ok(with_local_record(receipt, ticket))
    }

    /// Appends a note and its `note_added` activity, then writes the ticket back.
    pub async fn add_note(
        &self,
        user: &SessionUser,
        id: i64,
        content: &str,
    ) -> Result<WriteReceipt<Ticket>, DomainError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(DomainError::ValidationError("Note content is required".into()));
        }

        let mut ticket = self.load(user, id).await?;
        ticket.append_note(TicketNote::new(user.name.as_str(), content));
        ticket.record(ActivityEntry::note_added(&user.name, content));
        ticket.touch();

        info!(alias = %user.alias, ticket_id = id, notes = ticket.notes.len(), "Adding note to ticket");
        let receipt = self.tickets.update(&user.alias, &ticket).await?;
        Ok(with_local_record(receipt, ticket))
    }

    async fn load(&self, user: &SessionUser, id: i64) -> Result<Ticket, DomainError> {
        let ticket = self
            .tickets
            .find_by_id(&user.alias, id)
            .await?
            .ok_or(DomainError::TicketNotFound(id))?;

        if !user.is_admin() && !ticket.is_assigned_to(user.id) {
            warn!(alias = %user.alias, ticket_id = id, user_id = user.id, "Ticket not assigned to user");
            return Err(DomainError::TicketNotFound(id));
        }
        Ok(ticket)
    }
}

fn validate_input(settings: &TenantSettings, input: TicketInput) -> Result<TicketInput, DomainError> {
    let title = input.title.trim().to_string();
    if title.is_empty() {
        return Err(DomainError::ValidationError("Title is required".into()));
    }

    Ok(TicketInput {
        title,
        status: settings.vocabulary(VocabularyKind::Status).require(&input.status)?,
        priority: settings.vocabulary(VocabularyKind::Priority).require(&input.priority)?,
        tags: settings.vocabulary(VocabularyKind::Tags).require_all(&input.tags)?,
        user_id: input.user_id,
        customer_id: input.customer_id,
    })
}

/// The sheet API does not always echo the record back; fall back to the
/// copy that was just written.
fn with_local_record(receipt: WriteReceipt<Ticket>, written: Ticket) -> WriteReceipt<Ticket> {
    WriteReceipt {
        record: receipt.record.or(Some(written)),
        message: receipt.message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::Page;
    use crate::embedded::Embedded;
    use crate::repositories::{MockSettingsRepository, MockTicketRepository};
    use chrono::{TimeZone, Utc};

    fn settings() -> TenantSettings {
        TenantSettings {
            name: "Acme".into(),
            priority: "low,med,high".into(),
            status: "open,pending,closed".into(),
            tags: "billing,hardware".into(),
            ..TenantSettings::default()
        }
    }

    fn agent() -> SessionUser {
        SessionUser {
            id: 3,
            name: "Alice".into(),
            email: "alice@example.com".into(),
            role: "agent".into(),
            alias: "acme".into(),
        }
    }

    fn ticket(id: i64, status: &str, user_id: i64) -> Ticket {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Ticket {
            id,
            title: format!("Ticket {}", id),
            status: status.into(),
            tags: String::new(),
            user_id: Some(user_id),
            priority: "low".into(),
            customer_id: Some(1),
            notes: vec![
                TicketNote::new_at("Bob", "earlier", at).into(),
                Embedded::Raw(serde_json::json!({"user": "Carol", "content": "typed in the sheet"})),
            ],
            created_at: Some(at),
            updated_at: Some(at),
            activity: vec![
                ActivityEntry::new_at("created", "Bob", "Ticket created", at).into(),
                Embedded::Raw(serde_json::json!({"action": "imported", "timestamp": ""})),
            ],
            user: None,
            customer: None,
            settlements: None,
        }
    }

    fn settings_repo() -> MockSettingsRepository {
        let mut repo = MockSettingsRepository::new();
        repo.expect_fetch().returning(|_| Ok(settings()));
        repo
    }

    fn input(status: &str) -> TicketInput {
        TicketInput {
            title: "  Broken screen ".into(),
            status: status.into(),
            priority: "high".into(),
            tags: "hardware".into(),
            user_id: None,
            customer_id: 9,
        }
    }

    #[tokio::test]
    async fn test_list_scopes_non_admins_and_filters_page() {
        let mut tickets = MockTicketRepository::new();
        tickets
            .expect_list()
            .withf(|alias, query| alias == "acme" && query.user_id == Some(3))
            .returning(|_, _| {
                let mut data: Vec<Ticket> = (1..=8).map(|id| ticket(id, "open", 3)).collect();
                data.push(ticket(9, "closed", 3));
                data.push(ticket(10, "closed", 3));
                Ok(Page { page: 1, per_page: 10, total: 23, data })
            });

        let service = TicketService::new(Arc::new(tickets), Arc::new(settings_repo()));
        let params = TicketListParams {
            pagination: Pagination::default(),
            filter: TicketFilter::new(Some("closed".into()), None),
            id: None,
        };

        let listing = service.list(&agent(), params).await.unwrap();
        assert_eq!(listing.view.shown, 2);
        assert_eq!(listing.view.total, 23);
        assert_eq!(listing.view.total_pages, 3);
        assert_eq!(listing.status_options, vec!["all", "open", "pending", "closed"]);
    }

    #[tokio::test]
    async fn test_list_does_not_scope_admins() {
        let mut tickets = MockTicketRepository::new();
        tickets
            .expect_list()
            .withf(|_, query| query.user_id.is_none())
            .returning(|_, _| Ok(Page::empty(1, 10)));

        let service = TicketService::new(Arc::new(tickets), Arc::new(settings_repo()));
        let admin = SessionUser { role: "admin".into(), ..agent() };

        let listing = service.list(&admin, TicketListParams::default()).await.unwrap();
        assert_eq!(listing.view.total_pages, 0);
    }

    #[tokio::test]
    async fn test_create_builds_draft_with_created_entry() {
        let mut tickets = MockTicketRepository::new();
        tickets
            .expect_create()
            .withf(|alias, draft| {
                alias == "acme"
                    && draft.title == "Broken screen"
                    && draft.user_id == 3
                    && draft.notes.is_empty()
                    && draft.activity.len() == 1
                    && draft.activity[0].action == "created"
                    && draft.activity[0].user == "Alice"
            })
            .times(1)
            .returning(|_, _| Ok(WriteReceipt::new("Ticket added successfully", None)));

        let service = TicketService::new(Arc::new(tickets), Arc::new(settings_repo()));
        let receipt = service.create(&agent(), input("open")).await.unwrap();
        assert_eq!(receipt.message, "Ticket added successfully");
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_status() {
        let mut tickets = MockTicketRepository::new();
        tickets.expect_create().never();

        let service = TicketService::new(Arc::new(tickets), Arc::new(settings_repo()));
        let err = service.create(&agent(), input("escalated")).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::OutOfVocabulary { field: "status", value: "escalated".into() }
        );
    }

    #[tokio::test]
    async fn test_update_appends_activity_and_keeps_history() {
        let mut tickets = MockTicketRepository::new();
        tickets
            .expect_find_by_id()
            .withf(|alias, id| alias == "acme" && *id == 5)
            .returning(|_, id| Ok(Some(ticket(id, "open", 3))));
        tickets
            .expect_update()
            .withf(|_, t| {
                let last = t.activity.last().and_then(Embedded::as_typed);
                t.status == "pending"
                    && t.customer_id == Some(9)
                    && t.notes.len() == 2
                    && t.activity.len() == 3
                    && t.activity[0].as_typed().map(|a| a.user.as_str()) == Some("Bob")
                    && t.activity[1].is_raw()
                    && last.map(|a| a.action.as_str()) == Some("updated")
                    && last.map(|a| a.details.as_str()) == Some("Ticket details updated")
                    && t.updated_at > t.created_at
            })
            .returning(|_, _| Ok(WriteReceipt::new("Ticket updated successfully", None)));

        let service = TicketService::new(Arc::new(tickets), Arc::new(settings_repo()));
        let receipt = service.update(&agent(), 5, input("pending")).await.unwrap();
        assert_eq!(receipt.record.map(|t| t.activity.len()), Some(3));
    }

    #[tokio::test]
    async fn test_add_note_appends_note_and_activity() {
        let mut tickets = MockTicketRepository::new();
        tickets
            .expect_find_by_id()
            .returning(|_, id| Ok(Some(ticket(id, "open", 3))));
        tickets
            .expect_update()
            .withf(|_, t| {
                let added = t.notes.last().and_then(Embedded::as_typed);
                t.notes.len() == 3
                    && t.notes[0].as_typed().map(|n| n.content.as_str()) == Some("earlier")
                    && t.notes[1] == Embedded::Raw(serde_json::json!({"user": "Carol", "content": "typed in the sheet"}))
                    && added.map(|n| n.user.as_str()) == Some("Alice")
                    && added.map(|n| n.content.as_str()) == Some("Customer confirmed the fix")
                    && t.activity.len() == 3
                    && t.activity[1].is_raw()
                    && t.activity.last().and_then(Embedded::as_typed).map(|a| a.action.as_str()) == Some("note_added")
            })
            .returning(|_, _| Ok(WriteReceipt::new("ok", None)));

        let service = TicketService::new(Arc::new(tickets), Arc::new(settings_repo()));
        service
            .add_note(&agent(), 5, "  Customer confirmed the fix ")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_add_note_rejects_blank_content() {
        let tickets = MockTicketRepository::new();
        let service = TicketService::new(Arc::new(tickets), Arc::new(settings_repo()));

        let err = service.add_note(&agent(), 5, "   ").await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_agents_cannot_touch_other_assignees_tickets() {
        let mut tickets = MockTicketRepository::new();
        tickets
            .expect_find_by_id()
            .returning(|_, id| Ok(Some(ticket(id, "open", 99))));
        tickets.expect_update().never();

        let service = TicketService::new(Arc::new(tickets), Arc::new(settings_repo()));
        let err = service.add_note(&agent(), 5, "hello").await.unwrap_err();
        assert_eq!(err, DomainError::TicketNotFound(5));
    }

    #[tokio::test]
    async fn test_unassigned_ticket_is_admin_only() {
        let mut tickets = MockTicketRepository::new();
        tickets.expect_find_by_id().returning(|_, id| {
            let mut row = ticket(id, "open", 3);
            row.user_id = None;
            Ok(Some(row))
        });
        tickets
            .expect_update()
            .times(1)
            .withf(|_, t| t.user_id.is_none() && t.notes.len() == 3)
            .returning(|_, _| Ok(WriteReceipt::new("ok", None)));

        let service = TicketService::new(Arc::new(tickets), Arc::new(settings_repo()));
        let err = service.add_note(&agent(), 5, "hello").await.unwrap_err();
        assert_eq!(err, DomainError::TicketNotFound(5));

        let admin = SessionUser { role: "admin".into(), ..agent() };
        service.add_note(&admin, 5, "hello").await.unwrap();
    }

    #[tokio::test]
    async fn test_remote_failure_is_passed_through() {
        let mut tickets = MockTicketRepository::new();
        tickets
            .expect_create()
            .returning(|_, _| Err(DomainError::Remote("Sheet is locked".into())));

        let service = TicketService::new(Arc::new(tickets), Arc::new(settings_repo()));
        let err = service.create(&agent(), input("open")).await.unwrap_err();
        assert_eq!(err, DomainError::Remote("Sheet is locked".into()));
    }
}
