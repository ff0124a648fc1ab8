// ============================================================================
// TrackDesk API - DTOs
// File: crates/trackdesk-api/src/dto.rs
// ============================================================================
//! Request payloads and response views.
//!
//! Records travel to the sheet with their nested trails as JSON text; views
//! expose them to the browser as plain arrays.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use trackdesk_core::money::format_amount;
use trackdesk_core::services::{CustomerInput, DashboardSummary, TicketInput};
use trackdesk_core::vocabulary::VocabularyKind;
use trackdesk_core::{
    ActivityEntry, Customer, Embedded, SessionUser, Settlement, SettlementData, TenantSettings, Ticket,
    TicketNote, UserDetails,
};
use trackdesk_shared::Pagination;

// ----------------------------------------------------------------------------
// Query strings
// ----------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct TicketListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub id: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CustomerListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SettlementListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub ticket_id: Option<i64>,
    pub id: Option<i64>,
}

impl TicketListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.per_page)
    }
}

impl CustomerListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.per_page)
    }
}

impl SettlementListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.per_page)
    }
}

// ----------------------------------------------------------------------------
// Request payloads
// ----------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct TicketRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
    #[validate(length(min = 1, message = "Priority is required"))]
    pub priority: String,
    #[serde(default)]
    pub tags: String,
    /// Assignee; the acting user when omitted.
    pub user_id: Option<i64>,
    pub customer_id: i64,
}

impl From<TicketRequest> for TicketInput {
    fn from(req: TicketRequest) -> Self {
        TicketInput {
            title: req.title,
            status: req.status,
            priority: req.priority,
            tags: req.tags,
            user_id: req.user_id,
            customer_id: req.customer_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct NoteRequest {
    #[validate(length(min = 1, max = 5000, message = "Note must be 1-5000 characters"))]
    pub content: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CustomerRequest {
    #[serde(default)]
    pub title: String,
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 40))]
    pub phone: String,
}

impl From<CustomerRequest> for CustomerInput {
    fn from(req: CustomerRequest) -> Self {
        CustomerInput {
            title: req.title,
            name: req.name,
            email: req.email,
            phone: req.phone,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct SettlementItemRequest {
    /// A cleared date input arrives as `""`.
    #[serde(default, with = "trackdesk_core::domain::lenient::optional_date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub order_num: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub supplier: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub invoice_num: String,
    #[serde(with = "trackdesk_core::money::amount")]
    pub total: Decimal,
    /// Kept as sent; changed positions are re-stamped on update.
    pub revision: Option<NaiveDate>,
}

impl From<SettlementItemRequest> for SettlementData {
    fn from(req: SettlementItemRequest) -> Self {
        SettlementData {
            date: req.date,
            order_num: req.order_num,
            supplier: req.supplier,
            kind: req.kind,
            invoice_num: req.invoice_num,
            total: req.total,
            revision: Some(req.revision.unwrap_or_else(|| Utc::now().date_naive())),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSettlementRequest {
    pub ticket_id: i64,
    #[validate(length(min = 1, message = "At least one item is required"), nested)]
    pub items: Vec<SettlementItemRequest>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSettlementRequest {
    #[validate(length(min = 1, message = "At least one item is required"), nested)]
    pub items: Vec<SettlementItemRequest>,
}

pub fn into_items(items: Vec<SettlementItemRequest>) -> Vec<SettlementData> {
    items.into_iter().map(SettlementData::from).collect()
}

// ----------------------------------------------------------------------------
// Views
// ----------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct TicketView {
    pub id: i64,
    pub title: String,
    pub status: String,
    pub priority: String,
    pub tags: Vec<String>,
    pub user_id: Option<i64>,
    pub customer_id: Option<i64>,
    pub notes: Vec<Embedded<TicketNote>>,
    pub activity: Vec<Embedded<ActivityEntry>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlements: Option<Vec<SettlementView>>,
}

impl From<Ticket> for TicketView {
    fn from(ticket: Ticket) -> Self {
        Self {
            tags: ticket.tag_list(),
            id: ticket.id,
            title: ticket.title,
            status: ticket.status,
            priority: ticket.priority,
            user_id: ticket.user_id,
            customer_id: ticket.customer_id,
            notes: ticket.notes,
            activity: ticket.activity,
            created_at: ticket.created_at.map(|at| at.to_rfc3339()),
            updated_at: ticket.updated_at.map(|at| at.to_rfc3339()),
            user: ticket.user,
            customer: ticket.customer,
            settlements: ticket
                .settlements
                .map(|list| list.into_iter().map(SettlementView::from).collect()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SettlementView {
    pub id: i64,
    pub ticket_id: Option<i64>,
    pub user_id: Option<i64>,
    pub items: Vec<Embedded<SettlementData>>,
    pub activity: Vec<Embedded<ActivityEntry>>,
    /// Sum of the item totals, two decimals.
    pub total: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDetails>,
}

impl From<Settlement> for SettlementView {
    fn from(settlement: Settlement) -> Self {
        Self {
            total: format_amount(settlement.total()),
            id: settlement.id,
            ticket_id: settlement.ticket_id,
            user_id: settlement.user_id,
            items: settlement.data,
            activity: settlement.activity,
            user: settlement.user,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SettingsView {
    pub name: String,
    pub logo: String,
    pub priorities: Vec<String>,
    pub types: Vec<String>,
    pub statuses: Vec<String>,
    pub tags: Vec<String>,
    pub modules: Vec<String>,
    pub titles: Vec<String>,
    pub settlements_enabled: bool,
}

impl From<TenantSettings> for SettingsView {
    fn from(settings: TenantSettings) -> Self {
        let values = |kind| settings.vocabulary(kind).values().to_vec();
        Self {
            priorities: values(VocabularyKind::Priority),
            types: values(VocabularyKind::Type),
            statuses: values(VocabularyKind::Status),
            tags: values(VocabularyKind::Tags),
            modules: values(VocabularyKind::Modules),
            titles: values(VocabularyKind::Titles),
            settlements_enabled: settings.module_enabled(trackdesk_core::services::SETTLEMENTS_MODULE),
            name: settings.name.clone(),
            logo: settings.logo.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MeView {
    pub user: SessionUser,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserDetails>,
}

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub ticket_total: u64,
    pub customer_total: u64,
    pub recent_tickets: Vec<TicketView>,
    pub recent_customers: Vec<Customer>,
}

impl From<DashboardSummary> for DashboardView {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            ticket_total: summary.ticket_total,
            customer_total: summary.customer_total,
            recent_tickets: summary.recent_tickets.into_iter().map(TicketView::from).collect(),
            recent_customers: summary.recent_customers,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TicketListView {
    #[serde(flatten)]
    pub page: trackdesk_core::PageView<TicketView>,
    pub status_options: Vec<String>,
    pub priority_options: Vec<String>,
}
