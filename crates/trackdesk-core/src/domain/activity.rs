//! Activity log entries shared by tickets and settlements

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const NOTE_PREVIEW_CHARS: usize = 30;

/// Action tags written by this service. The stored `action` stays a free
/// string, so entries written by other clients keep whatever tag they used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityAction {
    Created,
    Updated,
    NoteAdded,
    SettlementCreated,
    SettlementUpdated,
}

impl ActivityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::NoteAdded => "note_added",
            Self::SettlementCreated => "settlement_created",
            Self::SettlementUpdated => "settlement_updated",
        }
    }
}

impl From<ActivityAction> for String {
    fn from(action: ActivityAction) -> Self {
        action.as_str().to_string()
    }
}

/// One immutable line of an audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    #[serde(with = "super::lenient::timestamp")]
    pub timestamp: DateTime<Utc>,
    pub action: String,
    pub user: String,
    #[serde(default)]
    pub details: String,
}

pub type TicketActivity = ActivityEntry;
pub type SettlementActivity = ActivityEntry;

impl ActivityEntry {
    pub fn new(action: impl Into<String>, user: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new_at(action, user, details, Utc::now())
    }

    pub fn new_at(
        action: impl Into<String>,
        user: impl Into<String>,
        details: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp: at,
            action: action.into(),
            user: user.into(),
            details: details.into(),
        }
    }

    /// `actor` falls back to `system` when no user name is known.
    pub fn ticket_created(actor: Option<&str>) -> Self {
        let actor = actor.filter(|name| !name.trim().is_empty()).unwrap_or("system");
        Self::new(ActivityAction::Created, actor, "Ticket created")
    }

    pub fn ticket_updated(actor: &str) -> Self {
        Self::new(ActivityAction::Updated, actor, "Ticket details updated")
    }

    pub fn note_added(actor: &str, content: &str) -> Self {
        Self::new(ActivityAction::NoteAdded, actor, note_added_details(content))
    }

    pub fn settlement_created(actor: &str, item_count: usize) -> Self {
        Self::new(
            ActivityAction::SettlementCreated,
            actor,
            format!("Settlement created with {} items.", item_count),
        )
    }

    pub fn settlement_updated(actor: &str, item_count: usize) -> Self {
        Self::new(
            ActivityAction::SettlementUpdated,
            actor,
            format!("Settlement updated with {} items.", item_count),
        )
    }
}

/// `Added a note: "<first 30 chars>"`, with an ellipsis when the note was cut.
pub fn note_added_details(content: &str) -> String {
    let content = content.trim();
    let preview: String = content.chars().take(NOTE_PREVIEW_CHARS).collect();
    let ellipsis = if content.chars().count() > NOTE_PREVIEW_CHARS { "..." } else { "" };
    format!("Added a note: \"{}{}\"", preview, ellipsis)
}
