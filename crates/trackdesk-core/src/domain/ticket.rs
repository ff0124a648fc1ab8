// ============================================================================
// TrackDesk Core - Ticket Entity
// File: crates/trackdesk-core/src/domain/ticket.rs
// Description: Support ticket with its note and activity trails
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::activity::ActivityEntry;
use super::customer::Customer;
use super::lenient::{optional_id, optional_timestamp, string_or_number};
use super::note::TicketNote;
use super::settlement::Settlement;
use super::user::UserDetails;
use crate::embedded::Embedded;

/// Ticket as stored in the `tickets` sheet.
///
/// `notes` and `activity` travel as JSON text; once decoded they are always
/// sequences. `status` and `priority` are tenant vocabulary, not enums.
/// Every cell other than `id` may be blank, so a half-filled row is still
/// listed and editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub status: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub tags: String,
    /// Assignee.
    #[serde(default, deserialize_with = "optional_id")]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub priority: String,
    #[serde(default, deserialize_with = "optional_id")]
    pub customer_id: Option<i64>,
    #[serde(default, with = "crate::embedded")]
    pub notes: Vec<Embedded<TicketNote>>,
    #[serde(default, with = "optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::embedded")]
    pub activity: Vec<Embedded<ActivityEntry>>,

    // Read-only expansions attached by the sheet API
    #[serde(default, skip_serializing)]
    pub user: Option<UserDetails>,
    #[serde(default, skip_serializing)]
    pub customer: Option<Customer>,
    #[serde(default, skip_serializing)]
    pub settlements: Option<Vec<Settlement>>,
}

/// Payload of an `add` write; the sheet assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketDraft {
    pub title: String,
    pub status: String,
    pub tags: String,
    pub user_id: i64,
    pub priority: String,
    pub customer_id: i64,
    #[serde(with = "crate::embedded")]
    pub notes: Vec<TicketNote>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(with = "crate::embedded")]
    pub activity: Vec<ActivityEntry>,
}

impl Ticket {
    pub fn tag_list(&self) -> Vec<String> {
        split_tags(&self.tags)
    }

    pub fn is_assigned_to(&self, user_id: i64) -> bool {
        self.user_id == Some(user_id)
    }

    pub fn append_note(&mut self, note: TicketNote) {
        self.notes.push(note.into());
    }

    pub fn record(&mut self, entry: ActivityEntry) {
        self.activity.push(entry.into());
    }

    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

impl TicketDraft {
    /// New ticket with an empty note trail and a single `created` entry.
    pub fn new(
        title: String,
        status: String,
        priority: String,
        tags: String,
        user_id: i64,
        customer_id: i64,
        actor: Option<&str>,
    ) -> Self {
        let now = Utc::now();
        Self {
            title,
            status,
            tags,
            user_id,
            priority,
            customer_id,
            notes: Vec::new(),
            created_at: now,
            updated_at: now,
            activity: vec![ActivityEntry::ticket_created(actor)],
        }
    }
}

pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "id": 12,
            "title": "Printer jammed",
            "status": "open",
            "tags": "hardware, office",
            "user_id": 3,
            "priority": "high",
            "customer_id": 9,
            "notes": "[{\"id\":1,\"user\":\"A\",\"content\":\"hi\",\"created_at\":\"2024-01-01T00:00:00Z\"}]",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z",
            "activity": "not json",
            "user": {"id": 3, "name": "Alice", "email": "alice@example.com", "role": "agent", "status": "active"}
        })
    }

    #[test]
    fn test_decode_sheet_row() {
        let ticket: Ticket = serde_json::from_value(sample_json()).unwrap();

        assert_eq!(ticket.notes.len(), 1);
        assert!(ticket.activity.is_empty());
        assert_eq!(ticket.user_id, Some(3));
        assert_eq!(ticket.tag_list(), vec!["hardware", "office"]);
        assert_eq!(ticket.user.as_ref().map(|u| u.name.as_str()), Some("Alice"));
    }

    #[test]
    fn test_missing_embedded_fields_default_to_empty() {
        let mut json = sample_json();
        let obj = json.as_object_mut().unwrap();
        obj.remove("notes");
        obj.insert("activity".into(), serde_json::Value::Null);

        let ticket: Ticket = serde_json::from_value(json).unwrap();
        assert!(ticket.notes.is_empty());
        assert!(ticket.activity.is_empty());
    }

    #[test]
    fn test_encode_writes_embedded_text_and_drops_expansions() {
        let ticket: Ticket = serde_json::from_value(sample_json()).unwrap();
        let encoded = serde_json::to_value(&ticket).unwrap();

        assert!(encoded["notes"].is_string());
        assert_eq!(encoded["activity"], serde_json::Value::String("[]".into()));
        assert!(encoded.get("user").is_none());
    }

    #[test]
    fn test_appending_keeps_earlier_entries() {
        let mut ticket: Ticket = serde_json::from_value(sample_json()).unwrap();
        let first = ticket.notes[0].clone();
        let at = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();

        ticket.append_note(TicketNote::new_at("B", "second", at));
        ticket.record(ActivityEntry::new_at("note_added", "B", "Added a note: \"second\"", at));

        assert_eq!(ticket.notes.len(), 2);
        assert_eq!(ticket.notes[0], first);
        assert_eq!(ticket.notes[1].as_typed().map(|n| n.user.as_str()), Some("B"));
        assert_eq!(ticket.activity.len(), 1);
    }

    #[test]
    fn test_appending_keeps_misshapen_notes() {
        let mut json = sample_json();
        json["notes"] = serde_json::Value::String(
            r#"[{"id":1,"user":"A","content":"older note","created_at":"2024-01-01T10:00:00"},{"content":"no author"}]"#
                .into(),
        );
        let mut ticket: Ticket = serde_json::from_value(json).unwrap();
        assert!(!ticket.notes[0].is_raw());
        assert!(ticket.notes[1].is_raw());

        let at = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        ticket.append_note(TicketNote::new_at("B", "new", at));

        let encoded = serde_json::to_value(&ticket).unwrap();
        let notes: serde_json::Value = serde_json::from_str(encoded["notes"].as_str().unwrap()).unwrap();
        assert_eq!(notes.as_array().map(Vec::len), Some(3));
        assert_eq!(notes[0]["content"], "older note");
        assert_eq!(notes[1], serde_json::json!({"content": "no author"}));
        assert_eq!(notes[2]["user"], "B");
    }

    #[test]
    fn test_blank_cells_keep_the_row() {
        let mut json = sample_json();
        json["user_id"] = "".into();
        json["customer_id"] = serde_json::Value::Null;
        json["updated_at"] = "".into();
        json["title"] = 404.into();

        let ticket: Ticket = serde_json::from_value(json).unwrap();
        assert_eq!(ticket.user_id, None);
        assert_eq!(ticket.customer_id, None);
        assert_eq!(ticket.updated_at, None);
        assert_eq!(ticket.title, "404");
        assert!(!ticket.is_assigned_to(3));

        let encoded = serde_json::to_value(&ticket).unwrap();
        assert_eq!(encoded["updated_at"], "");
    }

    #[test]
    fn test_draft_starts_with_created_entry() {
        let draft = TicketDraft::new(
            "New".into(),
            "open".into(),
            "low".into(),
            String::new(),
            1,
            2,
            Some("Alice"),
        );

        assert!(draft.notes.is_empty());
        assert_eq!(draft.activity.len(), 1);
        assert_eq!(draft.activity[0].action, "created");
        assert_eq!(draft.created_at, draft.updated_at);
    }
}
