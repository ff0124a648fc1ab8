//! Ticket note entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free-text note on a ticket. Notes are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketNote {
    /// Milliseconds since the epoch at creation time.
    pub id: i64,
    pub user: String,
    pub content: String,
    #[serde(with = "super::lenient::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl TicketNote {
    pub fn new(user: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new_at(user, content, Utc::now())
    }

    pub fn new_at(user: impl Into<String>, content: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            id: at.timestamp_millis(),
            user: user.into(),
            content: content.into(),
            created_at: at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_note_id_is_derived_from_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let note = TicketNote::new_at("Alice", "Called the customer", at);

        assert_eq!(note.id, 1_704_067_200_000);
        assert_eq!(note.user, "Alice");
        assert_eq!(note.created_at, at);
    }

    #[test]
    fn test_created_at_without_offset_reads_as_utc() {
        let note: TicketNote = serde_json::from_str(
            r#"{"id":1,"user":"A","content":"older note","created_at":"2024-01-01T10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(note.created_at, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());

        let encoded = serde_json::to_value(&note).unwrap();
        assert_eq!(encoded["created_at"], "2024-01-01T10:00:00Z");
    }
}
