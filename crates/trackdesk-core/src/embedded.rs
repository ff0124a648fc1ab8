//! Codec for sequences stored as JSON text inside sheet records.
//!
//! The remote sheets keep ticket notes, ticket activity, settlement line
//! items and settlement activity as a string column holding a JSON array.
//! Decoding never fails: anything that is not an array yields an empty
//! sequence and the problem is only logged. Elements of the array are never
//! dropped. Those that do not fit the record type are kept as [`Embedded::Raw`]
//! and written back untouched, so a full-sequence write never erases entries
//! another client stored.
//!
//! The serde adapter in this module is meant for `#[serde(default, with = "crate::embedded")]`
//! on `Vec<Embedded<_>>` fields (and plain `Vec<_>` fields that are only
//! serialized). Besides the string form it also accepts a native JSON array
//! and `null`.

use serde::de::DeserializeOwned;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::{debug, warn};

/// One element of an embedded sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Embedded<T> {
    Typed(T),
    /// Stored element that does not decode as `T`, kept verbatim.
    Raw(Value),
}

impl<T> Embedded<T> {
    pub fn as_typed(&self) -> Option<&T> {
        match self {
            Embedded::Typed(record) => Some(record),
            Embedded::Raw(_) => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Embedded::Raw(_))
    }
}

impl<T> From<T> for Embedded<T> {
    fn from(record: T) -> Self {
        Embedded::Typed(record)
    }
}

/// Decode a string column holding a JSON array.
///
/// `field` only labels the diagnostic log line.
pub fn parse_embedded<T: DeserializeOwned>(raw: &str, field: &str) -> Vec<Embedded<T>> {
    if raw.trim().is_empty() {
        debug!(field, "Embedded field is empty");
        return Vec::new();
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(value) => decode_value(value, field),
        Err(e) => {
            warn!(field, error = %e, "Failed to parse embedded JSON field");
            Vec::new()
        }
    }
}

/// Decode an already-parsed JSON value into a sequence of records.
pub fn decode_value<T: DeserializeOwned>(value: Value, field: &str) -> Vec<Embedded<T>> {
    match value {
        Value::Array(items) => decode_elements(items, field),
        Value::String(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => decode_elements(items, field),
            Ok(other) => {
                warn!(field, kind = json_kind(&other), "Embedded JSON field is not an array");
                Vec::new()
            }
            Err(_) if raw.trim().is_empty() => Vec::new(),
            Err(e) => {
                warn!(field, error = %e, "Failed to parse embedded JSON field");
                Vec::new()
            }
        },
        Value::Null => Vec::new(),
        other => {
            warn!(field, kind = json_kind(&other), "Embedded JSON field is not an array");
            Vec::new()
        }
    }
}

fn decode_elements<T: DeserializeOwned>(items: Vec<Value>, field: &str) -> Vec<Embedded<T>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match serde_json::from_value::<T>(item.clone()) {
            Ok(record) => Embedded::Typed(record),
            Err(e) => {
                warn!(field, index, error = %e, "Keeping unrecognised element of embedded JSON field as is");
                Embedded::Raw(item)
            }
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Encode a sequence as the JSON text stored in the sheet column.
pub fn encode_embedded<T: Serialize>(items: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}

pub fn serialize<T, S>(items: &[T], serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    let raw = encode_embedded(items).map_err(S::Error::custom)?;
    serializer.serialize_str(&raw)
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Vec<Embedded<T>>, D::Error>
where
    T: DeserializeOwned,
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(decode_value(value.unwrap_or(Value::Null), "embedded"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ActivityEntry, TicketNote};
    use chrono::{TimeZone, Utc};

    fn typed<T: Clone>(items: &[Embedded<T>]) -> Vec<T> {
        items.iter().filter_map(Embedded::as_typed).cloned().collect()
    }

    #[test]
    fn test_parse_single_note() {
        let raw = r#"[{"id":1,"user":"A","content":"hi","created_at":"2024-01-01T00:00:00Z"}]"#;
        let notes = typed(&parse_embedded::<TicketNote>(raw, "notes"));

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, 1);
        assert_eq!(notes[0].user, "A");
        assert_eq!(notes[0].content, "hi");
        assert_eq!(notes[0].created_at, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_malformed_input_yields_empty() {
        let samples = ["not json", "", "   ", "{", "[1, 2", "null", "42", "\"text\"", r#"{"id":1}"#];

        for raw in samples {
            let notes: Vec<Embedded<TicketNote>> = parse_embedded(raw, "notes");
            assert!(notes.is_empty(), "expected empty sequence for {:?}", raw);
        }
    }

    #[test]
    fn test_misshapen_elements_are_kept_in_place() {
        let raw = r#"[
            {"timestamp":"2024-01-01T00:00:00Z","action":"created","user":"A","details":"Ticket created"},
            "garbage",
            {"timestamp":"","action":"updated","user":"B"}
        ]"#;
        let activity: Vec<Embedded<ActivityEntry>> = parse_embedded(raw, "activity");

        assert_eq!(activity.len(), 3);
        assert_eq!(activity[0].as_typed().map(|a| a.action.as_str()), Some("created"));
        assert_eq!(activity[1], Embedded::Raw(Value::String("garbage".into())));
        assert!(activity[2].is_raw());
    }

    #[test]
    fn test_raw_elements_are_written_back_verbatim() {
        let raw = r#"[{"id":1,"user":"A","content":"older note","created_at":"last tuesday"},42]"#;
        let mut notes: Vec<Embedded<TicketNote>> = parse_embedded(raw, "notes");
        let at = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        notes.push(TicketNote::new_at("B", "new", at).into());

        let written: Value = serde_json::from_str(&encode_embedded(&notes).unwrap()).unwrap();
        assert_eq!(written.as_array().map(Vec::len), Some(3));
        assert_eq!(written[0]["content"], "older note");
        assert_eq!(written[0]["created_at"], "last tuesday");
        assert_eq!(written[1], 42);
        assert_eq!(written[2]["content"], "new");
    }

    #[test]
    fn test_decode_accepts_native_array_and_double_encoding() {
        let native = serde_json::json!([
            {"id": 7, "user": "A", "content": "x", "created_at": "2024-01-01T00:00:00Z"}
        ]);
        let notes: Vec<Embedded<TicketNote>> = decode_value(native.clone(), "notes");
        assert_eq!(notes.len(), 1);

        let as_string = Value::String(native.to_string());
        let notes = typed(&decode_value::<TicketNote>(as_string, "notes"));
        assert_eq!(notes[0].id, 7);
    }

    #[test]
    fn test_encode_then_parse_preserves_order() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let notes = vec![
            TicketNote::new_at("A", "first", at),
            TicketNote::new_at("B", "second", at + chrono::Duration::seconds(1)),
        ];

        let raw = encode_embedded(&notes).unwrap();
        let parsed = typed(&parse_embedded::<TicketNote>(&raw, "notes"));
        assert_eq!(parsed, notes);
    }
}
