// ============================================================================
// TrackDesk Core - Settlement Entity
// File: crates/trackdesk-core/src/domain/settlement.rs
// Description: Financial reconciliation attached to a ticket
// ============================================================================

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::activity::ActivityEntry;
use super::lenient::{optional_date, string_or_number};
use super::user::UserDetails;
use crate::embedded::Embedded;
use crate::money;

/// One line of a settlement. It has no id; its position is its identity.
/// Dates may be left blank by the settlement form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementData {
    #[serde(default, with = "optional_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub order_num: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub supplier: String,
    /// Tenant-configured settlement type.
    #[serde(rename = "type", default, deserialize_with = "string_or_number")]
    pub kind: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub invoice_num: String,
    #[serde(default, with = "crate::money::amount")]
    pub total: Decimal,
    #[serde(default, with = "optional_date")]
    pub revision: Option<NaiveDate>,
}

impl SettlementData {
    /// Equality that ignores the revision stamp.
    pub fn same_content(&self, other: &SettlementData) -> bool {
        self.date == other.date
            && self.order_num == other.order_num
            && self.supplier == other.supplier
            && self.kind == other.kind
            && self.invoice_num == other.invoice_num
            && self.total == other.total
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, with = "crate::embedded")]
    pub data: Vec<Embedded<SettlementData>>,
    #[serde(default, with = "crate::embedded")]
    pub activity: Vec<Embedded<ActivityEntry>>,

    #[serde(default, skip_serializing)]
    pub user: Option<UserDetails>,
}

/// Payload of an `add` write.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementDraft {
    pub ticket_id: i64,
    pub user_id: i64,
    #[serde(with = "crate::embedded")]
    pub data: Vec<SettlementData>,
    #[serde(with = "crate::embedded")]
    pub activity: Vec<ActivityEntry>,
}

impl Settlement {
    pub fn total(&self) -> Decimal {
        money::settlement_total(&self.data)
    }

    /// Replace the line items, stamping `revision` with today's date on every
    /// position whose content changed.
    pub fn replace_items(&mut self, mut items: Vec<SettlementData>) {
        stamp_revisions(&self.data, &mut items, Utc::now().date_naive());
        self.data = items.into_iter().map(Embedded::Typed).collect();
    }

    pub fn record(&mut self, entry: ActivityEntry) {
        self.activity.push(entry.into());
    }
}

impl SettlementDraft {
    pub fn new(ticket_id: i64, user_id: i64, actor: &str, items: Vec<SettlementData>) -> Self {
        let created = ActivityEntry::settlement_created(actor, items.len());
        Self {
            ticket_id,
            user_id,
            data: items,
            activity: vec![created],
        }
    }

    pub fn total(&self) -> Decimal {
        self.data.iter().map(|item| item.total).sum()
    }
}

pub fn stamp_revisions(previous: &[Embedded<SettlementData>], items: &mut [SettlementData], today: NaiveDate) {
    for (index, item) in items.iter_mut().enumerate() {
        let unchanged = previous
            .get(index)
            .and_then(Embedded::as_typed)
            .map(|old| old.same_content(item))
            .unwrap_or(false);
        if !unchanged {
            item.revision = Some(today);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn line(supplier: &str, cents: i64) -> SettlementData {
        SettlementData {
            date: Some(day(1)),
            order_num: "PO-1".into(),
            supplier: supplier.into(),
            kind: "Purchase".into(),
            invoice_num: "INV-1".into(),
            total: Decimal::new(cents, 2),
            revision: Some(day(1)),
        }
    }

    #[test]
    fn test_decode_settlement_row() {
        let json = serde_json::json!({
            "id": 4,
            "ticket_id": 12,
            "user_id": 3,
            "data": "[{\"date\":\"2024-01-01\",\"order_num\":1001,\"supplier\":\"Acme\",\"type\":\"Purchase\",\"invoice_num\":\"INV-9\",\"total\":10.5,\"revision\":\"2024-01-01\"}]",
            "activity": ""
        });

        let settlement: Settlement = serde_json::from_value(json).unwrap();
        let item = settlement.data[0].as_typed().unwrap();
        assert_eq!(settlement.data.len(), 1);
        assert_eq!(item.order_num, "1001");
        assert_eq!(item.kind, "Purchase");
        assert_eq!(settlement.total(), Decimal::new(105, 1));
        assert!(settlement.activity.is_empty());
    }

    #[test]
    fn test_encode_uses_type_key_and_numeric_total() {
        let draft = SettlementDraft::new(12, 3, "Sam", vec![line("Acme", 1050)]);
        let encoded = serde_json::to_value(&draft).unwrap();

        let data: serde_json::Value = serde_json::from_str(encoded["data"].as_str().unwrap()).unwrap();
        assert_eq!(data[0]["type"], "Purchase");
        assert_eq!(data[0]["total"], serde_json::json!(10.5));

        let activity: serde_json::Value =
            serde_json::from_str(encoded["activity"].as_str().unwrap()).unwrap();
        assert_eq!(activity[0]["action"], "settlement_created");
        assert_eq!(activity[0]["details"], "Settlement created with 1 items.");
    }

    #[test]
    fn test_revisions_only_move_for_changed_lines() {
        let previous: Vec<Embedded<SettlementData>> =
            vec![line("Acme", 100).into(), line("Globex", 200).into()];
        let mut items = vec![line("Acme", 100), line("Globex", 250), line("Initech", 300)];

        stamp_revisions(&previous, &mut items, day(15));

        assert_eq!(items[0].revision, Some(day(1)));
        assert_eq!(items[1].revision, Some(day(15)));
        assert_eq!(items[2].revision, Some(day(15)));
    }

    #[test]
    fn test_blank_dates_and_odd_items_are_kept_and_counted() {
        let json = serde_json::json!({
            "id": 5,
            "data": r#"[{"date":"2024-01-01","type":"Purchase","total":10.5,"revision":"2024-01-01"},{"date":"","type":"Refund","total":5.25,"revision":""},{"date":"next week","total":"1.25"}]"#,
            "activity": ""
        });

        let mut settlement: Settlement = serde_json::from_value(json).unwrap();
        assert_eq!(settlement.data.len(), 3);
        assert_eq!(settlement.data[1].as_typed().map(|item| item.date), Some(None));
        assert!(settlement.data[2].is_raw());
        assert_eq!(settlement.total(), Decimal::new(1700, 2));

        settlement.record(ActivityEntry::settlement_updated("Sam", 3));
        let encoded = serde_json::to_value(&settlement).unwrap();
        let data: serde_json::Value = serde_json::from_str(encoded["data"].as_str().unwrap()).unwrap();
        assert_eq!(data.as_array().map(Vec::len), Some(3));
        assert_eq!(data[1]["date"], "");
        assert_eq!(data[2]["date"], "next week");
    }
}
