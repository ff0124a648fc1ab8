//! Settlement amounts.
//!
//! Amounts are fixed-point decimals so that summing many line items never
//! drifts. The sheet stores them as plain JSON numbers; some rows written by
//! hand hold numeric strings instead, so the decoder accepts both.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use serde_json::Value;

use crate::domain::SettlementData;
use crate::embedded::Embedded;

/// Sum of every line item's `total`, including items kept as stored.
pub fn settlement_total(items: &[Embedded<SettlementData>]) -> Decimal {
    items.iter().map(line_total).sum()
}

/// A stored item's `total`; unreadable amounts count as zero.
pub fn line_total(item: &Embedded<SettlementData>) -> Decimal {
    match item {
        Embedded::Typed(item) => item.total,
        Embedded::Raw(value) => {
            let amount = match value.get("total") {
                Some(Value::Number(n)) => parse_amount(&n.to_string()),
                Some(Value::String(s)) => parse_amount(s),
                _ => None,
            };
            amount.unwrap_or(Decimal::ZERO)
        }
    }
}

/// Two-decimal rendering used wherever an amount is displayed.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(Decimal::ZERO);
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Serde adapter: JSON number (or numeric string) <-> `Decimal`.
pub mod amount {
    use rust_decimal::Decimal;
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    use super::{parse_amount, ToPrimitive};

    pub fn serialize<S: Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        let value = amount
            .to_f64()
            .ok_or_else(|| S::Error::custom(format!("amount out of range: {}", amount)))?;
        serializer.serialize_f64(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Decimal::ZERO),
            Value::Number(n) => parse_amount(&n.to_string())
                .ok_or_else(|| D::Error::custom(format!("invalid amount: {}", n))),
            Value::String(s) => {
                parse_amount(&s).ok_or_else(|| D::Error::custom(format!("invalid amount: {:?}", s)))
            }
            other => Err(D::Error::custom(format!("invalid amount: {}", other))),
        }
    }
}
