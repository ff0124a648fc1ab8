//! Sheet names, write actions and read filters

use serde::Serialize;

use trackdesk_shared::Pagination;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sheet {
    Tickets,
    Customers,
    Settlements,
    Users,
    Settings,
}

impl Sheet {
    /// Value of the `sheet` parameter; also the key of a read response's page.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tickets => "tickets",
            Self::Customers => "customers",
            Self::Settlements => "settlements",
            Self::Users => "users",
            Self::Settings => "settings",
        }
    }

    /// Key under which a write response echoes the stored record.
    pub fn record_key(&self) -> &'static str {
        match self {
            Self::Tickets => "ticket",
            Self::Customers => "customer",
            Self::Settlements => "settlement",
            Self::Users => "user",
            Self::Settings => "settings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteAction {
    Add,
    Update,
}

/// Optional read parameters; unset fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReadQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "name__contains", skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
}

impl ReadQuery {
    pub fn paged(pagination: Pagination) -> Self {
        Self {
            page: Some(pagination.page),
            limit: Some(pagination.per_page),
            ..Self::default()
        }
    }

    /// Newest first.
    pub fn newest_first(mut self) -> Self {
        self.sort_by = Some("id");
        self.order = Some("desc");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_skips_unset_filters() {
        let query = ReadQuery {
            name_contains: Some("roe".into()),
            ..ReadQuery::paged(Pagination::new(Some(2), Some(10)))
        };

        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, serde_json::json!({"page": 2, "limit": 10, "name__contains": "roe"}));
    }

    #[test]
    fn test_action_names() {
        assert_eq!(serde_json::to_value(WriteAction::Add).unwrap(), "add");
        assert_eq!(serde_json::to_value(WriteAction::Update).unwrap(), "update");
    }
}
