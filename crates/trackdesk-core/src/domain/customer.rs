//! Customer entity

use serde::{Deserialize, Serialize};

use super::lenient::string_or_number;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    /// Salutation from the tenant's title vocabulary.
    #[serde(default)]
    pub title: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerDraft {
    pub title: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Entry of a dropdown list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: i64,
    pub label: String,
}

impl Customer {
    pub fn select_option(&self) -> SelectOption {
        SelectOption {
            id: self.id,
            label: format!("{} {} ({})", self.title, self.name, self.email),
        }
    }
}
