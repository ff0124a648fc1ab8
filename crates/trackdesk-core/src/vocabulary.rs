//! Tenant-configured vocabularies.
//!
//! Status, priority, settlement type, tags, customer titles and enabled
//! modules are all stored in the tenant's settings row as comma-separated
//! strings. Values written through this service must come from the list;
//! values read from the sheets are never rejected.

use serde::Serialize;

use trackdesk_shared::constants::FILTER_ALL;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabularyKind {
    Priority,
    Type,
    Status,
    Tags,
    Modules,
    Titles,
}

impl VocabularyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Type => "type",
            Self::Status => "status",
            Self::Tags => "tags",
            Self::Modules => "modules",
            Self::Titles => "title",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    kind: VocabularyKind,
    values: Vec<String>,
}

impl Vocabulary {
    /// Splits on commas, trims, drops blanks and duplicates (first wins).
    pub fn parse(kind: VocabularyKind, raw: &str) -> Self {
        let mut values: Vec<String> = Vec::new();
        for value in raw.split(',').map(str::trim).filter(|v| !v.is_empty()) {
            if !values.iter().any(|existing| existing == value) {
                values.push(value.to_string());
            }
        }
        Self { kind, values }
    }

    pub fn kind(&self) -> VocabularyKind {
        self.kind
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// A tenant that configured nothing for this field is unconstrained.
    pub fn is_unconstrained(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        let value = value.trim();
        self.values.iter().any(|v| v == value)
    }

    /// The trimmed value if it belongs to the vocabulary.
    pub fn require(&self, value: &str) -> Result<String, DomainError> {
        let trimmed = value.trim();
        if self.is_unconstrained() || self.contains(trimmed) {
            Ok(trimmed.to_string())
        } else {
            Err(DomainError::OutOfVocabulary {
                field: self.kind.as_str(),
                value: trimmed.to_string(),
            })
        }
    }

    /// Validates a comma-separated list and returns it normalised (`a,b`).
    pub fn require_all(&self, raw: &str) -> Result<String, DomainError> {
        let accepted = raw
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| self.require(v))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(accepted.join(","))
    }

    /// Dropdown entries for a list filter: `all` followed by the vocabulary.
    pub fn filter_options(&self) -> Vec<String> {
        std::iter::once(FILTER_ALL.to_string())
            .chain(self.values.iter().cloned())
            .collect()
    }
}
