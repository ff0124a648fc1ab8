//! Per-tenant settings

use serde::{Deserialize, Serialize};

use trackdesk_shared::constants::DEFAULT_CUSTOMER_TITLES;

use crate::error::DomainError;
use crate::vocabulary::{Vocabulary, VocabularyKind};

/// The single row of a tenant's `settings` sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantSettings {
    /// Display name of the tenant.
    pub name: String,
    /// Logo URL.
    pub logo: String,
    pub priority: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub tags: String,
    pub modules: String,
    /// Customer salutations. Tenants without the column use the defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titles: Option<String>,
}

impl TenantSettings {
    pub fn vocabulary(&self, kind: VocabularyKind) -> Vocabulary {
        let raw = match kind {
            VocabularyKind::Priority => self.priority.as_str(),
            VocabularyKind::Type => self.kind.as_str(),
            VocabularyKind::Status => self.status.as_str(),
            VocabularyKind::Tags => self.tags.as_str(),
            VocabularyKind::Modules => self.modules.as_str(),
            VocabularyKind::Titles => self
                .titles
                .as_deref()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or(DEFAULT_CUSTOMER_TITLES),
        };
        Vocabulary::parse(kind, raw)
    }

    /// An empty module list enables every module.
    pub fn module_enabled(&self, module: &str) -> bool {
        let modules = self.vocabulary(VocabularyKind::Modules);
        modules.is_unconstrained()
            || modules.values().iter().any(|m| m.eq_ignore_ascii_case(module))
    }

    pub fn require_module(&self, module: &str) -> Result<(), DomainError> {
        if self.module_enabled(module) {
            Ok(())
        } else {
            Err(DomainError::ModuleDisabled(module.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> TenantSettings {
        serde_json::from_value(serde_json::json!({
            "name": "Acme Support",
            "logo": "https://example.com/logo.png",
            "priority": "low,med,high",
            "type": "Purchase,Refund",
            "status": "open,pending,closed",
            "tags": "billing,hardware",
            "modules": "tickets,customers"
        }))
        .unwrap()
    }

    #[test]
    fn test_vocabularies_come_from_columns() {
        let s = settings();
        assert_eq!(s.vocabulary(VocabularyKind::Type).values(), &["Purchase", "Refund"]);
        assert_eq!(s.vocabulary(VocabularyKind::Status).values().len(), 3);
    }

    #[test]
    fn test_titles_fall_back_to_defaults() {
        let s = settings();
        assert!(s.vocabulary(VocabularyKind::Titles).contains("Prof."));

        let custom = TenantSettings { titles: Some("Sir,Madam".into()), ..settings() };
        assert!(!custom.vocabulary(VocabularyKind::Titles).contains("Prof."));
    }

    #[test]
    fn test_module_gating() {
        let s = settings();
        assert!(s.module_enabled("Tickets"));
        assert_eq!(
            s.require_module("settlements"),
            Err(DomainError::ModuleDisabled("settlements".into()))
        );

        let open = TenantSettings { modules: String::new(), ..settings() };
        assert!(open.module_enabled("settlements"));
    }
}
