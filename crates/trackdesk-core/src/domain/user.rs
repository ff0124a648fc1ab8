//! User identities

use serde::{Deserialize, Serialize};

use trackdesk_shared::constants::ADMIN_ROLE;

use super::customer::SelectOption;

/// Identity carried by the session cookie: `{id, name, email, role, alias}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    /// Tenant the user belongs to.
    pub alias: String,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case(ADMIN_ROLE)
    }
}

/// Row of the `users` sheet, also embedded as the `user` expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: String,
}

impl UserDetails {
    pub fn select_option(&self) -> SelectOption {
        SelectOption {
            id: self.id,
            label: format!("{} ({})", self.name, self.role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_role_is_case_insensitive() {
        let mut user = SessionUser {
            id: 1,
            name: "Root".into(),
            email: "root@example.com".into(),
            role: "Admin".into(),
            alias: "acme".into(),
        };
        assert!(user.is_admin());

        user.role = "agent".into();
        assert!(!user.is_admin());
    }
}
