//! User directory lookups

use std::sync::Arc;

use trackdesk_shared::constants::SELECT_OPTIONS_LIMIT;
use trackdesk_shared::Pagination;

use crate::domain::{SelectOption, SessionUser, UserDetails};
use crate::error::DomainError;
use crate::repositories::UserRepository;

pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Assignee dropdown entries, first page only.
    pub async fn options(&self, user: &SessionUser) -> Result<Vec<SelectOption>, DomainError> {
        let page = self
            .users
            .list(&user.alias, Pagination::new(Some(1), Some(SELECT_OPTIONS_LIMIT)))
            .await?;
        Ok(page.data.iter().map(UserDetails::select_option).collect())
    }

    pub async fn profile(&self, user: &SessionUser) -> Result<Option<UserDetails>, DomainError> {
        self.users.find_by_id(&user.alias, user.id).await
    }
}
