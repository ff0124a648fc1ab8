// ============================================================================
// TrackDesk Infrastructure - User Sheet Repository
// File: crates/trackdesk-infrastructure/src/sheets/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;

use trackdesk_core::domain::UserDetails;
use trackdesk_core::error::DomainError;
use trackdesk_core::repositories::UserRepository;
use trackdesk_core::Page;
use trackdesk_shared::Pagination;

use crate::remote::{ReadQuery, Sheet, SheetApiClient};

pub struct SheetUserRepository {
    client: SheetApiClient,
}

impl SheetUserRepository {
    pub fn new(client: SheetApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserRepository for SheetUserRepository {
    async fn list(&self, alias: &str, pagination: Pagination) -> Result<Page<UserDetails>, DomainError> {
        self.client
            .read(alias, Sheet::Users, &ReadQuery::paged(pagination))
            .await
            .map_err(|e| e.into_domain("Failed to fetch users"))
    }

    async fn find_by_id(&self, alias: &str, id: i64) -> Result<Option<UserDetails>, DomainError> {
        let params = ReadQuery { id: Some(id), ..ReadQuery::default() };
        let page: Page<UserDetails> = self
            .client
            .read(alias, Sheet::Users, &params)
            .await
            .map_err(|e| e.into_domain("Failed to fetch user"))?;

        Ok(page.data.into_iter().find(|user| user.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use trackdesk_shared::config::RemoteSettings;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_find_by_id_filters_on_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("sheet", "users"))
            .and(query_param("id", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "users": {
                    "page": 1,
                    "per_page": 10,
                    "total": 1,
                    "data": [{"id": 2, "name": "Bob", "email": "bob@example.com", "role": "agent", "status": "active"}]
                }
            })))
            .mount(&server)
            .await;

        let client = SheetApiClient::new(&RemoteSettings {
            base_url: server.uri(),
            key: "secret".into(),
            timeout_seconds: 5,
        })
        .unwrap();

        let user = SheetUserRepository::new(client).find_by_id("acme", 2).await.unwrap();
        assert_eq!(user.map(|u| u.name), Some("Bob".to_string()));
    }
}
