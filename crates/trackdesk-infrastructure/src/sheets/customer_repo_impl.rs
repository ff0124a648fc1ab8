// ============================================================================
// TrackDesk Infrastructure - Customer Sheet Repository
// File: crates/trackdesk-infrastructure/src/sheets/customer_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use tracing::info;

use trackdesk_core::domain::{Customer, CustomerDraft};
use trackdesk_core::error::DomainError;
use trackdesk_core::repositories::{CustomerQuery, CustomerRepository, WriteReceipt};
use trackdesk_core::Page;

use crate::remote::{ReadQuery, Sheet, SheetApiClient, WriteAction};

pub struct SheetCustomerRepository {
    client: SheetApiClient,
}

impl SheetCustomerRepository {
    pub fn new(client: SheetApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CustomerRepository for SheetCustomerRepository {
    async fn list(&self, alias: &str, query: &CustomerQuery) -> Result<Page<Customer>, DomainError> {
        let params = ReadQuery {
            name_contains: query.search.clone(),
            ..ReadQuery::paged(query.pagination)
        };

        self.client
            .read(alias, Sheet::Customers, &params)
            .await
            .map_err(|e| e.into_domain("Failed to fetch customers"))
    }

    async fn create(&self, alias: &str, draft: &CustomerDraft) -> Result<WriteReceipt<Customer>, DomainError> {
        let outcome = self
            .client
            .write(alias, Sheet::Customers, WriteAction::Add, draft)
            .await
            .map_err(|e| e.into_domain("Failed to add customer"))?;

        info!(alias, "Customer added");
        Ok(outcome.into_receipt("Customer added successfully"))
    }

    async fn update(&self, alias: &str, customer: &Customer) -> Result<WriteReceipt<Customer>, DomainError> {
        let outcome = self
            .client
            .write(alias, Sheet::Customers, WriteAction::Update, customer)
            .await
            .map_err(|e| e.into_domain("Failed to update customer"))?;

        info!(alias, customer_id = customer.id, "Customer updated");
        Ok(outcome.into_receipt("Customer updated successfully"))
    }
}
