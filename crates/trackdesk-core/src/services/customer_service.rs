//! Customer directory service

use std::sync::Arc;
use tracing::info;

use trackdesk_shared::constants::SELECT_OPTIONS_LIMIT;
use trackdesk_shared::Pagination;

use crate::domain::{Customer, CustomerDraft, SelectOption, SessionUser, TenantSettings};
use crate::error::DomainError;
use crate::pagination::PageView;
use crate::repositories::{CustomerQuery, CustomerRepository, SettingsRepository, WriteReceipt};
use crate::vocabulary::VocabularyKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerInput {
    pub title: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

pub struct CustomerService {
    customers: Arc<dyn CustomerRepository>,
    settings: Arc<dyn SettingsRepository>,
}

impl CustomerService {
    pub fn new(customers: Arc<dyn CustomerRepository>, settings: Arc<dyn SettingsRepository>) -> Self {
        Self { customers, settings }
    }

    pub async fn list(
        &self,
        user: &SessionUser,
        pagination: Pagination,
        search: Option<String>,
    ) -> Result<PageView<Customer>, DomainError> {
        let query = CustomerQuery {
            pagination,
            search: search.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
        };
        let page = self.customers.list(&user.alias, &query).await?;
        Ok(PageView::from_page(page))
    }

    /// Dropdown entries for the ticket form, first page only.
    pub async fn options(&self, user: &SessionUser) -> Result<Vec<SelectOption>, DomainError> {
        let query = CustomerQuery {
            pagination: Pagination::new(Some(1), Some(SELECT_OPTIONS_LIMIT)),
            search: None,
        };
        let page = self.customers.list(&user.alias, &query).await?;
        Ok(page.data.iter().map(Customer::select_option).collect())
    }

    /// Salutations accepted by the customer form.
    pub async fn titles(&self, user: &SessionUser) -> Result<Vec<String>, DomainError> {
        let settings = self.settings.fetch(&user.alias).await?;
        Ok(settings.vocabulary(VocabularyKind::Titles).values().to_vec())
    }

    pub async fn create(
        &self,
        user: &SessionUser,
        input: CustomerInput,
    ) -> Result<WriteReceipt<Customer>, DomainError> {
        let settings = self.settings.fetch(&user.alias).await?;
        let input = validate_input(&settings, input)?;

        let draft = CustomerDraft {
            title: input.title,
            name: input.name,
            email: input.email,
            phone: input.phone,
        };

        info!(alias = %user.alias, "Creating customer");
        self.customers.create(&user.alias, &draft).await
    }

    pub async fn update(
        &self,
        user: &SessionUser,
        id: i64,
        input: CustomerInput,
    ) -> Result<WriteReceipt<Customer>, DomainError> {
        let settings = self.settings.fetch(&user.alias).await?;
        let input = validate_input(&settings, input)?;

        let customer = Customer {
            id,
            title: input.title,
            name: input.name,
            email: input.email,
            phone: input.phone,
        };

        info!(alias = %user.alias, customer_id = id, "Updating customer");
        let receipt = self.customers.update(&user.alias, &customer).await?;
        Ok(WriteReceipt {
            record: receipt.record.or(Some(customer)),
            message: receipt.message,
        })
    }
}

fn validate_input(settings: &TenantSettings, input: CustomerInput) -> Result<CustomerInput, DomainError> {
    let name = input.name.trim().to_string();
    if name.is_empty() {
        return Err(DomainError::ValidationError("Customer name is required".into()));
    }

    Ok(CustomerInput {
        title: settings.vocabulary(VocabularyKind::Titles).require(&input.title)?,
        name,
        email: input.email.trim().to_string(),
        phone: input.phone.trim().to_string(),
    })
}
