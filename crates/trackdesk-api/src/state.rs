use std::sync::Arc;

use trackdesk_core::repositories::{
    CustomerRepository, SettingsRepository, SettlementRepository, TicketRepository, UserRepository,
};
use trackdesk_core::services::{CustomerService, DashboardService, SettlementService, TicketService, UserService};
use trackdesk_shared::config::AppConfig;

/// Repository adapters the services are built from.
#[derive(Clone)]
pub struct Repositories {
    pub tickets: Arc<dyn TicketRepository>,
    pub customers: Arc<dyn CustomerRepository>,
    pub settlements: Arc<dyn SettlementRepository>,
    pub users: Arc<dyn UserRepository>,
    pub settings: Arc<dyn SettingsRepository>,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub settings: Arc<dyn SettingsRepository>,
    pub tickets: Arc<TicketService>,
    pub customers: Arc<CustomerService>,
    pub settlements: Arc<SettlementService>,
    pub users: Arc<UserService>,
    pub dashboard: Arc<DashboardService>,
}

impl AppState {
    pub fn new(config: AppConfig, repos: Repositories) -> Self {
        Self {
            config: Arc::new(config),
            settings: repos.settings.clone(),
            tickets: Arc::new(TicketService::new(repos.tickets.clone(), repos.settings.clone())),
            customers: Arc::new(CustomerService::new(repos.customers.clone(), repos.settings.clone())),
            settlements: Arc::new(SettlementService::new(repos.settlements, repos.settings.clone())),
            users: Arc::new(UserService::new(repos.users)),
            dashboard: Arc::new(DashboardService::new(repos.tickets, repos.customers)),
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.config.session.cookie_name
    }

    pub fn secure_cookies(&self) -> bool {
        self.config.app.is_production()
    }
}
