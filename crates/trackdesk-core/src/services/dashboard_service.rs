//! Dashboard summary: most recent tickets and customers

use std::sync::Arc;

use trackdesk_shared::constants::DASHBOARD_RECENT_LIMIT;
use trackdesk_shared::Pagination;

use crate::domain::{Customer, SessionUser, Ticket};
use crate::error::DomainError;
use crate::repositories::{CustomerQuery, CustomerRepository, TicketQuery, TicketRepository};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub ticket_total: u64,
    pub customer_total: u64,
    pub recent_tickets: Vec<Ticket>,
    pub recent_customers: Vec<Customer>,
}

pub struct DashboardService {
    tickets: Arc<dyn TicketRepository>,
    customers: Arc<dyn CustomerRepository>,
}

impl DashboardService {
    pub fn new(tickets: Arc<dyn TicketRepository>, customers: Arc<dyn CustomerRepository>) -> Self {
        Self { tickets, customers }
    }

    /// Both reads go out concurrently; either failure fails the summary.
    pub async fn summary(&self, user: &SessionUser) -> Result<DashboardSummary, DomainError> {
        let pagination = Pagination::new(Some(1), Some(DASHBOARD_RECENT_LIMIT));
        let ticket_query = TicketQuery { pagination, ..TicketQuery::default() };
        let customer_query = CustomerQuery { pagination, search: None };

        let (tickets, customers) = tokio::try_join!(
            self.tickets.list(&user.alias, &ticket_query),
            self.customers.list(&user.alias, &customer_query),
        )?;

        Ok(DashboardSummary {
            ticket_total: tickets.total,
            customer_total: customers.total,
            recent_tickets: tickets.data,
            recent_customers: customers.data,
        })
    }
}
