use crate::errors::AppError;
use customers_types::domain::customer::{CreateCustomerCommand, Customer};
use customers_types::ports::customer_repository::CustomerRepository;
use std::sync::Arc;

/// Handles the create path: map the command to a domain record and delegate
/// to the repository. Every downstream failure collapses to a client error.
pub struct CustomerCommandService<R: CustomerRepository> {
    repo: Arc<R>,
}

impl<R: CustomerRepository> CustomerCommandService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, command: CreateCustomerCommand) -> Result<Customer, AppError> {
        let customer = Customer::from(command);
        self.repo
            .save(customer)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))
    }
}
