use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::customer::Customer;

#[derive(thiserror::Error, Debug)]
pub enum RepoError {
    #[error("db error: {0}")]
    DbError(String),
}

#[async_trait]
pub trait CustomerRepository: Send + Sync + 'static {
    /// Insert a customer; the adapter assigns the timestamps and returns the
    /// stored record.
    async fn save(&self, customer: Customer) -> Result<Customer, RepoError>;
    async fn get_customers(&self) -> Result<Vec<Customer>, RepoError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, RepoError>;
    async fn find_by_name(&self, full_name: &str) -> Result<Option<Customer>, RepoError>;
}
