use async_trait::async_trait;
use chrono::Utc;
use customers_types::domain::customer::Customer;
use customers_types::ports::customer_repository::{CustomerRepository, RepoError};
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct InMemoryRepo {
    pub map: Arc<DashMap<Uuid, Customer>>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            map: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryRepo {
    async fn save(&self, mut customer: Customer) -> Result<Customer, RepoError> {
        // Timestamps are owned by the persistence layer.
        let now = Utc::now();
        customer.created_on.get_or_insert(now);
        customer.modified_on = Some(now);
        self.map.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn get_customers(&self) -> Result<Vec<Customer>, RepoError> {
        Ok(self.map.iter().map(|kv| kv.value().clone()).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, RepoError> {
        Ok(self.map.get(&id).map(|r| r.clone()))
    }

    async fn find_by_name(&self, full_name: &str) -> Result<Option<Customer>, RepoError> {
        Ok(self
            .map
            .iter()
            .find(|kv| kv.value().full_name == full_name)
            .map(|kv| kv.value().clone()))
    }
}
