use crate::errors::AppError;
use customers_types::domain::customer::Customer;
use customers_types::ports::customer_repository::CustomerRepository;
use std::sync::Arc;

pub struct CustomerQueryService<R: CustomerRepository> {
    repo: Arc<R>,
}

impl<R: CustomerRepository> CustomerQueryService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get_customers(&self) -> Result<Vec<Customer>, AppError> {
        self.repo
            .get_customers()
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use customers_repo::memory::InMemoryRepo;
    use customers_types::domain::customer::Customer;
    use customers_types::ports::customer_repository::CustomerRepository as _;

    #[tokio::test]
    async fn returns_all_saved_records_unaltered() {
        let repo = Arc::new(InMemoryRepo::new());
        for name in ["Alice", "Bob", "Carol"] {
            repo.save(Customer::new(
                name.into(),
                format!("{}@example.com", name.to_lowercase()),
                "NID-9".into(),
                "+4700000000".into(),
            ))
            .await
            .unwrap();
        }

        let svc = CustomerQueryService::new(repo);
        let list = svc.get_customers().await.unwrap();
        assert_eq!(list.len(), 3);
        let mut names: Vec<_> = list.iter().map(|c| c.full_name.clone()).collect();
        names.sort();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
    }

    #[tokio::test]
    async fn empty_store_yields_empty_list() {
        let svc = CustomerQueryService::new(Arc::new(InMemoryRepo::new()));
        let list = svc.get_customers().await.unwrap();
        assert!(list.is_empty());
    }
}
