#[cfg(not(any(feature = "memory", feature = "sqlite")))]
compile_error!("Enable a repo feature: `memory` or `sqlite`.");

use customers_types::domain::customer::Customer;
use customers_types::ports::customer_repository::{CustomerRepository, RepoError};
use uuid::Uuid;

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub struct Repo {
    #[cfg(all(feature = "memory", not(feature = "sqlite")))]
    memory: memory::InMemoryRepo,
    #[cfg(feature = "sqlite")]
    sqlite: sqlite::SqliteRepo,
}

pub async fn build_repo(url: Option<&str>) -> anyhow::Result<Repo> {
    Repo::build_repo(url).await
}

impl Repo {
    #[cfg(all(feature = "memory", not(feature = "sqlite")))]
    pub async fn build_repo(_: Option<&str>) -> anyhow::Result<Self> {
        Ok(Self {
            memory: crate::memory::InMemoryRepo::new(),
        })
    }

    #[cfg(all(feature = "sqlite", not(feature = "memory")))]
    pub async fn build_repo(database_url: Option<&str>) -> anyhow::Result<Self> {
        let url = database_url.unwrap_or("sqlite://customers.db");
        let sqlite = sqlite::SqliteRepo::new(url).await?;
        Ok(Self { sqlite })
    }

    // If both features are enabled, sqlite backs the data.
    #[cfg(all(feature = "sqlite", feature = "memory"))]
    pub async fn build_repo(database_url: Option<&str>) -> anyhow::Result<Self> {
        let url = database_url.unwrap_or("sqlite://customers.db");
        let sqlite = sqlite::SqliteRepo::new(url).await?;
        Ok(Self { sqlite })
    }
}

#[cfg(all(feature = "memory", not(feature = "sqlite")))]
#[async_trait::async_trait]
impl CustomerRepository for Repo {
    async fn save(&self, customer: Customer) -> Result<Customer, RepoError> {
        self.memory.save(customer).await
    }

    async fn get_customers(&self) -> Result<Vec<Customer>, RepoError> {
        self.memory.get_customers().await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, RepoError> {
        self.memory.find_by_id(id).await
    }

    async fn find_by_name(&self, full_name: &str) -> Result<Option<Customer>, RepoError> {
        self.memory.find_by_name(full_name).await
    }
}

#[cfg(feature = "sqlite")]
#[async_trait::async_trait]
impl CustomerRepository for Repo {
    async fn save(&self, customer: Customer) -> Result<Customer, RepoError> {
        self.sqlite.save(customer).await
    }

    async fn get_customers(&self) -> Result<Vec<Customer>, RepoError> {
        self.sqlite.get_customers().await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, RepoError> {
        self.sqlite.find_by_id(id).await
    }

    async fn find_by_name(&self, full_name: &str) -> Result<Option<Customer>, RepoError> {
        self.sqlite.find_by_name(full_name).await
    }
}
