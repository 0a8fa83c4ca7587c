use async_trait::async_trait;
use chrono::{DateTime, Utc};
use customers_types::domain::customer::{Customer, CustomerStatus};
use customers_types::ports::customer_repository::{CustomerRepository, RepoError};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;
use uuid::Uuid;

pub struct SqliteRepo {
    pool: SqlitePool,
}

#[derive(FromRow)]
struct DbCustomer {
    id: String,
    full_name: String,
    email: String,
    national_id: String,
    phone_number: String,
    status: String,
    created_at: String,
    updated_at: String,
}

impl DbCustomer {
    fn into_customer(self) -> Result<Customer, RepoError> {
        let status = match self.status.as_str() {
            "ACTIVE" => CustomerStatus::Active,
            "INACTIVE" => CustomerStatus::Inactive,
            "PENDING_KYC" => CustomerStatus::PendingKyc,
            _ => CustomerStatus::Active,
        };
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| RepoError::DbError(e.to_string()))?
            .with_timezone(&Utc);
        let updated_at = DateTime::parse_from_rfc3339(&self.updated_at)
            .map_err(|e| RepoError::DbError(e.to_string()))?
            .with_timezone(&Utc);
        let id = Uuid::parse_str(&self.id).map_err(|e| RepoError::DbError(e.to_string()))?;
        Ok(Customer {
            id,
            full_name: self.full_name,
            email: self.email,
            national_id: self.national_id,
            phone_number: self.phone_number,
            status,
            created_on: Some(created_at),
            modified_on: Some(updated_at),
        })
    }
}

impl SqliteRepo {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePool::connect_with(options).await?;

        // Run migration from migration file.
        let ddl = include_str!("../migrations/0001_create_customer.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl CustomerRepository for SqliteRepo {
    async fn save(&self, mut customer: Customer) -> Result<Customer, RepoError> {
        // Timestamps are owned by the persistence layer.
        let now = Utc::now();
        let created = *customer.created_on.get_or_insert(now);
        customer.modified_on = Some(now);
        sqlx::query(
            "INSERT INTO customer (id, full_name, email, national_id, phone_number, status, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(customer.id.to_string())
        .bind(&customer.full_name)
        .bind(&customer.email)
        .bind(&customer.national_id)
        .bind(&customer.phone_number)
        .bind(customer.status.as_str())
        .bind(created.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::DbError(e.to_string()))?;
        Ok(customer)
    }

    async fn get_customers(&self) -> Result<Vec<Customer>, RepoError> {
        let rows: Vec<DbCustomer> = sqlx::query_as(
            "SELECT id, full_name, email, national_id, phone_number, status, created_at, updated_at FROM customer",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::DbError(e.to_string()))?;

        rows.into_iter()
            .map(|r| r.into_customer())
            .collect::<Result<Vec<_>, _>>()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, RepoError> {
        let row: Option<DbCustomer> = sqlx::query_as(
            "SELECT id, full_name, email, national_id, phone_number, status, created_at, updated_at FROM customer WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::DbError(e.to_string()))?;
        row.map(|r| r.into_customer()).transpose()
    }

    async fn find_by_name(&self, full_name: &str) -> Result<Option<Customer>, RepoError> {
        let row: Option<DbCustomer> = sqlx::query_as(
            "SELECT id, full_name, email, national_id, phone_number, status, created_at, updated_at FROM customer WHERE full_name = ?",
        )
        .bind(full_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::DbError(e.to_string()))?;
        row.map(|r| r.into_customer()).transpose()
    }
}
