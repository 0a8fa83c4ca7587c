use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerStatus {
    Active,
    Inactive,
    PendingKyc,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "ACTIVE",
            CustomerStatus::Inactive => "INACTIVE",
            CustomerStatus::PendingKyc => "PENDING_KYC",
        }
    }
}

/// Input payload for creating a customer. Field names match the wire contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerCommand {
    pub full_name: String,
    pub email: String,
    pub national_id: String,
    pub phone_number: String,
}

/// The sole domain entity. The id is generated at construction and never
/// changes; timestamps stay `None` until the persistence layer assigns them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub national_id: String,
    pub phone_number: String,
    pub status: CustomerStatus,
    pub created_on: Option<DateTime<Utc>>,
    pub modified_on: Option<DateTime<Utc>>,
}

impl Customer {
    pub fn new(
        full_name: String,
        email: String,
        national_id: String,
        phone_number: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name,
            email,
            national_id,
            phone_number,
            status: CustomerStatus::Active,
            created_on: None,
            modified_on: None,
        }
    }

    pub fn deactivate(&mut self) {
        self.status = CustomerStatus::Inactive;
    }
}

impl From<CreateCustomerCommand> for Customer {
    fn from(cmd: CreateCustomerCommand) -> Self {
        Customer::new(cmd.full_name, cmd.email, cmd.national_id, cmd.phone_number)
    }
}
