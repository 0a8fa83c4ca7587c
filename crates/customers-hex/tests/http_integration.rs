use async_trait::async_trait;
use customers_hex::inbound::http::{HttpServer, HttpServerConfig};
use customers_repo::memory::InMemoryRepo;
use customers_types::domain::customer::{Customer, CustomerStatus};
use customers_types::ports::customer_repository::{CustomerRepository, RepoError};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

fn find_free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

async fn spawn_server<R: CustomerRepository>(repo: Arc<R>) -> (String, tokio::task::JoinHandle<()>) {
    let port = find_free_port();
    let config = HttpServerConfig {
        port: port.to_string(),
    };
    let server = HttpServer::new(repo, config).await.unwrap();
    let handle = tokio::spawn(async move {
        server.run().await.expect("server run");
    });
    // Give the server a moment to start.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    (format!("http://127.0.0.1:{}", port), handle)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CustomerInput {
    full_name: String,
    email: String,
    national_id: String,
    phone_number: String,
}

fn sample_input(name: &str) -> CustomerInput {
    CustomerInput {
        full_name: name.into(),
        email: format!("{}@example.com", name.to_lowercase()),
        national_id: "NID-42".into(),
        phone_number: "+4712341234".into(),
    }
}

#[tokio::test]
async fn create_then_list_over_http() {
    let (addr, handle) = spawn_server(Arc::new(InMemoryRepo::new())).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/customers", addr))
        .json(&sample_input("HttpUser"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let created: Customer = res.json().await.unwrap();
    assert!(!created.id.is_nil());
    assert_eq!(created.status, CustomerStatus::Active);
    assert_eq!(created.full_name, "HttpUser");
    assert!(created.created_on.is_some());
    assert!(created.modified_on.is_some());

    let res = client
        .get(format!("{}/customers", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let list: Vec<Customer> = res.json().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, created.id);

    handle.abort();
}

#[tokio::test]
async fn empty_list_yields_no_content() {
    let (addr, handle) = spawn_server(Arc::new(InMemoryRepo::new())).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/customers", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::NO_CONTENT);
    assert!(res.bytes().await.unwrap().is_empty());

    handle.abort();
}

struct FailingRepo;

#[async_trait]
impl CustomerRepository for FailingRepo {
    async fn save(&self, _: Customer) -> Result<Customer, RepoError> {
        Err(RepoError::DbError("disk full".into()))
    }
    async fn get_customers(&self) -> Result<Vec<Customer>, RepoError> {
        Err(RepoError::DbError("disk full".into()))
    }
    async fn find_by_id(&self, _: Uuid) -> Result<Option<Customer>, RepoError> {
        Err(RepoError::DbError("disk full".into()))
    }
    async fn find_by_name(&self, _: &str) -> Result<Option<Customer>, RepoError> {
        Err(RepoError::DbError("disk full".into()))
    }
}

#[tokio::test]
async fn repository_failure_on_create_yields_bad_request() {
    let (addr, handle) = spawn_server(Arc::new(FailingRepo)).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/customers", addr))
        .json(&sample_input("Doomed"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);

    handle.abort();
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let (addr, handle) = spawn_server(Arc::new(InMemoryRepo::new())).await;

    let res = reqwest::get(format!("{}/health", addr)).await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");

    handle.abort();
}
