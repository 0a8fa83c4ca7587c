///  To run :
///  cargo r --example client_example
use customers_client::CustomersClient;
use customers_hex::inbound::http::{HttpServer, HttpServerConfig};
use customers_repo::build_repo;
use customers_types::domain::customer::{CreateCustomerCommand, CustomerStatus};
use std::sync::Arc;
use tempfile::tempdir;

fn find_free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Start server on ephemeral port.
    let port = find_free_port();
    let addr = format!("http://127.0.0.1:{port}/");

    // Use a temp file-backed SQLite DB so multiple connections see the same data.
    let tmp = tempdir()?;
    let db_path = tmp.path().join("customers.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let repo = build_repo(Some(&db_url)).await?;
    let server = HttpServer::new(
        Arc::new(repo),
        HttpServerConfig {
            port: port.to_string(),
        },
    )
    .await?;

    let handle = tokio::spawn(async move {
        server.run().await.expect("server run");
    });
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    // Use client against the running server.
    let client = CustomersClient::new(&addr)?;

    let empty = client.list_customers().await?;
    println!("Customers before create: {}", empty.len());
    assert!(empty.is_empty());

    let created = client
        .create_customer(CreateCustomerCommand {
            full_name: "Example User".into(),
            email: "example@example.com".into(),
            national_id: "NID-EX-1".into(),
            phone_number: "+4712345678".into(),
        })
        .await?;
    println!("Created customer id={}", created.id);
    assert_eq!(created.status, CustomerStatus::Active);
    assert!(created.created_on.is_some());

    let listed = client.list_customers().await?;
    println!("Customers after create: {}", listed.len());
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].email, "example@example.com");

    handle.abort();
    Ok(())
}
