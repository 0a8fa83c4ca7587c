use axum::response::IntoResponse;
use axum::{
    extract::State,
    routing::{get, post},
    serve, Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::application::customer_commands::CustomerCommandService;
use crate::application::customer_queries::CustomerQueryService;
use crate::errors::AppError;
use customers_types::domain::customer::{CreateCustomerCommand, Customer};
use customers_types::ports::customer_repository::CustomerRepository;

#[derive(Clone)]
pub struct HttpServerConfig {
    pub port: String,
}

pub struct AppState<R: CustomerRepository> {
    pub commands: CustomerCommandService<R>,
    pub queries: CustomerQueryService<R>,
}

pub struct HttpServer<R>
where
    R: CustomerRepository,
{
    pub state: Arc<AppState<R>>,
    pub config: HttpServerConfig,
}

impl<R> HttpServer<R>
where
    R: CustomerRepository + Send + Sync + 'static,
{
    pub async fn new(repo: Arc<R>, config: HttpServerConfig) -> anyhow::Result<Self> {
        let state = AppState {
            commands: CustomerCommandService::new(repo.clone()),
            queries: CustomerQueryService::new(repo),
        };
        Ok(Self {
            state: Arc::new(state),
            config,
        })
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                let request_id = Uuid::new_v4();
                tracing::info_span!(
                    "http_request",
                    %request_id,
                    method = %request.method(),
                    uri
                )
            })
            .on_request(
                |request: &axum::extract::Request<_>, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        method = %request.method(),
                        uri = %request.uri(),
                        "request"
                    );
                },
            )
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        status = %response.status(),
                        latency_ms = %latency.as_millis(),
                        "response"
                    );
                },
            );

        let state = self.state.clone();
        let app = Router::new()
            .route("/health", get(health))
            .route("/customers", post(create_customer::<R>))
            .route("/customers", get(list_customers::<R>))
            .layer(trace_layer)
            .with_state(state);

        let addr: SocketAddr = format!("0.0.0.0:{}", self.config.port).parse()?;
        tracing::info!("starting server on {}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}

async fn health() -> (axum::http::StatusCode, Json<serde_json::Value>) {
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({ "status": "ok" })),
    )
}

async fn create_customer<R>(
    State(state): State<Arc<AppState<R>>>,
    Json(command): Json<CreateCustomerCommand>,
) -> Result<Json<Customer>, AppError>
where
    R: CustomerRepository + Send + Sync + 'static,
{
    let customer = state.commands.handle(command).await?;
    Ok(Json(customer))
}

// 200 with the full list, 204 when the table is empty.
async fn list_customers<R>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<axum::response::Response, AppError>
where
    R: CustomerRepository + Send + Sync + 'static,
{
    let list = state.queries.get_customers().await?;
    if list.is_empty() {
        Ok(axum::http::StatusCode::NO_CONTENT.into_response())
    } else {
        Ok(Json(list).into_response())
    }
}
