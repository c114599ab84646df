/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - A stub upstream CRM served on an ephemeral local port
/// - Canned upstream responses per test
/// - A request log capturing the credentials the proxy injected
/// - The proxy app wired against the stub

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use cardfile_server::app::{build_router, AppState};
use cardfile_server::config::{ApiConfig, Config, UpstreamConfig};
use cardfile_server::upstream::CrmClient;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_SITE_ID: &str = "test-site-id";

/// One upstream request as observed by the stub
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub site_id: Option<String>,
    pub member_id: Option<String>,
}

/// Canned upstream response
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl CannedResponse {
    pub fn ok(body: serde_json::Value) -> Self {
        CannedResponse { status: 200, body }
    }

    pub fn failing(status: u16) -> Self {
        CannedResponse {
            status,
            body: serde_json::json!({ "message": "upstream error" }),
        }
    }
}

#[derive(Clone)]
struct StubState {
    contacts: CannedResponse,
    orders: CannedResponse,
    requests: Arc<Mutex<Vec<SeenRequest>>>,
}

/// Test context containing the proxy app and the stub upstream's request log
pub struct TestContext {
    pub app: Router,
    pub upstream_addr: SocketAddr,
    requests: Arc<Mutex<Vec<SeenRequest>>>,
}

impl TestContext {
    /// Spawns a stub upstream with the given canned responses and builds
    /// the proxy app against it.
    pub async fn new(contacts: CannedResponse, orders: CannedResponse) -> anyhow::Result<Self> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let stub_state = StubState {
            contacts,
            orders,
            requests: requests.clone(),
        };

        let stub = Router::new()
            .route("/contacts/v4/contacts/query", post(stub_contacts))
            .route("/pricing-plans/v2/orders", get(stub_orders))
            .with_state(stub_state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let upstream_addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, stub).await.unwrap();
        });

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
            },
            upstream: UpstreamConfig {
                base_url: format!("http://{}", upstream_addr),
                api_key: TEST_API_KEY.to_string(),
                site_id: TEST_SITE_ID.to_string(),
            },
        };

        let crm = CrmClient::new(&config)?;
        let app = build_router(AppState::new(crm, config));

        Ok(TestContext {
            app,
            upstream_addr,
            requests,
        })
    }

    /// Requests the stub upstream observed, in arrival order
    pub fn seen_requests(&self) -> Vec<SeenRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn record(state: &StubState, path: &str, headers: &HeaderMap, member_id: Option<String>) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
    };

    state.requests.lock().unwrap().push(SeenRequest {
        path: path.to_string(),
        authorization: header("authorization"),
        site_id: header("wix-site-id"),
        member_id,
    });
}

async fn stub_contacts(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(_body): Json<serde_json::Value>,
) -> impl IntoResponse {
    record(&state, "/contacts/v4/contacts/query", &headers, None);
    (
        StatusCode::from_u16(state.contacts.status).unwrap(),
        Json(state.contacts.body.clone()),
    )
}

async fn stub_orders(
    State(state): State<StubState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    record(
        &state,
        "/pricing-plans/v2/orders",
        &headers,
        params.get("memberId").cloned(),
    );
    (
        StatusCode::from_u16(state.orders.status).unwrap(),
        Json(state.orders.body.clone()),
    )
}
