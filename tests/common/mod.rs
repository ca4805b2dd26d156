#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use serde_json::{Value, json};
use tokio::sync::Mutex;
use valantis_catalog::{CatalogClient, ClientConfig, CredentialSource};

pub const TEST_TOKEN: &str = "test-token";

#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub action: String,
    pub params: Value,
    pub auth: Option<String>,
}

#[derive(Clone)]
enum Behavior {
    Serve,
    Status(u16),
    RawBody(String),
}

/// In-process stand-in for the remote product API.
///
/// `get_ids` pages through `ids`, `get_items` returns the first item with
/// each requested id (duplicated ids yield duplicated items) and `filter`
/// matches items by equality on the supplied keys.
#[derive(Clone)]
pub struct FakeCatalog {
    ids: Vec<String>,
    items: Vec<Value>,
    behavior: Behavior,
    latency: Duration,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

pub struct FakeApi {
    pub base_url: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl FakeApi {
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    pub async fn actions(&self) -> Vec<String> {
        self.calls().await.into_iter().map(|c| c.action).collect()
    }

    pub fn client(&self, items_per_page: u32) -> CatalogClient {
        CatalogClient::new(ClientConfig {
            base_url: self.base_url.clone(),
            items_per_page,
        })
        .with_credentials(CredentialSource::Fixed(TEST_TOKEN.to_string()))
    }
}

pub fn item(id: &str, product: &str, price: f64, brand: Option<&str>) -> Value {
    json!({
        "id": id,
        "product": product,
        "price": price,
        "brand": brand,
    })
}

/// `count` distinct items with ids `id-0`, `id-1`, ...
pub fn numbered_items(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| item(&format!("id-{}", i), &format!("Product {}", i), 100.0 + i as f64, None))
        .collect()
}

impl FakeCatalog {
    pub fn new(items: Vec<Value>) -> Self {
        let ids = items
            .iter()
            .filter_map(|item| item["id"].as_str().map(str::to_string))
            .collect();
        Self {
            ids,
            items,
            behavior: Behavior::Serve,
            latency: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Overrides the id listing, e.g. to inject duplicates.
    pub fn with_ids(mut self, ids: &[&str]) -> Self {
        self.ids = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.behavior = Behavior::Status(status);
        self
    }

    pub fn with_raw_body(mut self, body: &str) -> Self {
        self.behavior = Behavior::RawBody(body.to_string());
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub async fn spawn(self) -> anyhow::Result<FakeApi> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let calls = self.calls.clone();

        let router = Router::new()
            .route("/", post(handle_action))
            .with_state(self);

        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(FakeApi {
            base_url: format!("http://{}/", addr),
            calls,
        })
    }

    fn get_ids(&self, params: &Value) -> Value {
        let offset = params["offset"].as_u64().unwrap_or(0) as usize;
        let limit = params["limit"].as_u64().unwrap_or(0) as usize;
        let page: Vec<&String> = self.ids.iter().skip(offset).take(limit).collect();
        json!(page)
    }

    fn get_items(&self, params: &Value) -> Value {
        let requested = params["ids"].as_array().cloned().unwrap_or_default();
        let found: Vec<&Value> = requested
            .iter()
            .filter_map(|id| self.items.iter().find(|item| item["id"] == *id))
            .collect();
        json!(found)
    }

    fn filter(&self, params: &Value) -> Value {
        let matches: Vec<&Value> = self
            .items
            .iter()
            .filter(|item| {
                ["product", "price", "brand"].iter().all(|key| match params.get(*key) {
                    Some(expected) => item[*key] == *expected,
                    None => true,
                })
            })
            .collect();
        json!(matches)
    }
}

/// Address that refuses connections.
pub async fn closed_port_url() -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}/", addr))
}

async fn handle_action(
    State(catalog): State<FakeCatalog>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    let action = body["action"].as_str().unwrap_or_default().to_string();
    let params = body["params"].clone();
    let auth = headers
        .get("x-auth")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    catalog.calls.lock().await.push(RecordedCall {
        action: action.clone(),
        params: params.clone(),
        auth,
    });

    if !catalog.latency.is_zero() {
        tokio::time::sleep(catalog.latency).await;
    }

    match &catalog.behavior {
        Behavior::Status(code) => {
            let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, "error".to_string())
        }
        Behavior::RawBody(raw) => (StatusCode::OK, raw.clone()),
        Behavior::Serve => {
            let result = match action.as_str() {
                "get_ids" => catalog.get_ids(&params),
                "get_items" => catalog.get_items(&params),
                "filter" => catalog.filter(&params),
                _ => return (StatusCode::BAD_REQUEST, "unknown action".to_string()),
            };
            (StatusCode::OK, json!({ "result": result }).to_string())
        }
    }
}
