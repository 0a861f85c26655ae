#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use carbon_checker::carbon::{CarbonSource, FixedCarbon};
use carbon_checker::models::Entry;
use carbon_checker::store::{MemoryStore, RecordStore};
use carbon_checker::AppState;
use http_body_util::BodyExt;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<dyn RecordStore>,
}

impl TestApp {
    /// An app over an empty in-memory store that has never been written.
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new(), FixedCarbon::new([0.25]))
    }

    pub fn with_carbon(values: impl IntoIterator<Item = f64>) -> Self {
        Self::with_store(MemoryStore::new(), FixedCarbon::new(values))
    }

    pub fn with_store(store: impl RecordStore, carbon: impl CarbonSource) -> Self {
        let store: Arc<dyn RecordStore> = Arc::new(store);
        let state = AppState {
            store: store.clone(),
            carbon: Arc::new(carbon),
        };
        let static_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("static");
        let router = carbon_checker::build_app(state, static_dir);

        Self { router, store }
    }

    /// Send a request through the app and return the response.
    pub async fn request(&self, req: Request<Body>) -> Response {
        tower::ServiceExt::oneshot(self.router.clone(), req)
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.request(req).await
    }

    /// Send a POST request with a JSON body.
    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> Response {
        let req = Request::builder()
            .uri(uri)
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(req).await
    }

    pub async fn delete(&self, uri: &str) -> Response {
        let req = Request::builder()
            .uri(uri)
            .method("DELETE")
            .body(Body::empty())
            .unwrap();
        self.request(req).await
    }

    /// Create an entry through the API and return it.
    pub async fn create(&self, url: &str) -> Entry {
        let resp = self.post_json("/api/data", serde_json::json!({ "url": url })).await;
        assert!(resp.status().is_success(), "create failed: {}", resp.status());
        body_json(resp).await
    }
}

/// An entry with a chosen id, as if stored by an earlier run.
pub fn stored_entry(id: i64, url: &str, carbon: f64) -> Entry {
    let mut entry = Entry::new(url.to_string(), carbon, &[], chrono::Utc::now());
    entry.id = id;
    entry
}

/// Read the full response body as a String.
pub async fn body_string(resp: Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Read the full response body as JSON.
pub async fn body_json<T: serde::de::DeserializeOwned>(resp: Response) -> T {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
