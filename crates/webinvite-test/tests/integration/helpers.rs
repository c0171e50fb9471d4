#![allow(clippy::unused_async, clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Building a Salvo service over an isolated in-memory backend (one per test)
//! - Making HTTP requests
//! - Asserting on responses and backend state

use std::sync::Arc;

use salvo::http::{Method, StatusCode};
use salvo::prelude::*;
use salvo::test::{RequestBuilder, ResponseExt, TestClient};
use serde_json::Value;
use uuid::Uuid;

use webinvite_test::component::config::{ConfigHandler, Settings};
use webinvite_test::component::db::handler::BackendHandler;
use webinvite_test::component::db::records::{fetch_all, insert_record};
use webinvite_test::component::db::Filter;
use webinvite_test::component::model::{Guest, Wedding};
use webinvite_test::component::storage::MemoryStorage;

pub use webinvite_test::component::db::Table;
pub use webinvite_test::component::db::memory::{MemoryBackend, Operation};

pub const TEST_ORIGIN: &str = "https://invite.example";

fn test_config() -> Settings {
    let mut settings = Settings::load().expect("Default configuration should load");
    settings.server.serve_origin = Some(TEST_ORIGIN.to_string());
    settings
}

/// An isolated application: its own backend, snapshot storage and service.
pub struct TestEnv {
    pub backend: MemoryBackend,
    pub storage: MemoryStorage,
    pub service: Service,
}

impl TestEnv {
    #[must_use]
    pub fn new() -> Self {
        let backend = MemoryBackend::new();
        let storage = MemoryStorage::new();
        let router = Router::new()
            .hoop(BackendHandler {
                backend: Arc::new(backend.clone()),
                storage: Arc::new(storage.clone()),
            })
            .hoop(ConfigHandler {
                settings: test_config(),
            })
            .push(webinvite_test::app::app::routes());
        Self {
            backend,
            storage,
            service: Service::new(router),
        }
    }

    /// Inserts an invitation directly into the backend.
    pub async fn seed_wedding(&self, owner: Uuid, names: (&str, &str)) -> anyhow::Result<Uuid> {
        let mut wedding = Wedding::placeholder(owner, 2030);
        wedding.couple1_name = names.0.to_string();
        wedding.couple2_name = names.1.to_string();
        let saved = insert_record(&self.backend, &wedding).await?;
        saved
            .id
            .ok_or_else(|| anyhow::anyhow!("backend returned a wedding without id"))
    }

    /// Inserts a guest directly into the backend.
    pub async fn seed_guest(&self, wedding_id: Uuid, name: &str, code: &str) -> anyhow::Result<Uuid> {
        let guest = Guest::new(wedding_id, name.to_string(), code.to_string());
        let saved = insert_record(&self.backend, &guest).await?;
        saved
            .id
            .ok_or_else(|| anyhow::anyhow!("backend returned a guest without id"))
    }

    /// Creates an invitation through the API and returns its id.
    pub async fn create_wedding(&self, owner: Uuid) -> Uuid {
        let response = TestRequest::post("/api/weddings")
            .json(&serde_json::json!({ "owner": owner }))
            .send(&self.service)
            .await
            .assert_status(StatusCode::CREATED);
        let id = response.json()["data"]["id"]
            .as_str()
            .expect("Created wedding should have an id")
            .to_string();
        Uuid::parse_str(&id).expect("Wedding id should be a UUID")
    }

    /// The JSON preview view model of an invitation.
    pub async fn preview(&self, wedding_id: Uuid) -> Value {
        let response = TestRequest::get(&format!("/api/weddings/{wedding_id}/preview"))
            .send(&self.service)
            .await
            .assert_status(StatusCode::OK);
        response.json()["data"].clone()
    }

    pub async fn guests(&self, wedding_id: Uuid) -> Vec<Guest> {
        fetch_all::<Guest>(&self.backend, Filter::Wedding(wedding_id))
            .await
            .expect("Guests should load")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for HTTP test requests.
pub struct TestRequest {
    method: Method,
    path: String,
    body: Option<Value>,
}

impl TestRequest {
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            body: None,
        }
    }

    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    #[must_use]
    pub fn put(path: &str) -> Self {
        Self::new(Method::PUT, path)
    }

    #[must_use]
    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Sets a JSON request body.
    #[must_use]
    pub fn json(mut self, body: &Value) -> Self {
        self.body = Some(body.clone());
        self
    }

    /// Sends the request to the test service and returns the response.
    ///
    /// ## Panics
    /// Panics if the response cannot be read.
    pub async fn send(self, service: &Service) -> TestResponse {
        let url = format!("http://127.0.0.1:5800{}", self.path);

        let mut client = match self.method {
            Method::GET => TestClient::get(&url),
            Method::POST => TestClient::post(&url),
            Method::PUT => TestClient::put(&url),
            Method::DELETE => TestClient::delete(&url),
            _ => RequestBuilder::new(&url, self.method.clone()),
        };
        if let Some(body) = &self.body {
            client = client.json(body);
        }

        let mut response = client.send(service).await;
        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Vec<u8> = response.take_bytes(None).await.unwrap_or_default().to_vec();

        TestResponse { status, body }
    }
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {expected} but got {}: {}",
            self.status,
            self.body_string()
        );
        self
    }

    /// Asserts that the response body contains the given text.
    #[must_use]
    pub fn assert_body_contains(self, expected: &str) -> Self {
        let body = self.body_string();
        assert!(
            body.contains(expected),
            "Expected body to contain {expected:?}, got: {body}"
        );
        self
    }

    /// Asserts that the response body does not contain the given text.
    #[must_use]
    pub fn assert_body_not_contains(self, unexpected: &str) -> Self {
        let body = self.body_string();
        assert!(
            !body.contains(unexpected),
            "Expected body not to contain {unexpected:?}, got: {body}"
        );
        self
    }

    #[must_use]
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Parses the body as JSON.
    ///
    /// ## Panics
    /// Panics if the body is not JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Response body should be JSON")
    }

    /// Titles of the notifications carried by the response, in order.
    #[must_use]
    pub fn notification_titles(&self) -> Vec<String> {
        self.json()["notifications"]
            .as_array()
            .map(|list| {
                list.iter()
                    .filter_map(|n| n["title"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Kinds (`success` or `error`) of the notifications carried by the response.
    #[must_use]
    pub fn notification_kinds(&self) -> Vec<String> {
        self.json()["notifications"]
            .as_array()
            .map(|list| {
                list.iter()
                    .filter_map(|n| n["kind"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}
