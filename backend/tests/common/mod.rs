//! Common test utilities for integration tests
//!
//! Each `TestApp` owns a fresh in-memory store seeded with the demo accounts.

#![allow(dead_code)]

use authgate_backend::{
    config::AppConfig, routes, services::UserService, state::AppState,
};
use authgate_shared::{Role, UserSummary};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application with the demo accounts seeded
    pub async fn new() -> Self {
        let state = AppState::new(test_config());
        UserService::seed_default_users(state.users())
            .await
            .expect("Failed to seed users");

        let app = routes::create_router(state.clone());

        Self { app, state }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        self.send("GET", path, None, None).await
    }

    /// Make a GET request with a bearer token
    pub async fn get_auth(&self, path: &str, token: &str) -> (StatusCode, String) {
        self.send("GET", path, None, Some(token)).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.send("POST", path, Some(body), None).await
    }

    /// Make a POST request with JSON body and a bearer token
    pub async fn post_auth(&self, path: &str, body: &str, token: &str) -> (StatusCode, String) {
        self.send("POST", path, Some(body), Some(token)).await
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<&str>,
        token: Option<&str>,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Log in and return the token, panicking on failure
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = json!({ "email": email, "password": password });
        let (status, response) = self.post("/login", &body.to_string()).await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", response);

        let response: Value = serde_json::from_str(&response).unwrap();
        response["token"].as_str().unwrap().to_string()
    }

    /// Token for a seeded account with the given role
    pub async fn token_for(&self, role: Role) -> String {
        let (email, password) = match role {
            Role::Admin => ("admin@example.com", "adminpass"),
            Role::Moderator => ("moderator@example.com", "modpass"),
            Role::User => ("user@example.com", "userpass"),
        };
        self.login(email, password).await
    }

    /// Token minted directly, without a store round trip
    pub fn mint_token(&self, role: Role) -> String {
        self.state
            .jwt()
            .issue(&UserSummary {
                id: 1000,
                email: format!("{}-minted@example.com", role),
                name: "Minted".to_string(),
                role,
            })
            .unwrap()
    }
}

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.server.port = 0;
    config.jwt.secret = "test-secret-key-for-testing-only-32chars".to_string();
    config
}
