#![allow(dead_code)]

use std::sync::Arc;

use auth::Authenticator;
use auth::Role;
use chrono::Duration;
use chrono::Utc;
use ems_service::domain::account::models::Password;
use ems_service::domain::account::models::Username;
use ems_service::domain::account::ports::AccountServicePort;
use ems_service::inbound::http::access::default_access_policy;
use ems_service::inbound::http::router::create_router;
use ems_service::inbound::http::router::AppState;
use ems_service::inbound::http::router::Repositories;
use ems_service::inbound::http::router::SecurityState;
use ems_service::outbound::repositories::InMemoryAccountRepository;
use ems_service::outbound::repositories::InMemoryApplicantRepository;
use ems_service::outbound::repositories::InMemoryAttendanceRepository;
use ems_service::outbound::repositories::InMemoryDepartmentRepository;
use ems_service::outbound::repositories::InMemoryEmployeeRepository;
use ems_service::outbound::repositories::InMemoryHrRepository;
use ems_service::outbound::repositories::InMemoryLeaveRepository;
use serde_json::json;
use serde_json::Value;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin-password";

/// Test application that spawns a real server on the in-memory store
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(JWT_SECRET, Duration::hours(24)));
        let security = SecurityState {
            authenticator: Arc::clone(&authenticator),
            access_policy: Arc::new(default_access_policy().expect("Default rules must parse")),
        };

        let repositories = Repositories {
            accounts: Arc::new(InMemoryAccountRepository::new()),
            departments: Arc::new(InMemoryDepartmentRepository::new()),
            employees: Arc::new(InMemoryEmployeeRepository::new()),
            hrs: Arc::new(InMemoryHrRepository::new()),
            leaves: Arc::new(InMemoryLeaveRepository::new()),
            attendance: Arc::new(InMemoryAttendanceRepository::new()),
            applicants: Arc::new(InMemoryApplicantRepository::new()),
        };
        let state = AppState::from_repositories(repositories, security);

        state
            .account_service
            .ensure_admin(
                Username::new(ADMIN_USERNAME.to_string()).unwrap(),
                Password::new(ADMIN_PASSWORD.to_string()).unwrap(),
            )
            .await
            .expect("Failed to create bootstrap admin");

        let router = create_router(state);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            authenticator,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Log in and return the bearer token, panicking on failure
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), 200, "login failed for {}", username);

        let body: Value = response.json().await.unwrap();
        body["data"]["token"].as_str().unwrap().to_string()
    }

    pub async fn admin_token(&self) -> String {
        self.login(ADMIN_USERNAME, ADMIN_PASSWORD).await
    }

    /// Register a self-service account and return its token
    pub async fn employee_token(&self, username: &str) -> String {
        let response = self
            .post("/api/auth/register")
            .json(&json!({ "username": username, "password": "employee-password" }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), 201);

        self.login(username, "employee-password").await
    }

    /// Create an HR member through the admin API and log in as them
    pub async fn hr_token(&self, admin_token: &str, email: &str) -> String {
        let response = self
            .post_authenticated("/api/hrs", admin_token)
            .json(&json!({ "name": "Hana Reyes", "email": email, "password": "hr-password" }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), 201);

        self.login(email, "hr-password").await
    }

    /// Token signed with the server key whose validity window has passed
    pub fn expired_token(&self, subject: &str, roles: &[Role]) -> String {
        self.authenticator
            .token_codec()
            .issue_at(
                subject,
                roles,
                Duration::hours(1),
                Utc::now() - Duration::hours(2),
            )
            .unwrap()
            .into_string()
    }

    /// Well-formed token signed with a key the server does not know
    pub fn forged_token(&self, subject: &str, roles: &[Role]) -> String {
        Authenticator::new(
            b"attacker-secret-key-that-is-also-32-bytes",
            Duration::hours(1),
        )
        .issue_token(subject, roles)
        .unwrap()
        .into_string()
    }

    pub async fn create_department(&self, token: &str, name: &str) -> i64 {
        let response = self
            .post_authenticated("/api/departments", token)
            .json(&json!({ "name": name }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), 201);

        let body: Value = response.json().await.unwrap();
        body["data"]["id"].as_i64().unwrap()
    }

    pub async fn create_employee(&self, token: &str, employee: Value) -> Value {
        let response = self
            .post_authenticated("/api/employees", token)
            .json(&employee)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), 201);

        let body: Value = response.json().await.unwrap();
        body["data"].clone()
    }
}
