//! Shared test helpers for integration tests.
//!
//! The app under test runs over in-memory stores and cache, plus a
//! tempdir-backed content store, so the full HTTP surface is exercised
//! without external services.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use chrono::Utc;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use stash_api::AppState;
use stash_auth::{CredentialVerifier, SessionManager};
use stash_cache::CacheManager;
use stash_cache::memory::MemoryCacheProvider;
use stash_core::config::AppConfig;
use stash_core::result::AppResult;
use stash_core::types::pagination::Page;
use stash_database::{FileStore, UserStore};
use stash_entity::file::{File, NewFile};
use stash_entity::user::{NewUser, User};
use stash_service::{FileService, UserService};
use stash_storage::LocalContentStore;

/// In-memory user store.
#[derive(Debug, Default)]
struct MemUserStore {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for MemUserStore {
    async fn insert(&self, user: &NewUser) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        let record = User {
            id: users.len() as i64 + 1,
            email: user.email.clone(),
            password_digest: user.password_digest.clone(),
            created_at: Utc::now(),
        };
        users.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.users.lock().unwrap().len() as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// In-memory file store preserving insertion order.
#[derive(Debug, Default)]
struct MemFileStore {
    files: Mutex<Vec<File>>,
}

#[async_trait]
impl FileStore for MemFileStore {
    async fn insert(&self, file: &NewFile) -> AppResult<File> {
        let mut files = self.files.lock().unwrap();
        let record = File {
            id: files.len() as i64 + 1,
            owner_id: file.owner_id,
            name: file.name.clone(),
            kind: file.kind,
            parent_id: file.parent_id,
            is_public: file.is_public,
            local_path: file.local_path.clone(),
            created_at: Utc::now(),
        };
        files.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<File>> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.id == id)
            .cloned())
    }

    async fn find_by_owner_and_parent(
        &self,
        owner_id: i64,
        parent_id: i64,
        page: &Page,
    ) -> AppResult<Vec<File>> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.owner_id == owner_id && f.parent_id == parent_id)
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn set_visibility(&self, id: i64, is_public: bool) -> AppResult<Option<File>> {
        let mut files = self.files.lock().unwrap();
        Ok(files.iter_mut().find(|f| f.id == id).map(|f| {
            f.is_public = is_public;
            f.clone()
        }))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.files.lock().unwrap().len() as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    // Content files live here; dropped with the app.
    _storage_dir: TempDir,
}

impl TestApp {
    /// Create a new test application over fresh in-memory backends.
    pub async fn new() -> Self {
        let config = AppConfig::load("tests/fixtures/test_config.toml")
            .expect("Failed to load test config");

        let storage_dir = TempDir::new().expect("Failed to create storage dir");
        let content = Arc::new(
            LocalContentStore::new(storage_dir.path().to_str().unwrap())
                .await
                .expect("Failed to init content store"),
        );

        let cache = Arc::new(CacheManager::from_provider(Arc::new(
            MemoryCacheProvider::new(&config.cache.memory),
        )));

        let users: Arc<dyn UserStore> = Arc::new(MemUserStore::default());
        let files: Arc<dyn FileStore> = Arc::new(MemFileStore::default());

        let verifier = Arc::new(CredentialVerifier::new(Arc::clone(&users)));
        let sessions = Arc::new(SessionManager::new(Arc::clone(&cache), &config.auth));
        let user_service = Arc::new(UserService::new(Arc::clone(&users)));
        let file_service = Arc::new(FileService::new(Arc::clone(&files), content));

        let state = AppState {
            config: Arc::new(config),
            cache,
            users,
            files,
            verifier,
            sessions,
            user_service,
            file_service,
        };

        Self {
            router: stash_api::build_router(state),
            _storage_dir: storage_dir,
        }
    }

    /// Register a user through the API and return their id.
    pub async fn register(&self, email: &str, password: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/users",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );
        response.body["id"].as_i64().expect("No id in response")
    }

    /// Log in over basic auth and return the session token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let credentials = BASE64.encode(format!("{email}:{password}"));

        let request = Request::builder()
            .method("GET")
            .uri("/connect")
            .header(header::AUTHORIZATION, format!("Basic {credentials}"))
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self.send(request).await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );
        response.body["token"]
            .as_str()
            .expect("No token in response")
            .to_string()
    }

    /// Register and log in, returning the session token.
    pub async fn register_and_login(&self, email: &str, password: &str) -> String {
        self.register(email, password).await;
        self.login(email, password).await
    }

    /// Make a JSON request, optionally authenticated with a session token.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut request = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            request = request.header("X-Token", token);
        }

        let request = request
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(request).await
    }

    /// Fetch raw bytes from a path, returning status, content type, and body.
    pub async fn request_raw(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> (StatusCode, Option<String>, Bytes) {
        let mut request = Request::builder().method("GET").uri(path);
        if let Some(token) = token {
            request = request.header("X-Token", token);
        }
        let request = request.body(Body::empty()).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        (status, content_type, body)
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when the body is empty or not JSON).
    pub body: Value,
}

impl TestResponse {
    /// The `error` field of an error body.
    pub fn error_message(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
