#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use contact_api::config::Config;
use contact_api::db::{MemoryContactStore, PgContactStore, SharedStore};

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit a JSON contact body, return (plain-text body, status).
    pub async fn submit_json(&self, data: &Value) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/contact"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }

    /// Submit form-urlencoded data, return (plain-text body, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/contact"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }

    /// Submit an arbitrary body with the given Content-Type.
    pub async fn submit_raw(&self, content_type: &str, body: impl Into<reqwest::Body>) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/contact"))
            .header("content-type", content_type)
            .body(body)
            .send()
            .await
            .expect("submit raw failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }
}

pub fn test_config(database_url: &str) -> Config {
    Config {
        database_url: database_url.to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 4096,
        db_max_connections: 2,
        strict_status: false,
        log_level: "warn".to_string(),
    }
}

/// Serve the app with the given store on a random local port.
pub async fn spawn_with(store: SharedStore, config: Config) -> TestApp {
    let app = contact_api::build_app(store, config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
    }
}

/// Spawn a test app backed by a fresh in-memory store.
pub async fn spawn_memory_app() -> (TestApp, Arc<MemoryContactStore>) {
    spawn_memory_app_with(test_config("memory://")).await
}

/// Same as [`spawn_memory_app`] with validation failures reported as 400.
pub async fn spawn_strict_memory_app() -> (TestApp, Arc<MemoryContactStore>) {
    let mut config = test_config("memory://");
    config.strict_status = true;
    spawn_memory_app_with(config).await
}

pub async fn spawn_memory_app_with(config: Config) -> (TestApp, Arc<MemoryContactStore>) {
    let store = Arc::new(MemoryContactStore::new());
    let app = spawn_with(store.clone(), config).await;
    (app, store)
}

/// A test app backed by its own throwaway Postgres database.
pub struct PgTestApp {
    pub app: TestApp,
    pub pool: PgPool,
    pub db_name: String,
}

fn database_url() -> String {
    let _ = dotenvy::dotenv();
    std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for postgres tests")
}

fn replace_db(base_url: &str, db_name: &str) -> String {
    base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.to_string())
}

/// Create a unique database, migrate it and serve the app on top of it.
pub async fn spawn_pg_app() -> PgTestApp {
    let base_url = database_url();
    let db_name = format!("contact_test_{}", Uuid::now_v7().simple());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&replace_db(&base_url, "postgres"))
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let config = test_config(&replace_db(&base_url, &db_name));
    let store = contact_api::db::connect(&config)
        .await
        .expect("Failed to connect test store");

    // Separate pool for reading records back without going through the API
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to test database");

    let app = spawn_with(store, config).await;

    PgTestApp { app, pool, db_name }
}

/// Serve the app with a Postgres store whose pool is already closed.
pub async fn spawn_disconnected_pg_app(pg: &PgTestApp) -> TestApp {
    let url = replace_db(&database_url(), &pg.db_name);
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .expect("Failed to connect to test database");
    pool.close().await;

    spawn_with(Arc::new(PgContactStore::new(pool)), test_config(&url)).await
}

/// Drop the test database after tests complete.
pub async fn cleanup(pg: PgTestApp) {
    let db_name = pg.db_name.clone();
    pg.pool.close().await;

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&replace_db(&database_url(), "postgres"))
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}
