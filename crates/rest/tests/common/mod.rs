//! Shared fixtures for REST API tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::Value;

use seqgate_rest::{ServerConfig, create_app_with_config};
use seqgate_store::TableRegistry;
use seqgate_store::backends::sqlite::SqliteStore;

/// Spins up a test server over a fresh in-memory store.
pub fn test_server() -> TestServer {
    let registry = Arc::new(TableRegistry::with_lab_tables());
    let store =
        SqliteStore::in_memory(Arc::clone(&registry)).expect("failed to create SQLite store");
    store.init_schema().expect("failed to initialize schema");

    let app = create_app_with_config(store, registry, ServerConfig::for_testing());
    TestServer::new(app).expect("failed to start test server")
}

/// Asserts the uniform failure envelope shape.
pub fn assert_failure_envelope(body: &Value) {
    assert_eq!(body["success"], Value::Bool(false));
    assert!(
        body["message"].is_string(),
        "failure body must carry a message: {body}"
    );
}
