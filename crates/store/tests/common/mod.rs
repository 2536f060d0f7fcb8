//! Shared fixtures for store integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::json;

use seqgate_store::backends::sqlite::SqliteStore;
use seqgate_store::{FieldSet, TableRegistry};

pub fn lab_registry() -> Arc<TableRegistry> {
    Arc::new(TableRegistry::with_lab_tables())
}

pub fn create_store() -> SqliteStore {
    let store =
        SqliteStore::in_memory(lab_registry()).expect("failed to create SQLite store");
    store.init_schema().expect("failed to initialize schema");
    store
}

pub fn computer_fields(device_name: &str) -> FieldSet {
    FieldSet::new().with("device_name", json!(device_name))
}

pub fn minion_fields(name: &str, computer_used: &str, device_date: &str, notes: &str) -> FieldSet {
    FieldSet::new()
        .with("name", json!(name))
        .with("computer_used", json!(computer_used))
        .with("device_date", json!(device_date))
        .with("notes", json!(notes))
}
