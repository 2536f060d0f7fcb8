//! Typed record operation tests.

#![cfg(feature = "sqlite")]

mod common;

use serde_json::json;

use common::create_store;
use seqgate_store::backends::sqlite::SqliteStore;
use seqgate_store::{
    NewComputer, NewExperiment, NewMinion, NewRun, PageQuery, RecordStore, TableStore,
};

#[tokio::test]
async fn test_create_experiment_then_run() {
    let store = create_store();

    let experiment = store
        .create_experiment(NewExperiment {
            name: Some("gut microbiome".to_string()),
            protocol: Some("LSK109".to_string()),
            metadata: None,
            date_started: Some("2023-02-01".to_string()),
            description: Some("pilot cohort".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(experiment.insert_id, Some(1));
    assert_eq!(experiment.message, "experiment record created successfully");

    let run = store
        .create_run(NewRun {
            date_run_start: Some("2023-02-03T09:30:00".to_string()),
            experiment_id: experiment.insert_id,
            computer: Some("grid-01".to_string()),
            minion: Some("MN00101".to_string()),
            notes: None,
        })
        .await
        .unwrap();
    assert_eq!(run.insert_id, Some(1));

    let table = store.registry().resolve("run").unwrap();
    let rows = store
        .fetch_page(&table, &PageQuery::new(1, 10))
        .await
        .unwrap();
    assert_eq!(rows[0]["experiment_id"], json!(1));
    assert_eq!(rows[0]["computer"], json!("grid-01"));
    assert_eq!(rows[0]["notes"], json!(null));
}

#[tokio::test]
async fn test_add_computer() {
    let store = create_store();

    let result = store
        .add_computer(NewComputer {
            device_name: Some("gridion-west".to_string()),
        })
        .await
        .unwrap();
    assert!(result.success);
    assert_eq!(result.insert_id, Some(1));

    let table = store.registry().resolve("computer").unwrap();
    let rows = store
        .fetch_page(&table, &PageQuery::new(1, 10))
        .await
        .unwrap();
    assert_eq!(rows[0]["device_name"], json!("gridion-west"));
}

#[tokio::test]
async fn test_add_minion_with_all_fields() {
    let store = create_store();

    store
        .add_minion(NewMinion {
            name: Some("MN00777".to_string()),
            computer_used: Some("gridion-west".to_string()),
            device_date: Some("2023-07-07".to_string()),
            notes: Some("summer batch".to_string()),
        })
        .await
        .unwrap();

    let table = store.registry().resolve("minion").unwrap();
    let rows = store
        .fetch_page(&table, &PageQuery::new(1, 10))
        .await
        .unwrap();
    assert_eq!(rows[0]["name"], json!("MN00777"));
    assert_eq!(rows[0]["notes"], json!("summer batch"));
}

#[tokio::test]
async fn test_omitted_fields_insert_null() {
    let store = create_store();

    store.create_run(NewRun::default()).await.unwrap();

    let table = store.registry().resolve("run").unwrap();
    let rows = store
        .fetch_page(&table, &PageQuery::new(1, 10))
        .await
        .unwrap();
    assert_eq!(rows[0]["date_run_start"], json!(null));
    assert_eq!(rows[0]["experiment_id"], json!(null));
    assert_eq!(rows[0]["minion"], json!(null));
}

#[tokio::test]
async fn test_records_persist_in_file_backed_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lab.db");
    let registry = common::lab_registry();

    {
        let store = SqliteStore::open(&path, std::sync::Arc::clone(&registry)).unwrap();
        store.init_schema().unwrap();
        store
            .add_computer(NewComputer {
                device_name: Some("persistent".to_string()),
            })
            .await
            .unwrap();
    }

    let reopened = SqliteStore::open(&path, registry).unwrap();
    let table = reopened.registry().resolve("computer").unwrap();
    let rows = reopened
        .fetch_page(&table, &PageQuery::new(1, 10))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["device_name"], json!("persistent"));
}
