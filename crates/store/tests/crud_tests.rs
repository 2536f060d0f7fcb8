//! CRUD integration tests for the SQLite store.

#![cfg(feature = "sqlite")]

mod common;

use serde_json::json;

use common::{computer_fields, create_store, minion_fields};
use seqgate_store::{FieldSet, PageQuery, RowId, StoreError, TableStore};

// ============================================================================
// Insert
// ============================================================================

#[tokio::test]
async fn test_insert_returns_engine_assigned_id() {
    let store = create_store();
    let table = store.registry().resolve("computer").unwrap();

    let first = store
        .insert_row(&table, &computer_fields("grid-01"))
        .await
        .unwrap();
    let second = store
        .insert_row(&table, &computer_fields("grid-02"))
        .await
        .unwrap();

    assert!(first.success);
    assert_eq!(first.insert_id, Some(1));
    assert_eq!(second.insert_id, Some(2));
    assert!(first.affected_rows.is_none());
    assert_eq!(first.message, "computer record created successfully");
}

#[tokio::test]
async fn test_insert_places_every_field_in_its_column() {
    let store = create_store();
    let table = store.registry().resolve("minion").unwrap();

    store
        .insert_row(
            &table,
            &minion_fields("MN00123", "grid-01", "2023-04-01", "fresh out of the box"),
        )
        .await
        .unwrap();

    let rows = store
        .fetch_page(&table, &PageQuery::new(1, 10))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row["name"], json!("MN00123"));
    assert_eq!(row["computer_used"], json!("grid-01"));
    assert_eq!(row["device_date"], json!("2023-04-01"));
    assert_eq!(row["notes"], json!("fresh out of the box"));
    assert_eq!(row["id"], json!(1));
}

#[tokio::test]
async fn test_insert_empty_field_set_is_rejected_before_any_query() {
    let store = create_store();
    let table = store.registry().resolve("computer").unwrap();

    let err = store.insert_row(&table, &FieldSet::new()).await.unwrap_err();
    assert!(matches!(err, StoreError::EmptyInsert));
}

#[tokio::test]
async fn test_insert_unknown_column_is_rejected() {
    let store = create_store();
    let table = store.registry().resolve("computer").unwrap();
    let fields = FieldSet::new().with("device_name; DROP TABLE minion", json!("x"));

    let err = store.insert_row(&table, &fields).await.unwrap_err();
    assert!(matches!(err, StoreError::UnknownColumn { .. }));

    // The device inventory must be untouched.
    let minion = store.registry().resolve("minion").unwrap();
    assert!(store
        .fetch_page(&minion, &PageQuery::new(1, 1))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_insert_rejects_non_scalar_values() {
    let store = create_store();
    let table = store.registry().resolve("computer").unwrap();
    let fields = FieldSet::new().with("device_name", json!({"nested": "object"}));

    let err = store.insert_row(&table, &fields).await.unwrap_err();
    assert!(matches!(err, StoreError::NonScalarValue { column } if column == "device_name"));
}

#[tokio::test]
async fn test_insert_null_and_numeric_scalars() {
    let store = create_store();
    let table = store.registry().resolve("sample").unwrap();
    let fields = FieldSet::new()
        .with("name", json!("S-17"))
        .with("participant_id", json!(null))
        .with("sample_type", json!("saliva"));

    store.insert_row(&table, &fields).await.unwrap();

    let rows = store
        .fetch_page(&table, &PageQuery::new(1, 10))
        .await
        .unwrap();
    assert_eq!(rows[0]["participant_id"], json!(null));
    assert_eq!(rows[0]["sample_type"], json!("saliva"));
}

#[tokio::test]
async fn test_insert_constraint_violation_is_wrapped() {
    let store = create_store();
    let table = store.registry().resolve("run").unwrap();
    // No experiment with id 999 exists, so the foreign key must fire.
    let fields = FieldSet::new()
        .with("experiment_id", json!(999))
        .with("notes", json!("orphan run"));

    let err = store.insert_row(&table, &fields).await.unwrap_err();
    match err {
        StoreError::Creation { table, .. } => assert_eq!(table, "run"),
        other => panic!("expected Creation error, got {other:?}"),
    }
}

// ============================================================================
// Round-trip
// ============================================================================

#[tokio::test]
async fn test_insert_then_fetch_round_trip() {
    let store = create_store();
    let table = store.registry().resolve("computer").unwrap();

    store
        .insert_row(&table, &computer_fields("alpha"))
        .await
        .unwrap();

    let rows = store
        .fetch_page(&table, &PageQuery::new(1, 10))
        .await
        .unwrap();
    assert!(rows.iter().any(|row| row["device_name"] == json!("alpha")));
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_existing_row() {
    let store = create_store();
    let table = store.registry().resolve("computer").unwrap();
    let created = store
        .insert_row(&table, &computer_fields("doomed"))
        .await
        .unwrap();
    let id = RowId::new(created.insert_id.unwrap()).unwrap();

    let result = store.delete_row(&table, id).await.unwrap();
    assert_eq!(result.affected_rows, Some(1));

    let rows = store
        .fetch_page(&table, &PageQuery::new(1, 10))
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_delete_missing_row_is_not_an_error() {
    let store = create_store();
    let table = store.registry().resolve("computer").unwrap();

    let result = store
        .delete_row(&table, RowId::new(424242).unwrap())
        .await
        .unwrap();
    assert!(result.success);
    assert_eq!(result.affected_rows, Some(0));
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_changes_values() {
    let store = create_store();
    let table = store.registry().resolve("computer").unwrap();
    let created = store
        .insert_row(&table, &computer_fields("before"))
        .await
        .unwrap();
    let id = RowId::new(created.insert_id.unwrap()).unwrap();

    let result = store
        .update_row(&table, id, &computer_fields("after"))
        .await
        .unwrap();
    assert_eq!(result.affected_rows, Some(1));
    assert_eq!(result.message, "computer record updated successfully");

    let rows = store
        .fetch_page(&table, &PageQuery::new(1, 10))
        .await
        .unwrap();
    assert_eq!(rows[0]["device_name"], json!("after"));
}

#[tokio::test]
async fn test_update_with_empty_field_set_fails_fast() {
    let store = create_store();
    let table = store.registry().resolve("computer").unwrap();

    let err = store
        .update_row(&table, RowId::new(1).unwrap(), &FieldSet::new())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::EmptyUpdate));
}

#[tokio::test]
async fn test_update_missing_row_reports_zero_affected() {
    let store = create_store();
    let table = store.registry().resolve("computer").unwrap();

    let result = store
        .update_row(
            &table,
            RowId::new(9999).unwrap(),
            &computer_fields("nobody"),
        )
        .await
        .unwrap();
    assert!(result.success);
    assert_eq!(result.affected_rows, Some(0));
}

#[tokio::test]
async fn test_update_unknown_column_is_rejected() {
    let store = create_store();
    let table = store.registry().resolve("minion").unwrap();
    store
        .insert_row(
            &table,
            &minion_fields("MN00900", "grid-09", "2022-01-01", "-"),
        )
        .await
        .unwrap();

    let sneaky = FieldSet::new().with("name = 'x' WHERE 1=1; --", json!("x"));
    let err = store
        .update_row(&table, RowId::new(1).unwrap(), &sneaky)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::UnknownColumn { .. }));

    // Row unchanged.
    let rows = store
        .fetch_page(&table, &PageQuery::new(1, 10))
        .await
        .unwrap();
    assert_eq!(rows[0]["name"], json!("MN00900"));
}

#[tokio::test]
async fn test_update_id_is_not_writable() {
    let store = create_store();
    let table = store.registry().resolve("computer").unwrap();
    store
        .insert_row(&table, &computer_fields("fixed"))
        .await
        .unwrap();

    let fields = FieldSet::new().with("id", json!(99));
    let err = store
        .update_row(&table, RowId::new(1).unwrap(), &fields)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::UnknownColumn { column, .. } if column == "id"));
}
