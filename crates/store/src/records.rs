//! Typed record operations.
//!
//! Thin named wrappers fixing the column set for the entities clients
//! create through dedicated endpoints. Each builds a literal [`FieldSet`]
//! and delegates to [`TableStore::insert_row`]; there is no independent
//! logic here. Fields a client may omit are `Option` and insert NULL.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::core::TableStore;
use crate::error::StoreResult;
use crate::registry::tables;
use crate::types::{FieldSet, MutationResult};

fn opt_string(value: Option<String>) -> Value {
    value.map(Value::String).unwrap_or(Value::Null)
}

fn opt_i64(value: Option<i64>) -> Value {
    value.map(Value::from).unwrap_or(Value::Null)
}

/// A new sequencing run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewRun {
    /// Start timestamp of the run.
    pub date_run_start: Option<String>,
    /// Experiment the run belongs to.
    pub experiment_id: Option<i64>,
    /// Host computer name.
    pub computer: Option<String>,
    /// Device name.
    pub minion: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}

impl NewRun {
    fn into_fields(self) -> FieldSet {
        FieldSet::new()
            .with("date_run_start", opt_string(self.date_run_start))
            .with("experiment_id", opt_i64(self.experiment_id))
            .with("computer", opt_string(self.computer))
            .with("minion", opt_string(self.minion))
            .with("notes", opt_string(self.notes))
    }
}

/// A new experiment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewExperiment {
    /// Experiment name.
    pub name: Option<String>,
    /// Protocol identifier or description.
    pub protocol: Option<String>,
    /// Free-form metadata.
    pub metadata: Option<String>,
    /// Start date.
    pub date_started: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}

impl NewExperiment {
    fn into_fields(self) -> FieldSet {
        FieldSet::new()
            .with("name", opt_string(self.name))
            .with("protocol", opt_string(self.protocol))
            .with("metadata", opt_string(self.metadata))
            .with("date_started", opt_string(self.date_started))
            .with("description", opt_string(self.description))
    }
}

/// A new host computer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewComputer {
    /// Device name. Required by the HTTP layer.
    pub device_name: Option<String>,
}

impl NewComputer {
    fn into_fields(self) -> FieldSet {
        FieldSet::new().with("device_name", opt_string(self.device_name))
    }
}

/// A new MinION device.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewMinion {
    /// Device name. Required by the HTTP layer.
    pub name: Option<String>,
    /// Host computer the device is attached to. Required by the HTTP layer.
    pub computer_used: Option<String>,
    /// Date the device entered service. Required by the HTTP layer.
    pub device_date: Option<String>,
    /// Free-form notes. Required by the HTTP layer.
    pub notes: Option<String>,
}

impl NewMinion {
    fn into_fields(self) -> FieldSet {
        FieldSet::new()
            .with("name", opt_string(self.name))
            .with("computer_used", opt_string(self.computer_used))
            .with("device_date", opt_string(self.device_date))
            .with("notes", opt_string(self.notes))
    }
}

/// Typed creation operations over any [`TableStore`].
#[async_trait]
pub trait RecordStore: TableStore {
    /// Creates a run record.
    async fn create_run(&self, run: NewRun) -> StoreResult<MutationResult> {
        let table = self.registry().resolve(tables::RUN)?;
        self.insert_row(&table, &run.into_fields()).await
    }

    /// Creates an experiment record.
    async fn create_experiment(&self, experiment: NewExperiment) -> StoreResult<MutationResult> {
        let table = self.registry().resolve(tables::EXPERIMENT)?;
        self.insert_row(&table, &experiment.into_fields()).await
    }

    /// Adds a host computer record.
    async fn add_computer(&self, computer: NewComputer) -> StoreResult<MutationResult> {
        let table = self.registry().resolve(tables::COMPUTER)?;
        self.insert_row(&table, &computer.into_fields()).await
    }

    /// Adds a MinION device record.
    async fn add_minion(&self, minion: NewMinion) -> StoreResult<MutationResult> {
        let table = self.registry().resolve(tables::MINION)?;
        self.insert_row(&table, &minion.into_fields()).await
    }
}

impl<S: TableStore + ?Sized> RecordStore for S {}
