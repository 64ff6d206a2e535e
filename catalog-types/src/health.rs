use derive_more::Display;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use typesafe_repository::macros::Id;
use typesafe_repository::{Identity, RefIdentity};
use uuid::Uuid;

pub mod repository;

#[derive(Serialize, Deserialize, Display, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    #[display("running")]
    Running,
    #[display("success")]
    Success,
    #[display("partial_success")]
    PartialSuccess,
    #[display("failed")]
    Failed,
}

impl TryFrom<&str> for SyncStatus {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "running" => Ok(Self::Running),
            "success" => Ok(Self::Success),
            "partial_success" => Ok(Self::PartialSuccess),
            "failed" => Ok(Self::Failed),
            s => Err(anyhow::anyhow!("Unknown sync status: {s}")),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SyncError {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

/// One row of the `sync_health` audit table: a single import attempt.
#[derive(Id, Clone, Debug, PartialEq)]
#[Id(ref_id)]
pub struct SyncHealth {
    #[id]
    pub id: Uuid,
    pub sync_type: String,
    pub source: String,
    pub status: SyncStatus,
    pub start_time: OffsetDateTime,
    pub end_time: Option<OffsetDateTime>,
    pub duration_seconds: Option<f64>,
    pub bytes_processed: i64,
    pub items_processed: serde_json::Value,
    pub error_details: Vec<SyncError>,
}

impl SyncHealth {
    pub fn start(sync_type: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sync_type: sync_type.into(),
            source: source.into(),
            status: SyncStatus::Running,
            start_time: OffsetDateTime::now_utc(),
            end_time: None,
            duration_seconds: None,
            bytes_processed: 0,
            items_processed: serde_json::Value::Null,
            error_details: Vec::new(),
        }
    }

    pub fn error_count(&self) -> i32 {
        self.error_details.len() as i32
    }
}
