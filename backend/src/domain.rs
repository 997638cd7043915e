use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use shared::{DataRecord, SubmissionPayload};
use tokio::sync::RwLock;
use tracing::info;

use crate::error::AppError;

/// In-memory store of submitted records, keyed by id.
///
/// Ids start at 1 and are never reused, even after a delete.
#[derive(Clone, Default)]
pub struct DataStore {
    inner: Arc<RwLock<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    records: BTreeMap<u64, DataRecord>,
    last_id: u64,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a submission
    pub async fn create(&self, payload: SubmissionPayload) -> Result<DataRecord, AppError> {
        validate(&payload)?;

        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let record = DataRecord {
            id: inner.last_id,
            name: payload.name,
            value: payload.value,
            description: payload.description,
            created_at: Utc::now().to_rfc3339(),
        };
        inner.records.insert(record.id, record.clone());

        info!("Stored record {} ({} total)", record.id, inner.records.len());
        Ok(record)
    }

    /// All records in id order
    pub async fn list(&self) -> Vec<DataRecord> {
        self.inner.read().await.records.values().cloned().collect()
    }

    pub async fn get(&self, id: u64) -> Result<DataRecord, AppError> {
        self.inner
            .read()
            .await
            .records
            .get(&id)
            .cloned()
            .ok_or(AppError::NotFound(id))
    }

    pub async fn delete(&self, id: u64) -> Result<DataRecord, AppError> {
        let removed = self.inner.write().await.records.remove(&id);
        let record = removed.ok_or(AppError::NotFound(id))?;
        info!("Deleted record {}", id);
        Ok(record)
    }
}

fn validate(payload: &SubmissionPayload) -> Result<(), AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("이름은 필수 입력 항목입니다.".to_string()));
    }
    if payload.value.trim().is_empty() {
        return Err(AppError::Validation("메시지는 필수 입력 항목입니다.".to_string()));
    }
    Ok(())
}
