#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use prompt_feedback::errors::AnalyzerError;
use prompt_feedback::persistence::{PersistedRecord, RecordStore};

#[derive(Default)]
pub struct InMemoryRecordStore {
    records: Mutex<Vec<PersistedRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn records(&self) -> Vec<PersistedRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert(&self, record: &PersistedRecord) -> Result<(), AnalyzerError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

pub struct FailingRecordStore;

#[async_trait]
impl RecordStore for FailingRecordStore {
    async fn insert(&self, _record: &PersistedRecord) -> Result<(), AnalyzerError> {
        Err(AnalyzerError::PersistenceError(
            "connection reset by peer".to_string(),
        ))
    }
}
