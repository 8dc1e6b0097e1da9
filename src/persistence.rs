use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AnalyzerError;
use crate::models::request::ValidatedRequest;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedRecord {
    pub scenario: String,
    pub difficulty: String,
    pub user_prompt: String,
    pub feedback: Value,
    pub timestamp: DateTime<Utc>,
}

impl PersistedRecord {
    pub fn new(request: &ValidatedRequest, feedback: &Value) -> Self {
        Self {
            scenario: request.scenario.clone(),
            difficulty: request.difficulty.clone(),
            user_prompt: request.user_prompt.clone(),
            feedback: feedback.clone(),
            timestamp: Utc::now(),
        }
    }
}

/// Append-only sink for analysis records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert(&self, record: &PersistedRecord) -> Result<(), AnalyzerError>;
}

/// Best-effort writer; a missing store disables persistence entirely.
#[derive(Clone, Default)]
pub struct Persister {
    store: Option<Arc<dyn RecordStore>>,
}

impl Persister {
    pub fn new(store: Option<Arc<dyn RecordStore>>) -> Self {
        Self { store }
    }

    pub fn disabled() -> Self {
        Self { store: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// Never fails: insert errors are logged and dropped.
    pub async fn persist(&self, request: &ValidatedRequest, feedback: &Value) {
        let Some(store) = &self.store else {
            return;
        };

        let record = PersistedRecord::new(request, feedback);
        match store.insert(&record).await {
            Ok(()) => log::debug!("analysis record saved"),
            Err(e) => log::error!("failed to save analysis record: {}", e),
        }
    }

    /// Builds the persister from an optional connection string. A store that
    /// cannot be reached at startup leaves persistence disabled.
    pub async fn connect(database_url: Option<&str>) -> Self {
        let Some(database_url) = database_url else {
            log::info!("DATABASE_URL not set, persistence disabled");
            return Self::disabled();
        };

        match open_store(database_url).await {
            Ok(store) => {
                log::info!("database connected, persistence enabled");
                Self::new(Some(store))
            }
            Err(e) => {
                log::error!("database connection failed, persistence disabled: {}", e);
                Self::disabled()
            }
        }
    }
}

#[cfg(feature = "postgres")]
async fn open_store(database_url: &str) -> Result<Arc<dyn RecordStore>, AnalyzerError> {
    Ok(Arc::new(postgres::PostgresStore::connect(database_url).await?))
}

#[cfg(not(feature = "postgres"))]
async fn open_store(_database_url: &str) -> Result<Arc<dyn RecordStore>, AnalyzerError> {
    Err(AnalyzerError::ConfigError(
        "built without the postgres feature".to_string(),
    ))
}

#[cfg(feature = "postgres")]
pub mod postgres {
    use async_trait::async_trait;
    use deadpool_postgres::{Config, ManagerConfig, Pool, RecyclingMethod, Runtime};
    use tokio_postgres::NoTls;

    use super::{PersistedRecord, RecordStore};
    use crate::consts::RECORDS_TABLE;
    use crate::errors::AnalyzerError;

    pub struct PostgresStore {
        pool: Pool,
    }

    impl PostgresStore {
        pub async fn connect(database_url: &str) -> Result<Self, AnalyzerError> {
            let mut cfg = Config::new();
            cfg.url = Some(database_url.to_string());
            cfg.manager = Some(ManagerConfig {
                recycling_method: RecyclingMethod::Fast,
            });
            let pool = cfg.create_pool(Some(Runtime::Tokio1), NoTls)?;

            let client = pool.get().await?;
            client
                .batch_execute(&format!(
                    "CREATE TABLE IF NOT EXISTS {RECORDS_TABLE} (
                        id BIGSERIAL PRIMARY KEY,
                        scenario TEXT NOT NULL,
                        difficulty TEXT NOT NULL,
                        user_prompt TEXT NOT NULL,
                        feedback JSONB NOT NULL,
                        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
                    )"
                ))
                .await?;

            Ok(Self { pool })
        }
    }

    #[async_trait]
    impl RecordStore for PostgresStore {
        async fn insert(&self, record: &PersistedRecord) -> Result<(), AnalyzerError> {
            let client = self.pool.get().await?;
            client
                .execute(
                    &format!(
                        "INSERT INTO {RECORDS_TABLE} \
                         (scenario, difficulty, user_prompt, feedback, created_at) \
                         VALUES ($1, $2, $3, $4, $5)"
                    ),
                    &[
                        &record.scenario,
                        &record.difficulty,
                        &record.user_prompt,
                        &record.feedback,
                        &record.timestamp,
                    ],
                )
                .await?;
            Ok(())
        }
    }
}
