use chrono::{DateTime, Utc};
use serde::{self, Deserialize, Serialize};

use crate::errors::ModelInvocationError;

/// Body of every failed analyze response.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FallbackBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub models_tried: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_error: Option<ModelInvocationError>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub api_key_provided: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub api_key_length: Option<usize>,
    pub is_fallback: bool,
}

impl FallbackBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            models_tried: None,
            last_error: None,
            api_key_provided: None,
            api_key_length: None,
            is_fallback: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Ok,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HealthStatus {
    pub status: HealthState,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_body_omits_absent_diagnostics() {
        let value = serde_json::to_value(FallbackBody::new("bad request")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"error": "bad request", "isFallback": true})
        );
    }

    #[test]
    fn test_health_status_serializes_ok() {
        let health = HealthStatus {
            status: HealthState::Ok,
            timestamp: Utc::now(),
        };
        let value = serde_json::to_value(health).unwrap();
        assert_eq!(value["status"], "ok");
        assert!(value["timestamp"].is_string());
    }
}
