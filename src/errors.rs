use std::fmt;

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// One failed attempt in the model fallback chain.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModelInvocationError {
    pub message: String,
    pub model: String,
    pub details: String,
}

impl ModelInvocationError {
    pub fn new(model: &str, cause: &AnalyzerError) -> Self {
        Self {
            message: format!("model {model} failed to generate content"),
            model: model.to_string(),
            details: cause.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum AnalyzerError {
    ValidationError(String),
    CredentialError(String),
    AllModelsFailed {
        models_tried: Vec<String>,
        last_error: Option<ModelInvocationError>,
    },
    ExtractionError(String),
    ParseError(String),
    PersistenceError(String),
    ApiError(String),
    NetworkError(String),
    ConfigError(String),
}

impl AnalyzerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalyzerError::ValidationError(_) | AnalyzerError::CredentialError(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzerError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AnalyzerError::CredentialError(msg) => write!(f, "Credential error: {}", msg),
            AnalyzerError::AllModelsFailed {
                models_tried,
                last_error,
            } => {
                write!(f, "All models failed: tried [{}]", models_tried.join(", "))?;
                if let Some(last) = last_error {
                    write!(f, ", last error: {}", last.details)?;
                }
                Ok(())
            }
            AnalyzerError::ExtractionError(msg) => write!(f, "Extraction error: {}", msg),
            AnalyzerError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AnalyzerError::PersistenceError(msg) => write!(f, "Persistence error: {}", msg),
            AnalyzerError::ApiError(msg) => write!(f, "API error: {}", msg),
            AnalyzerError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            AnalyzerError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for AnalyzerError {}

impl From<reqwest::Error> for AnalyzerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            AnalyzerError::NetworkError(err.to_string())
        } else {
            AnalyzerError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(err: serde_json::Error) -> Self {
        AnalyzerError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for AnalyzerError {
    fn from(err: std::io::Error) -> Self {
        AnalyzerError::ConfigError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AnalyzerError {
    fn from(err: std::num::ParseIntError) -> Self {
        AnalyzerError::ConfigError(err.to_string())
    }
}

#[cfg(feature = "postgres")]
impl From<tokio_postgres::Error> for AnalyzerError {
    fn from(err: tokio_postgres::Error) -> Self {
        AnalyzerError::PersistenceError(err.to_string())
    }
}

#[cfg(feature = "postgres")]
impl From<deadpool_postgres::PoolError> for AnalyzerError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        AnalyzerError::PersistenceError(err.to_string())
    }
}

#[cfg(feature = "postgres")]
impl From<deadpool_postgres::CreatePoolError> for AnalyzerError {
    fn from(err: deadpool_postgres::CreatePoolError) -> Self {
        AnalyzerError::PersistenceError(err.to_string())
    }
}
