use std::fmt;

use serde::{self, Deserialize, Serialize};

/// Body of `POST /api/analyze`. Required fields are optional here so the
/// validator, not the JSON extractor, reports what is missing.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scenario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Unknown labels get the strictest treatment.
    pub fn from_label(label: &str) -> Difficulty {
        match label.trim().to_ascii_lowercase().as_str() {
            "beginner" => Difficulty::Beginner,
            "intermediate" => Difficulty::Intermediate,
            _ => Difficulty::Advanced,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// An analysis request whose required fields are all present.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub scenario: String,
    /// Label as sent by the client; kept verbatim for persistence.
    pub difficulty: String,
    pub user_prompt: String,
}

impl ValidatedRequest {
    pub fn level(&self) -> Difficulty {
        Difficulty::from_label(&self.difficulty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Request,
    Environment,
}

#[derive(Clone)]
pub struct Credential {
    pub key: String,
    pub source: CredentialSource,
}

impl Credential {
    pub fn len(&self) -> usize {
        self.key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("key", &format_args!("<{} chars>", self.key.len()))
            .field("source", &self.source)
            .finish()
    }
}
