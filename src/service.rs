use serde_json::Value;

use crate::config::Config;
use crate::errors::{AnalyzerError, ModelInvocationError};
use crate::extract::extract_json;
use crate::llm_client::LLMClient;
use crate::models::request::{Credential, ValidatedRequest};
use crate::persistence::Persister;
use crate::prompt::compose_prompt;

/// Raw reply of the first model in the chain that answered.
#[derive(Debug, Clone)]
pub struct Generation {
    pub text: String,
    pub model: String,
    pub failures: Vec<ModelInvocationError>,
}

#[derive(Clone)]
pub struct AnalysisService {
    http_client: reqwest::Client,
    api_base: String,
    models: Vec<String>,
    persister: Persister,
}

impl AnalysisService {
    pub fn new(
        http_client: reqwest::Client,
        api_base: &str,
        models: Vec<String>,
        persister: Persister,
    ) -> Self {
        Self {
            http_client,
            api_base: api_base.to_string(),
            models,
            persister,
        }
    }

    pub fn from_config(http_client: reqwest::Client, config: &Config, persister: Persister) -> Self {
        Self::new(
            http_client,
            &config.api_base,
            config.models.clone(),
            persister,
        )
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Tries each model once, in order, and returns the first reply.
    pub async fn generate_with_fallback(
        &self,
        credential: &Credential,
        prompt: &str,
    ) -> Result<Generation, AnalyzerError> {
        log::info!(
            "api key present: {}, length: {}, source: {:?}",
            !credential.is_empty(),
            credential.len(),
            credential.source
        );

        let mut failures: Vec<ModelInvocationError> = vec![];

        for model in &self.models {
            log::info!("trying model: {}", model);
            let client = LLMClient::new(
                self.http_client.clone(),
                &self.api_base,
                &credential.key,
                model,
            );

            match client.generate_content(prompt).await {
                Ok(text) => {
                    log::info!("model {} succeeded", model);
                    return Ok(Generation {
                        text,
                        model: model.clone(),
                        failures,
                    });
                }
                Err(e) => {
                    log::warn!("model {} failed: {}", model, e);
                    failures.push(ModelInvocationError::new(model, &e));
                }
            }
        }

        Err(AnalyzerError::AllModelsFailed {
            models_tried: self.models.clone(),
            last_error: failures.pop(),
        })
    }

    /// Generates, extracts and (best-effort) persists feedback for a request.
    pub async fn analyze(
        &self,
        request: &ValidatedRequest,
        credential: &Credential,
    ) -> Result<Value, AnalyzerError> {
        let prompt = compose_prompt(request);
        let generation = self.generate_with_fallback(credential, &prompt).await?;
        log::debug!(
            "model {} replied with {} chars after {} failed attempts",
            generation.model,
            generation.text.len(),
            generation.failures.len()
        );

        let feedback = extract_json(&generation.text).inspect_err(|e| {
            log::error!("failed to parse response of model {}: {}", generation.model, e);
        })?;

        self.persister.persist(request, &feedback).await;

        Ok(feedback)
    }
}
