use crate::consts;
use crate::errors::AnalyzerError;
use crate::models::gemini::{GenerateContentRequest, GenerateContentResponse};

/// Client bound to a single model and credential.
pub(crate) struct LLMClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl LLMClient {
    pub(crate) fn new(client: reqwest::Client, base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url,
            consts::API_VERSION,
            self.model
        )
    }

    pub(crate) async fn generate_content(&self, prompt: &str) -> Result<String, AnalyzerError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(AnalyzerError::ApiError(format!(
                "error: status {status}, text {text}"
            )));
        }

        let payload: GenerateContentResponse = response.json().await?;
        payload.text().ok_or_else(|| {
            AnalyzerError::ApiError(format!(
                "model {} returned no text, finish reason: {}",
                self.model,
                payload.finish_reason().unwrap_or("unknown")
            ))
        })
    }
}
