use crate::errors::AnalyzerError;
use crate::models::request::{AnalysisRequest, Credential, CredentialSource, ValidatedRequest};

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Checks required fields and resolves the credential, request key first.
pub fn validate_request(
    request: &AnalysisRequest,
    default_api_key: Option<&str>,
) -> Result<(ValidatedRequest, Credential), AnalyzerError> {
    let scenario = present(&request.scenario);
    let difficulty = present(&request.difficulty);
    let user_prompt = present(&request.user_prompt);

    let (Some(scenario), Some(difficulty), Some(user_prompt)) = (scenario, difficulty, user_prompt)
    else {
        let missing: Vec<&str> = [
            ("scenario", scenario),
            ("difficulty", difficulty),
            ("userPrompt", user_prompt),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect();
        return Err(AnalyzerError::ValidationError(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    };

    let credential = match (present(&request.api_key), default_api_key.filter(|k| !k.is_empty())) {
        (Some(key), _) => Credential {
            key: key.to_string(),
            source: CredentialSource::Request,
        },
        (None, Some(key)) => Credential {
            key: key.to_string(),
            source: CredentialSource::Environment,
        },
        (None, None) => {
            return Err(AnalyzerError::CredentialError(
                "API key is required: provide apiKey in the request or set GEMINI_API_KEY"
                    .to_string(),
            ));
        }
    };

    Ok((
        ValidatedRequest {
            scenario: scenario.to_string(),
            difficulty: difficulty.to_string(),
            user_prompt: user_prompt.to_string(),
        },
        credential,
    ))
}
