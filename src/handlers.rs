use actix_web::web::{self, Data};
use actix_web::{HttpRequest, HttpResponse, error};
use chrono::Utc;

use crate::config::Config;
use crate::consts;
use crate::errors::AnalyzerError;
use crate::models::request::{AnalysisRequest, Credential, CredentialSource};
use crate::models::response::{FallbackBody, HealthState, HealthStatus};
use crate::service::AnalysisService;
use crate::validation::validate_request;

fn error_response(error: &AnalyzerError, credential: Option<&Credential>) -> HttpResponse {
    let body = match error {
        AnalyzerError::ValidationError(msg) | AnalyzerError::CredentialError(msg) => {
            FallbackBody::new(msg.as_str())
        }
        AnalyzerError::AllModelsFailed {
            models_tried,
            last_error,
        } => FallbackBody {
            models_tried: Some(models_tried.clone()),
            last_error: last_error.clone(),
            api_key_provided: Some(
                credential.is_some_and(|c| c.source == CredentialSource::Request),
            ),
            api_key_length: Some(credential.map_or(0, Credential::len)),
            ..FallbackBody::new(consts::ALL_MODELS_FAILED_MESSAGE)
        },
        AnalyzerError::ExtractionError(_) | AnalyzerError::ParseError(_) => {
            FallbackBody::new(consts::PARSE_FAILURE_MESSAGE)
        }
        other => FallbackBody::new(other.to_string()),
    };

    HttpResponse::build(error.status_code()).json(body)
}

pub async fn analyze(
    service: Data<AnalysisService>,
    config: Data<Config>,
    request: web::Json<AnalysisRequest>,
) -> HttpResponse {
    let (validated, credential) =
        match validate_request(&request, config.default_api_key.as_deref()) {
            Ok(resolved) => resolved,
            Err(e) => {
                log::info!("rejected analyze request: {}", e);
                return error_response(&e, None);
            }
        };

    log::debug!(
        "analyze request: difficulty {:?}, credential {:?}",
        validated.difficulty,
        credential
    );

    match service.analyze(&validated, &credential).await {
        Ok(feedback) => HttpResponse::Ok().json(feedback),
        Err(e) => {
            log::error!("analyze error: {}", e);
            error_response(&e, Some(&credential))
        }
    }
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus {
        status: HealthState::Ok,
        timestamp: Utc::now(),
    })
}

/// Unparseable bodies get the same fallback envelope as validation errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        let response =
            HttpResponse::BadRequest().json(FallbackBody::new(format!("Invalid request body: {err}")));
        error::InternalError::from_response(err, response).into()
    })
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use serde_json::Value;

    use super::*;
    use crate::errors::ModelInvocationError;

    async fn body_json(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_all_models_failed_body() {
        let credential = Credential {
            key: "abcdef".to_string(),
            source: CredentialSource::Environment,
        };
        let error = AnalyzerError::AllModelsFailed {
            models_tried: vec!["m1".to_string(), "m2".to_string()],
            last_error: Some(ModelInvocationError {
                message: "model m2 failed to generate content".to_string(),
                model: "m2".to_string(),
                details: "API error: boom".to_string(),
            }),
        };

        let response = error_response(&error, Some(&credential));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], consts::ALL_MODELS_FAILED_MESSAGE);
        assert_eq!(body["modelsTried"], serde_json::json!(["m1", "m2"]));
        assert_eq!(body["lastError"]["model"], "m2");
        assert_eq!(body["apiKeyProvided"], false);
        assert_eq!(body["apiKeyLength"], 6);
        assert_eq!(body["isFallback"], true);
    }

    #[actix_web::test]
    async fn test_parse_failure_body_is_generic() {
        let response = error_response(&AnalyzerError::ParseError("eof".to_string()), None);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({"error": consts::PARSE_FAILURE_MESSAGE, "isFallback": true})
        );
    }

    #[actix_web::test]
    async fn test_unexpected_error_carries_message() {
        let response = error_response(&AnalyzerError::ConfigError("bad".to_string()), None);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Config error: bad");
        assert_eq!(body["isFallback"], true);
    }

    #[actix_web::test]
    async fn test_health_is_ok() {
        let response = health().await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }
}
