use serde_json::Value;

use crate::errors::AnalyzerError;

/// Parses the span from the first `{` to the last `}` of a model reply.
///
/// Braces are not balanced: prose containing stray braces before or after the
/// intended object yields a wrong slice, which then fails as a parse error.
pub fn extract_json(raw: &str) -> Result<Value, AnalyzerError> {
    let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) else {
        return Err(AnalyzerError::ExtractionError(
            "no JSON object found in model response".to_string(),
        ));
    };
    if end < start {
        return Err(AnalyzerError::ExtractionError(
            "closing brace precedes opening brace in model response".to_string(),
        ));
    }

    Ok(serde_json::from_str(&raw[start..=end])?)
}
