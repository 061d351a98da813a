//! Cleanup and parsing of model responses.

use serde::de::DeserializeOwned;

use crate::error::AiError;

/// Pulls the JSON object out of a model response.
///
/// Models sometimes wrap the object in code fences or add prose around it.
/// The slice from the first `{` to the last `}` is returned.
pub fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(text[start..=end].trim())
}

/// Parses one insight section from a raw model response.
pub fn parse_section<T: DeserializeOwned>(section: &str, raw: &str) -> Result<T, AiError> {
    let json = extract_json(raw).ok_or_else(|| {
        AiError::invalid_response(format!("{} response contains no JSON object", section))
    })?;
    serde_json::from_str(json)
        .map_err(|e| AiError::invalid_response(format!("{} response: {}", section, e)))
}
