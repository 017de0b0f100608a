//! Response envelope shared by every endpoint.

use std::collections::BTreeMap;

use serde::Serialize;

/// Uniform `{message, status, data}` envelope.
///
/// Error responses omit `data` and may carry a per-field `errors` map for
/// validation failures.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Human-readable outcome.
    pub message: String,
    /// HTTP status code, mirrored into the body.
    pub status: u16,
    /// Payload on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Field-level validation errors, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl<T> ApiResponse<T> {
    /// Success envelope with a payload.
    #[must_use]
    pub fn success(message: &str, status: u16, data: T) -> Self {
        Self {
            message: message.to_string(),
            status,
            data: Some(data),
            errors: None,
        }
    }
}

impl ApiResponse<()> {
    /// Error envelope with only a message.
    #[must_use]
    pub fn error(message: &str, status: u16) -> Self {
        Self {
            message: message.to_string(),
            status,
            data: None,
            errors: None,
        }
    }

    /// Error envelope with a field error map.
    #[must_use]
    pub fn validation(message: &str, status: u16, errors: BTreeMap<String, String>) -> Self {
        Self {
            message: message.to_string(),
            status,
            data: None,
            errors: Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_data() {
        let body = ApiResponse::success("Item found", 200, 7);
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json["status"], 200);
        assert_eq!(json["data"], 7);
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn error_omits_data() {
        let body = ApiResponse::error("Item not found", 404);
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json["status"], 404);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn validation_carries_field_map() {
        let mut errors = BTreeMap::new();
        errors.insert("name".to_string(), "must not be blank".to_string());
        let body = ApiResponse::validation("Validation failed", 400, errors);
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json["errors"]["name"], "must not be blank");
    }
}
