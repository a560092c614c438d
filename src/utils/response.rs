use serde::Serialize;

/// JSON envelope returned by every endpoint: `{"success": bool, ...}`.
///
/// The payload is flattened into the envelope so callers see
/// `{"success": true, "employees": [...]}` rather than a nested `data` key.
/// Payloads must serialize to JSON objects.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize = serde_json::Value> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success envelope carrying only a payload
    pub fn success_with_data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            error: None,
            data: Some(data),
        }
    }

    /// Success envelope carrying a human-readable message plus a payload
    pub fn success_with_message(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            error: None,
            data: Some(data),
        }
    }

    /// Success envelope carrying only a message (e.g. delete acknowledgement)
    pub fn message_only(message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            error: None,
            data: None,
        }
    }

    /// Failure envelope: `{"success": false, "error": "..."}`
    pub fn error(error: &str) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.to_string()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_is_flattened_into_envelope() {
        let resp = ApiResponse::success_with_data(json!({ "employees": [] }));
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["employees"], json!([]));
        assert!(value.get("data").is_none());
        assert!(value.get("error").is_none());
    }

    #[test]
    fn error_envelope_shape() {
        let resp = ApiResponse::<serde_json::Value>::error("Resource not found");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["success"], json!(false));
        assert_eq!(value["error"], json!("Resource not found"));
        assert!(value.get("message").is_none());
    }

    #[test]
    fn message_envelope_shape() {
        let resp =
            ApiResponse::<serde_json::Value>::message_only("Employee deleted successfully");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["message"], json!("Employee deleted successfully"));
    }
}
