use serde::{Deserialize, Serialize};

/// Envelope codes shared with the admin frontend.
pub mod error_codes {
    pub const SUCCESS: &str = "0";
    pub const PARAM_ERROR: &str = "1001";
    pub const NOT_FOUND: &str = "4004";
    pub const SERVER_ERROR: &str = "5000";
}

/// `{ code, result, message }` wrapper used by every `/api` route.
/// `code` is `"0"` on success; `result` is `null` on error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: String,
    pub result: Option<T>,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(result: T) -> Self {
        Self {
            code: error_codes::SUCCESS.to_string(),
            result: Some(result),
            message: String::new(),
        }
    }

    pub fn error(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            result: None,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::success(vec![1, 2])).unwrap();
        assert_eq!(body, json!({ "code": "0", "result": [1, 2], "message": "" }));
    }

    #[test]
    fn test_error_envelope_has_null_result() {
        let body =
            serde_json::to_value(ApiResponse::<()>::error(error_codes::PARAM_ERROR, "bad")).unwrap();
        assert_eq!(body, json!({ "code": "1001", "result": null, "message": "bad" }));
    }
}
