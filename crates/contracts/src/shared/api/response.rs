use serde::{Deserialize, Serialize};

use super::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

/// Envelope every backend endpoint answers with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ApiStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: ApiStatus::Success,
            data: Some(data),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Error,
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ApiStatus::Success
    }

    /// Unwraps the envelope; `status` is the HTTP status used for the fallback message
    pub fn into_result(self, status: u16) -> Result<T, ApiError> {
        match self.status {
            ApiStatus::Success => self.data.ok_or_else(ApiError::empty_payload),
            ApiStatus::Error => Err(self
                .message
                .map(ApiError::server)
                .unwrap_or_else(|| ApiError::http_status(status))),
        }
    }
}

/// Envelope carrying only a message, used by delete endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageResponse {
    pub fn into_result(self, status: u16) -> Result<(), ApiError> {
        match self.status {
            ApiStatus::Success => Ok(()),
            ApiStatus::Error => Err(self
                .message
                .map(ApiError::server)
                .unwrap_or_else(|| ApiError::http_status(status))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category::Category;

    #[test]
    fn test_success_envelope() {
        let json = r#"{
            "status": "success",
            "data": [{
                "id": 1, "user_id": 7, "category_name": "Kamera",
                "description": "Kamera dan lensa",
                "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-01T00:00:00Z"
            }]
        }"#;
        let response: ApiResponse<Vec<Category>> = serde_json::from_str(json).unwrap();
        assert!(response.is_success());
        let categories = response.into_result(200).unwrap();
        assert_eq!(categories[0].category_name, "Kamera");
    }

    #[test]
    fn test_error_envelope_prefers_server_message() {
        let response: ApiResponse<Vec<Category>> =
            serde_json::from_str(r#"{"status":"error","message":"Kategori sudah ada"}"#).unwrap();
        assert_eq!(
            response.into_result(409).unwrap_err().message,
            "Kategori sudah ada"
        );

        let bare: ApiResponse<Vec<Category>> =
            serde_json::from_str(r#"{"status":"error"}"#).unwrap();
        assert_eq!(
            bare.into_result(500).unwrap_err().message,
            "Request failed with status 500"
        );
    }

    #[test]
    fn test_success_without_data_is_an_error() {
        let response: ApiResponse<Category> = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert_eq!(
            response.into_result(200).unwrap_err().code,
            ApiError::EMPTY_PAYLOAD
        );
    }

    #[test]
    fn test_message_response() {
        let ok: MessageResponse =
            serde_json::from_str(r#"{"status":"success","message":"Deleted"}"#).unwrap();
        assert!(ok.into_result(200).is_ok());
    }
}
