use serde::{Deserialize, Serialize};

/// Result of a backend call as seen by the client
pub type ApiResult<T> = Result<T, ApiError>;

/// Client-side error of a backend call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub const NOT_AUTHENTICATED: &'static str = "NOT_AUTHENTICATED";
    pub const SESSION_EXPIRED: &'static str = "SESSION_EXPIRED";
    pub const NETWORK: &'static str = "NETWORK_ERROR";
    pub const HTTP_STATUS: &'static str = "HTTP_STATUS";
    pub const SERVER: &'static str = "SERVER_ERROR";
    pub const EMPTY_PAYLOAD: &'static str = "EMPTY_PAYLOAD";
    pub const VALIDATION: &'static str = "VALIDATION_ERROR";

    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// No stored token for an endpoint that needs one
    pub fn not_authenticated() -> Self {
        Self::new(Self::NOT_AUTHENTICATED, "Not authenticated")
    }

    /// Backend answered 401
    pub fn session_expired() -> Self {
        Self::new(Self::SESSION_EXPIRED, "Session expired. Please login again.")
    }

    /// Transport failure or timeout
    pub fn network() -> Self {
        Self::new(Self::NETWORK, "Network error. Please try again.")
    }

    pub fn http_status(status: u16) -> Self {
        Self::new(
            Self::HTTP_STATUS,
            format!("Request failed with status {}", status),
        )
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(Self::SERVER, message)
    }

    /// Envelope reported success but carried no `data`
    pub fn empty_payload() -> Self {
        Self::new(Self::EMPTY_PAYLOAD, "Response contained no data")
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(Self::VALIDATION, message)
    }

    pub fn is_session_expired(&self) -> bool {
        self.code == Self::SESSION_EXPIRED
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::server(format!("Invalid response: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_messages() {
        assert_eq!(ApiError::not_authenticated().message, "Not authenticated");
        assert_eq!(
            ApiError::session_expired().message,
            "Session expired. Please login again."
        );
        assert_eq!(ApiError::network().message, "Network error. Please try again.");
        assert_eq!(
            ApiError::http_status(503).message,
            "Request failed with status 503"
        );
    }

    #[test]
    fn test_display_includes_code() {
        let err = ApiError::validation("Nama kategori wajib diisi");
        assert_eq!(err.to_string(), "[VALIDATION_ERROR] Nama kategori wajib diisi");
        assert!(!err.is_session_expired());
        assert!(ApiError::session_expired().is_session_expired());
    }
}
