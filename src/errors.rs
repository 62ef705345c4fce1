use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Custom error types for the TTS relay service
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upstream TTS error: {0}")]
    Upstream(String),

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl RelayError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// HTTP status the error is surfaced with at the service boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RelayError>;

/// Input validation functions
pub mod validation {
    use super::*;

    /// Validate TTS text input
    pub fn validate_tts_text(text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(RelayError::invalid_input(
                "Please provide valid text content",
            ));
        }

        if text.chars().count() > constants::MAX_TTS_TEXT_LENGTH {
            return Err(RelayError::invalid_input(format!(
                "Text too long (max {} characters)",
                constants::MAX_TTS_TEXT_LENGTH
            )));
        }

        Ok(())
    }

    /// Validate an upstream API key before any network call is made
    pub fn validate_api_key(api_key: &str) -> Result<()> {
        if api_key.trim().is_empty() {
            return Err(RelayError::invalid_input("Please provide a valid API Key"));
        }

        Ok(())
    }
}

/// Constants used throughout the application
pub mod constants {
    // Configuration constants
    pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
    pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

    // Upstream provider constants
    pub const UPSTREAM_URL: &str =
        "https://dashscope.aliyuncs.com/api/v1/services/aigc/multimodal-generation/generation";
    pub const DEFAULT_MODEL: &str = "qwen3-tts-flash";
    pub const DEFAULT_VOICE: &str = "cherry";
    pub const DEFAULT_LANGUAGE: &str = "Chinese";

    // Credential probe constants
    pub const PROBE_TEXT: &str = "Hello, this is a test message for TTS verification.";
    pub const PROBE_LANGUAGE: &str = "English";

    // TTS constants
    pub const MAX_TTS_TEXT_LENGTH: usize = 2000;
    pub const TTS_TIMEOUT_SECS: u64 = 30;

    // Response artifact constants
    pub const OUTPUT_MIME: &str = "audio/wav";
    pub const OUTPUT_DISPOSITION: &str = "attachment; filename=\"tts-output.wav\"";

    // Caller-facing header carrying the upstream API key
    pub const API_KEY_HEADER: &str = "x-api-key";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_error_creation() {
        let config_error = RelayError::config("Test config error");
        assert!(matches!(config_error, RelayError::Config(_)));
        assert_eq!(
            config_error.to_string(),
            "Configuration error: Test config error"
        );

        let upstream_error = RelayError::upstream("Test upstream error");
        assert!(matches!(upstream_error, RelayError::Upstream(_)));
        assert_eq!(
            upstream_error.to_string(),
            "Upstream TTS error: Test upstream error"
        );

        let malformed_error = RelayError::malformed_response("No audio data in API response");
        assert!(matches!(malformed_error, RelayError::MalformedResponse(_)));
        assert_eq!(
            malformed_error.to_string(),
            "Malformed upstream response: No audio data in API response"
        );
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            RelayError::invalid_input("blank text").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RelayError::upstream("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RelayError::malformed_response("no url").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RelayError::config("missing key").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    mod validation_tests {
        use super::super::constants;
        use super::super::validation::*;

        #[test]
        fn test_validate_tts_text_valid() {
            assert!(validate_tts_text("Hello world").is_ok());
            assert!(validate_tts_text("こんにちは").is_ok());
            assert!(validate_tts_text("Test with numbers 123").is_ok());
        }

        #[test]
        fn test_validate_tts_text_empty() {
            assert!(validate_tts_text("").is_err());
            assert!(validate_tts_text("   ").is_err());
        }

        #[test]
        fn test_validate_tts_text_too_long() {
            let long_text = "a".repeat(constants::MAX_TTS_TEXT_LENGTH + 1);
            assert!(validate_tts_text(&long_text).is_err());
        }

        #[test]
        fn test_validate_tts_text_length_counts_characters_not_bytes() {
            // 2000 CJK characters are 6000 bytes; still within the limit.
            let text = "你".repeat(constants::MAX_TTS_TEXT_LENGTH);
            assert!(validate_tts_text(&text).is_ok());

            let text = "你".repeat(constants::MAX_TTS_TEXT_LENGTH + 1);
            assert!(validate_tts_text(&text).is_err());
        }

        #[test]
        fn test_validate_api_key() {
            assert!(validate_api_key("sk-test-key").is_ok());
            assert!(validate_api_key("").is_err());
            assert!(validate_api_key("   ").is_err());
        }
    }
}
