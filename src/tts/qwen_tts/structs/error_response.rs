use serde::{Deserialize, Serialize};

/// JSON body the upstream API returns on non-success statuses.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ErrorResponse {
    pub code: Option<String>,
    pub message: Option<String>,
    pub request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_body() {
        let body: ErrorResponse = serde_json::from_str(
            r#"{"code":"InvalidApiKey","message":"Invalid API-key provided.","request_id":"abc"}"#,
        )
        .unwrap();
        assert_eq!(body.message.as_deref(), Some("Invalid API-key provided."));
    }
}
