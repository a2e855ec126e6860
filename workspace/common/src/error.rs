use thiserror::Error;

/// Everything that can go wrong talking to the waste backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),

    /// A detail view was opened without the identifier it needs.
    #[error("No {0} selected")]
    MissingContext(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed with status 404: not found");
    }

    #[test]
    fn test_network_error_display() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_missing_context_display() {
        assert_eq!(ApiError::MissingContext("driver").to_string(), "No driver selected");
    }
}
