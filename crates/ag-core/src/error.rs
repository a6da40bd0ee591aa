use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    /// Server answered with a non-2xx status. `message` carries the JSON
    /// `"message"` field when the body had one.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Status { status: u16, message: Option<String> },
    /// No response received: connect failure or timeout.
    #[error("no response: {0}")]
    Network(String),
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("session storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GatewayError>;

impl GatewayError {
    /// HTTP status of a server-rejected request, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// True when the request never got a response (network failure, timeout).
    pub fn is_network(&self) -> bool {
        matches!(self, GatewayError::Network(_))
    }

    /// Server-supplied message, if the rejection carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GatewayError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_helpers() {
        let err = GatewayError::Status { status: 401, message: Some("jwt expired".into()) };
        assert!(err.is_unauthorized());
        assert!(!err.is_network());
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.server_message(), Some("jwt expired"));
    }

    #[test]
    fn test_network_distinct_from_status() {
        let err = GatewayError::Network("timeout after 30000 ms".into());
        assert!(err.is_network());
        assert!(!err.is_unauthorized());
        assert_eq!(err.status(), None);
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn test_display_with_message() {
        let err = GatewayError::Status { status: 404, message: Some("not found".into()) };
        assert_eq!(err.to_string(), "HTTP 404: not found");
    }

    #[test]
    fn test_display_without_message() {
        let err = GatewayError::Status { status: 500, message: None };
        assert_eq!(err.to_string(), "HTTP 500: request failed");
    }
}
