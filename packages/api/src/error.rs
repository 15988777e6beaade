use thiserror::Error;

/// Failure of a single call to the hotel backend.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("server returned {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        message: Option<String>,
    },
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("invalid API configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// The human-readable message the backend attached to a rejection, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message() {
        let err = ApiError::Status {
            status: 404,
            message: Some("Incorrect passwords".into()),
        };
        assert_eq!(err.server_message(), Some("Incorrect passwords"));
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "server returned 404: Incorrect passwords");

        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.server_message(), None);
        assert_eq!(err.status(), None);
    }
}
