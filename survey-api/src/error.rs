/// Error types for the survey API client
use thiserror::Error;

/// Shown when the server gives no usable message.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    /// A 2xx response whose envelope said `success: false`
    #[error("request rejected: {message}")]
    Rejected { message: String },

    /// The body did not have the expected shape
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the user: the server's own message when there is one.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ApiError::Rejected { message } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins() {
        let err = ApiError::Status {
            status: 409,
            message: Some("Survey for June already submitted".into()),
        };
        assert_eq!(err.user_message(), "Survey for June already submitted");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn generic_fallback() {
        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), GENERIC_FAILURE);
        assert_eq!(ApiError::Decode("x".into()).user_message(), GENERIC_FAILURE);
        let blank = ApiError::Rejected { message: " ".into() };
        assert_eq!(blank.user_message(), GENERIC_FAILURE);
    }
}
