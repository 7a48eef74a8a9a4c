use thiserror::Error;

/// Failures of the outbound sign-up request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Unexpected response status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Invalid endpoint: {endpoint}")]
    InvalidEndpoint { endpoint: String },
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ClientError::Serialization {
                message: error.to_string(),
            }
        } else if error.is_builder() {
            ClientError::InvalidEndpoint {
                endpoint: error
                    .url()
                    .map(|url| url.to_string())
                    .unwrap_or_else(|| error.to_string()),
            }
        } else {
            ClientError::Network {
                message: error.to_string(),
            }
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Text shown in the form's error notice
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network { .. } => {
                "Could not reach the server. Please try again.".to_string()
            }
            ClientError::Status { status, .. } if (400..500).contains(status) => {
                format!("Sign up was rejected by the server ({status}).")
            }
            ClientError::Status { status, .. } => {
                format!("The server failed to process the sign up ({status}). Please try again.")
            }
            ClientError::Serialization { .. } | ClientError::InvalidEndpoint { .. } => {
                "Sign up is currently unavailable.".to_string()
            }
        }
    }
}
