use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single tool invocation.
/// Every variant ends up as an `isError` text result; none of them is retried.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Invalid arguments object")]
    InvalidArguments,

    #[error("Failed to convert arguments to request type: {0}")]
    Binding(#[from] serde_path_to_error::Error<serde_json::Error>),

    #[error("Failed to create request: {0}")]
    RequestConstruction(String),

    #[error("Request failed: {0}")]
    Network(reqwest::Error),

    #[error("API error: {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("Failed to format JSON: {0}")]
    Encoding(serde_json::Error),
}

impl From<reqwest::Error> for ToolError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            ToolError::RequestConstruction(error.to_string())
        } else {
            ToolError::Network(error)
        }
    }
}
