//! Error types for the API client.

/// Errors that can occur when dispatching an API call.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP exchange itself failed (connection, timeout, unreadable body).
    /// Safe for the caller to retry; the client never does.
    #[error("Request failed: {0}")]
    Request(String),
    /// The gateway answered with a non-success HTTP status.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The platform returned a structured error payload or a non-success result code.
    #[error("API error {code}: {message}")]
    ApiResponse {
        code: String,
        message: String,
        sub_code: Option<String>,
        sub_msg: Option<String>,
    },
    /// The body was not JSON or did not have the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    /// A structured parameter could not be encoded.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl Error {
    /// Returns the platform error code for [`Error::ApiResponse`].
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Error::ApiResponse { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    /// Whether the failure happened below the API layer (network or HTTP status).
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Request(_) | Error::HttpStatus { .. })
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
