use thiserror::Error;

/// Client-visible failure classes for a weather lookup.
///
/// Each variant carries the exact message text surfaced to the caller; the
/// HTTP layer pairs it with [`ApiError::status`]. Checked in the order the
/// request flows: request shape, upstream call, value decoding, format
/// selection, then a catch-all.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body missing, unparseable, or lacking `city`/`output_format`.
    #[error("Invalid request data")]
    InvalidRequest,

    /// The upstream call failed: connect error, timeout, or non-2xx status.
    #[error("Request Exception: {0}")]
    Upstream(String),

    /// A malformed value was encountered while handling the request.
    #[error("Value Error: {0}")]
    Value(String),

    /// `output_format` was neither `json` nor `xml`.
    #[error("Invalid output_format")]
    InvalidOutputFormat,

    /// Anything unanticipated.
    #[error("An unexpected error occurred: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code paired with this failure class.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::InvalidRequest | ApiError::Value(_) | ApiError::InvalidOutputFormat => 400,
            ApiError::Upstream(_) | ApiError::Internal(_) => 500,
        }
    }
}
