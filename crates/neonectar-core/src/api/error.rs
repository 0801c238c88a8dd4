use thiserror::Error;

/// Failure of a documentation API call.
///
/// The facade never swallows these; the UI turns them into a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("documentation API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("could not encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("chat transcript is empty")]
    EmptyTranscript,
}
