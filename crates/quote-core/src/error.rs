use thiserror::Error;

/// Why a generation attempt produced no quote.
///
/// Callers of [`crate::generator::QuoteGenerator::generate`] never see these;
/// they are logged and collapsed into `None`.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("environment variable {var} is not set")]
    MissingCredential { var: String },

    #[error("request to text service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("text service returned {status}: {body}")]
    Service { status: u16, body: String },

    #[error("text service returned no text")]
    EmptyResponse,

    #[error("response is not valid JSON: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("response JSON is not an object")]
    NotAnObject,

    #[error("response field `{field}` is missing or empty")]
    MissingField { field: &'static str },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("quote store must contain at least one quote")]
    Empty,

    #[error("quote #{index} has a blank text or author")]
    BlankEntry { index: usize },
}
