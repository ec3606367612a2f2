use thiserror::Error;

/// Failures while querying the upstream account-status API.
///
/// An expired credential is not an error: the classifier reports it as the
/// `invalid_cookie` status, since it is a business outcome the poller reacts
/// to rather than a fault of the request itself.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// Network-level failure (connection refused, timeout, TLS, etc.).
    ///
    /// The account is treated as unchecked for this cycle; no state changes.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The endpoint returned a non-empty body that is not valid JSON.
    #[error("failed to decode status response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The profile endpoint returned a creation date that is not RFC 3339.
    #[error("failed to parse account creation date: {0}")]
    InvalidCreatedDate(#[from] chrono::ParseError),
}
