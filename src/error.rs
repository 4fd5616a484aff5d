//! Error types for reCAPTCHA site verify operations.

use thiserror::Error;

/// The underlying cause of a failed outbound verification call.
pub type RequestFailure = Box<dyn std::error::Error + Send + Sync>;

/// A site verify failure classification.
///
/// Every call to [`RecaptchaVerifier::verify`](crate::RecaptchaVerifier::verify)
/// yields exactly one validated exchange or exactly one of these variants;
/// the set is closed so callers can match exhaustively. The variants are
/// produced in pipeline order: caller-input checks first, then the network
/// boundary, then the checks against the decoded response.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The caller supplied no action.
    #[error("no captcha action was supplied")]
    MissingAction,

    /// The caller supplied no response token.
    #[error("no captcha response token was supplied")]
    Incomplete,

    /// The outbound call itself failed - transport errors, timeouts,
    /// error statuses and unparseable bodies all land here.
    #[error("site verify request failed: {0}")]
    RequestFailed(#[source] RequestFailure),

    /// The call succeeded but the endpoint returned no body to decode.
    #[error("site verify response had no body")]
    MissingResponseBody,

    /// The endpoint returned one or more explicit error codes.
    #[error("site verify responded with error codes: {0:?}")]
    ResponseErrors(Vec<String>),

    /// The endpoint returned `success != true` without explicit error codes.
    #[error("site verify was not successful")]
    NotSuccessful,

    /// The action the endpoint verified does not match the action requested.
    #[error("captcha action mismatch: requested {requested:?}, verified {verified:?}")]
    ActionMismatch {
        /// The action the caller asked to verify.
        requested: String,
        /// The action reported back by the endpoint, if any.
        verified: Option<String>,
    },
}

impl VerifyError {
    /// Returns the user-facing error code for this failure, suitable for
    /// field-level error reporting by collaborators. The mapping is 1:1.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingAction => "captcha.error.actionMissing",
            Self::Incomplete => "captcha.error.incomplete",
            Self::RequestFailed(_) => "captcha.error.request",
            Self::MissingResponseBody => "captcha.error.responseMissing",
            Self::ResponseErrors(_) => "captcha.error.response",
            Self::NotSuccessful => "captcha.error.failed",
            Self::ActionMismatch { .. } => "captcha.error.actionMismatch",
        }
    }
}

impl From<reqwest::Error> for VerifyError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed(Box::new(err))
    }
}

impl From<serde_json::Error> for VerifyError {
    fn from(err: serde_json::Error) -> Self {
        Self::RequestFailed(Box::new(err))
    }
}
