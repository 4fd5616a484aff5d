//! Request, response and exchange values for one site verify round-trip.

use serde::{Deserialize, Serialize};

use crate::error::VerifyError;

/// A validated [site verify request](https://developers.google.com/recaptcha/docs/verify#api_request).
///
/// Constructed only through [`VerifyRequest::build`], which guarantees the
/// action and response token are present. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyRequest {
    /// The action label the challenge was attached to. Kept locally to
    /// validate the response; never sent to the verification endpoint.
    pub action: String,

    /// The response token produced by the client-side widget.
    pub response: String,

    /// The IP address of the end user, if known.
    pub remote_ip: Option<String>,
}

impl VerifyRequest {
    /// Validates the caller-supplied values and assembles a request.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::MissingAction`] if `action` is absent or
    /// blank, then [`VerifyError::Incomplete`] if `response_token` is
    /// absent or blank.
    pub fn build(
        remote_ip: Option<&str>,
        action: Option<&str>,
        response_token: Option<&str>,
    ) -> Result<Self, VerifyError> {
        let action = match action {
            Some(action) if !action.trim().is_empty() => action,
            _ => return Err(VerifyError::MissingAction),
        };

        let response = match response_token {
            Some(token) if !token.trim().is_empty() => token,
            _ => return Err(VerifyError::Incomplete),
        };

        Ok(Self {
            action: action.to_string(),
            response: response.to_string(),
            remote_ip: remote_ip
                .map(str::trim)
                .filter(|ip| !ip.is_empty())
                .map(str::to_string),
        })
    }
}

/// A [site verify response](https://developers.google.com/recaptcha/docs/v3#site-verify-response).
///
/// Decoded leniently: every field is optional and unknown fields in the
/// payload are ignored. Serializes back to the wire field names, omitting
/// absent fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Whether the endpoint considers the token valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    /// The risk score for this request (0.0 to 1.0). Preserved but not
    /// consulted by the validation checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// The action the endpoint believes it verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Timestamp of the challenge load, opaque to this crate.
    #[serde(
        default,
        rename = "challenge_ts",
        skip_serializing_if = "Option::is_none"
    )]
    pub challenge_timestamp: Option<String>,

    /// Hostname of the site where the challenge was solved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    /// Error codes reported by the endpoint.
    #[serde(
        default,
        rename = "error-codes",
        skip_serializing_if = "Option::is_none"
    )]
    pub error_codes: Option<Vec<String>>,
}

/// The paired request and response of one verification round-trip.
///
/// Exists so the later checks can compare the response against the action
/// that was originally requested; returned to the caller on success.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyExchange {
    /// The request that was verified.
    pub request: VerifyRequest,

    /// The decoded response from the verification endpoint.
    pub response: VerifyResponse,
}
