//! Core verification pipeline for reCAPTCHA site verify.

use reqwest::Client;

use crate::config::RecaptchaConfig;
use crate::error::VerifyError;
use crate::types::{VerifyExchange, VerifyRequest, VerifyResponse};

/// Maximum number of idle connections to maintain per host
const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 10;

/// Verifies response tokens against the configured site verify endpoint.
///
/// Holds the immutable configuration and a pooled HTTP client; `verify`
/// takes `&self` and is safe to call from concurrent tasks. Each call is
/// one fresh round-trip - nothing is cached or retried.
pub struct RecaptchaVerifier {
    config: RecaptchaConfig,
    http_client: Client,
}

impl RecaptchaVerifier {
    /// Creates a verifier for the given configuration. The configured
    /// timeout is applied to every outbound request.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be constructed.
    #[must_use]
    pub fn new(config: RecaptchaConfig) -> Self {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS_PER_HOST)
            .user_agent(format!("recaptcha-verifier/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    /// Verifies a response token for the given action.
    ///
    /// Runs the pipeline in a fixed order, short-circuiting on the first
    /// failure: validate the caller's inputs, post to the endpoint, decode
    /// the payload, then check explicit error codes, the success flag and
    /// finally the action match.
    ///
    /// # Errors
    ///
    /// Returns the [`VerifyError`] variant for the first failing step; see
    /// the variant documentation for the classification of each.
    pub async fn verify(
        &self,
        ip: &str,
        action: Option<&str>,
        response_token: Option<&str>,
    ) -> Result<VerifyExchange, VerifyError> {
        let request = VerifyRequest::build(Some(ip), action, response_token)?;
        let exchange = self.post(request).await?;

        log(&exchange);

        check_errors(exchange)
            .and_then(check_passed)
            .and_then(check_actions)
    }

    /// The outbound query for a request. The secret key authenticates the
    /// call; the action stays local and is never sent.
    fn query_params<'a>(&'a self, request: &'a VerifyRequest) -> [(&'static str, &'a str); 3] {
        [
            ("secret", self.config.keys.secret.as_str()),
            ("response", request.response.as_str()),
            ("remoteip", request.remote_ip.as_deref().unwrap_or_default()),
        ]
    }

    /// Posts the request and decodes the payload into an exchange.
    async fn post(&self, request: VerifyRequest) -> Result<VerifyExchange, VerifyError> {
        let response = self
            .http_client
            .post(&self.config.url)
            .query(&self.query_params(&request))
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(VerifyError::MissingResponseBody);
        }

        let response: VerifyResponse = serde_json::from_slice(&body)?;

        Ok(VerifyExchange { request, response })
    }
}

/// Diagnostic record of the exchange; never alters control flow.
fn log(exchange: &VerifyExchange) {
    tracing::debug!(
        request = ?exchange.request,
        response = ?exchange.response,
        "site verify exchange"
    );
}

/// Fails with the endpoint's explicit error codes, if it reported any.
fn check_errors(exchange: VerifyExchange) -> Result<VerifyExchange, VerifyError> {
    match exchange.response.error_codes.as_deref() {
        Some(codes) if !codes.is_empty() => Err(VerifyError::ResponseErrors(codes.to_vec())),
        _ => Ok(exchange),
    }
}

/// Fails unless the endpoint reported `success: true`.
fn check_passed(exchange: VerifyExchange) -> Result<VerifyExchange, VerifyError> {
    if exchange.response.success == Some(true) {
        Ok(exchange)
    } else {
        Err(VerifyError::NotSuccessful)
    }
}

/// Fails unless the verified action exactly equals the requested action.
fn check_actions(exchange: VerifyExchange) -> Result<VerifyExchange, VerifyError> {
    if exchange.response.action.as_deref() == Some(exchange.request.action.as_str()) {
        Ok(exchange)
    } else {
        Err(VerifyError::ActionMismatch {
            requested: exchange.request.action.clone(),
            verified: exchange.response.action.clone(),
        })
    }
}
