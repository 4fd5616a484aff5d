//! Server-side verification client for Google reCAPTCHA v3.
//!
//! A site submits the response token produced by the client-side reCAPTCHA
//! widget, together with the action name the challenge was attached to, and
//! this crate performs the `siteverify` round-trip: it builds the outbound
//! request, posts it to the verification endpoint, decodes the JSON payload
//! and runs a fixed sequence of checks against it, short-circuiting on the
//! first failure.
//!
//! # Components
//! - `config`: endpoint URL, site/secret keys and request timeout
//! - `types`: the request, response and exchange values of one round-trip
//! - `verifier`: core verification pipeline that talks to the endpoint
//! - `error`: the closed set of verification failure classifications
//! - `remote_ip`: client IP extraction helper for proxied callers

#![deny(clippy::all, clippy::pedantic, clippy::nursery, missing_docs)]

/// Verification endpoint configuration
pub mod config;

/// Verification failure classifications
pub mod error;

/// Client IP extraction for proxied requests
pub mod remote_ip;

/// Request, response and exchange values
pub mod types;

/// Core verification pipeline
pub mod verifier;

pub use config::RecaptchaConfig;
pub use error::VerifyError;
pub use types::{VerifyExchange, VerifyRequest, VerifyResponse};
pub use verifier::RecaptchaVerifier;
