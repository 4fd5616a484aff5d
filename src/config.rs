//! Configuration for the reCAPTCHA verification endpoint.

use std::env;
use std::time::Duration;

/// The URL used to [verify the user's response](https://developers.google.com/recaptcha/docs/verify).
pub const DEFAULT_SITE_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Default timeout for site verify requests
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// The reCAPTCHA key pair issued for a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keys {
    /// The key in the HTML code your site serves to users. Carried for
    /// page-rendering callers; never sent to the verification endpoint.
    pub site: String,

    /// The secret key for communication between your site and reCAPTCHA.
    pub secret: String,
}

/// Configuration consumed by [`RecaptchaVerifier`](crate::RecaptchaVerifier).
///
/// Immutable once the verifier is constructed; build it explicitly or from
/// the environment via [`RecaptchaConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecaptchaConfig {
    /// The site verify endpoint URL.
    pub url: String,

    /// The site/secret key pair.
    pub keys: Keys,

    /// Timeout applied to each outbound verification request.
    pub timeout: Duration,
}

impl RecaptchaConfig {
    /// Creates a configuration for the given key pair, using the public
    /// Google endpoint and the default request timeout.
    #[must_use]
    pub fn new(site_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            url: DEFAULT_SITE_VERIFY_URL.to_string(),
            keys: Keys {
                site: site_key.into(),
                secret: secret_key.into(),
            },
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Overrides the site verify endpoint URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Overrides the outbound request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Creates a configuration from environment variables.
    ///
    /// Reads `RECAPTCHA_SITE_KEY` and `RECAPTCHA_SECRET_KEY`, plus the
    /// optional overrides `RECAPTCHA_URL` and `RECAPTCHA_TIMEOUT_SECS`.
    ///
    /// # Panics
    ///
    /// Panics if `RECAPTCHA_SITE_KEY` or `RECAPTCHA_SECRET_KEY` is not set.
    #[must_use]
    pub fn from_env() -> Self {
        let site_key = env::var("RECAPTCHA_SITE_KEY").expect("RECAPTCHA_SITE_KEY must be set");
        let secret_key =
            env::var("RECAPTCHA_SECRET_KEY").expect("RECAPTCHA_SECRET_KEY must be set");

        let mut config = Self::new(site_key, secret_key);

        if let Ok(url) = env::var("RECAPTCHA_URL") {
            config = config.with_url(url);
        }

        if let Some(secs) = env::var("RECAPTCHA_TIMEOUT_SECS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
        {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn defaults_to_public_endpoint() {
        let config = RecaptchaConfig::new("exampleSite", "exampleSecret");

        assert_eq!(config.url, DEFAULT_SITE_VERIFY_URL);
        assert_eq!(config.keys.site, "exampleSite");
        assert_eq!(config.keys.secret, "exampleSecret");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn overrides_apply() {
        let config = RecaptchaConfig::new("exampleSite", "exampleSecret")
            .with_url("http://localhost:8080/siteverify")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.url, "http://localhost:8080/siteverify");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    #[serial]
    fn from_env_reads_keys_and_overrides() {
        env::set_var("RECAPTCHA_SITE_KEY", "envSite");
        env::set_var("RECAPTCHA_SECRET_KEY", "envSecret");
        env::set_var("RECAPTCHA_URL", "http://localhost:9090/siteverify");
        env::set_var("RECAPTCHA_TIMEOUT_SECS", "10");

        let config = RecaptchaConfig::from_env();

        assert_eq!(config.keys.site, "envSite");
        assert_eq!(config.keys.secret, "envSecret");
        assert_eq!(config.url, "http://localhost:9090/siteverify");
        assert_eq!(config.timeout, Duration::from_secs(10));

        env::remove_var("RECAPTCHA_URL");
        env::remove_var("RECAPTCHA_TIMEOUT_SECS");
    }

    #[test]
    #[serial]
    fn from_env_falls_back_to_defaults() {
        env::set_var("RECAPTCHA_SITE_KEY", "envSite");
        env::set_var("RECAPTCHA_SECRET_KEY", "envSecret");
        env::remove_var("RECAPTCHA_URL");
        env::remove_var("RECAPTCHA_TIMEOUT_SECS");

        let config = RecaptchaConfig::from_env();

        assert_eq!(config.url, DEFAULT_SITE_VERIFY_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
