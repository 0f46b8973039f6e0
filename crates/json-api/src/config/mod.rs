//! Server configuration module

use clap::Parser;

use crate::config::{
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
    stripe::StripeConfig,
};

pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod stripe;

/// Storefront payment session server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront payment session server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request logging settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Payment processor settings.
    #[command(flatten)]
    pub stripe: StripeConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed, including when the
    /// payment processor secret key is missing.
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn missing_secret_key_is_a_configuration_error() {
        let result = ServerConfig::try_parse_from(["storefront-json"]);

        // STRIPE_SECRET_KEY may leak in from the environment running the tests.
        if std::env::var_os("STRIPE_SECRET_KEY").is_none() {
            assert!(result.is_err(), "secret key should be required");
        }
    }

    #[test]
    fn empty_secret_key_is_a_configuration_error() {
        let result = ServerConfig::try_parse_from(["storefront-json", "--stripe-secret-key", ""]);

        assert!(result.is_err(), "an empty secret key should be rejected");
    }

    #[test]
    fn defaults_apply_when_only_secret_is_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "storefront-json",
            "--stripe-secret-key",
            "sk_test_123",
            "--host",
            "127.0.0.1",
            "--port",
            "8000",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:8000");
        assert_eq!(config.stripe.secret_key, "sk_test_123");

        Ok(())
    }
}
