//! Stripe Config

use clap::{Args, builder::NonEmptyStringValueParser};

use storefront_app::domain::payments::DEFAULT_STRIPE_API_BASE;

/// Payment processor settings.
#[derive(Debug, Args)]
pub struct StripeConfig {
    /// Stripe secret API key
    #[arg(
        long = "stripe-secret-key",
        env = "STRIPE_SECRET_KEY",
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub secret_key: String,

    /// Stripe API base URL
    #[arg(
        long = "stripe-api-base",
        env = "STRIPE_API_BASE",
        default_value = DEFAULT_STRIPE_API_BASE
    )]
    pub api_base: String,
}
