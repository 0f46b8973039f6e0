use std::path::PathBuf;

use clap::Args;
use jiff::Timestamp;
use storefront_app::{
    auth::{Session, SessionStore},
    context::{Storefront, StorefrontConfig},
    domain::{
        cart::CartStore,
        catalog::{DEFAULT_CATALOG_URL, HttpCatalogService},
        checkout::models::ShippingPolicy,
        payments::{
            DEFAULT_RETURN_URL, DEFAULT_STRIPE_API_BASE, DEFAULT_TEST_PAYMENT_METHOD,
            StripeHeadlessSheet,
        },
    },
    records::RecordStoreConfig,
    storage::FileStorage,
};

#[derive(Debug, Args)]
pub(crate) struct CliConfig {
    /// Directory holding the persisted cart and session
    #[arg(
        long,
        global = true,
        env = "STOREFRONT_DATA_DIR",
        default_value = ".storefront"
    )]
    data_dir: PathBuf,

    /// Public product API
    #[arg(long, global = true, env = "CATALOG_URL", default_value = DEFAULT_CATALOG_URL)]
    catalog_url: String,

    /// Record store project URL
    #[arg(long, global = true, env = "SUPABASE_URL")]
    supabase_url: Option<String>,

    /// Record store anonymous key
    #[arg(long, global = true, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    supabase_anon_key: Option<String>,

    /// Payment session endpoint
    #[arg(
        long,
        global = true,
        env = "CHECKOUT_URL",
        default_value = "http://localhost:8000/checkout"
    )]
    checkout_url: String,

    /// Stripe publishable key used to confirm payments
    #[arg(
        long,
        global = true,
        env = "STRIPE_PUBLISHABLE_KEY",
        hide_env_values = true
    )]
    stripe_publishable_key: Option<String>,

    /// Payment method attached when confirming a payment
    #[arg(
        long,
        global = true,
        env = "STRIPE_TEST_PAYMENT_METHOD",
        default_value = DEFAULT_TEST_PAYMENT_METHOD
    )]
    stripe_test_payment_method: String,

    /// Stripe API base URL
    #[arg(
        long,
        global = true,
        env = "STRIPE_API_BASE",
        default_value = DEFAULT_STRIPE_API_BASE
    )]
    stripe_api_base: String,
}

impl CliConfig {
    pub(crate) fn storage(&self) -> Result<FileStorage, String> {
        FileStorage::open(&self.data_dir).map_err(|error| {
            format!(
                "failed to open data directory {}: {error}",
                self.data_dir.display()
            )
        })
    }

    pub(crate) fn catalog(&self) -> HttpCatalogService {
        HttpCatalogService::new(self.catalog_url.clone())
    }

    pub(crate) fn storefront(&self) -> Result<Storefront, String> {
        let url = self
            .supabase_url
            .clone()
            .ok_or_else(|| "SUPABASE_URL is not set".to_string())?;

        let anon_key = self
            .supabase_anon_key
            .clone()
            .ok_or_else(|| "SUPABASE_ANON_KEY is not set".to_string())?;

        Ok(Storefront::from_config(StorefrontConfig {
            record_store: RecordStoreConfig { url, anon_key },
            checkout_url: self.checkout_url.clone(),
            return_url: DEFAULT_RETURN_URL.to_string(),
            shipping: ShippingPolicy::default(),
        }))
    }

    pub(crate) fn sessions(&self) -> Result<SessionStore<FileStorage>, String> {
        Ok(SessionStore::new(self.storage()?))
    }

    /// The persisted session, refreshed when expired; every order command
    /// needs one.
    pub(crate) async fn session(&self, storefront: &Storefront) -> Result<Session, String> {
        self.sessions()?
            .restore(storefront.auth.as_ref(), Timestamp::now())
            .await
            .map_err(|error| format!("failed to restore session: {error}"))?
            .ok_or_else(|| "not signed in; run `storefront auth sign-in` first".to_string())
    }

    pub(crate) fn cart(&self) -> Result<CartStore<FileStorage>, String> {
        CartStore::load(self.storage()?).map_err(|error| format!("failed to load cart: {error}"))
    }

    pub(crate) fn payment_sheet(&self) -> Result<StripeHeadlessSheet, String> {
        let key = self
            .stripe_publishable_key
            .clone()
            .ok_or_else(|| "STRIPE_PUBLISHABLE_KEY is not set".to_string())?;

        Ok(
            StripeHeadlessSheet::new(key, self.stripe_test_payment_method.clone())
                .with_api_base(self.stripe_api_base.clone()),
        )
    }
}
