//! Integration tests for the 6amGrocery storefront.
//!
//! Each test boots the full storefront router (sessions, middleware and
//! templates) on an ephemeral port and drives it over HTTP with a
//! cookie-keeping client, exactly as a browser would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sixam-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use reqwest::Client;
use serde_json::Value;
use sixam_core::Price;
use sixam_storefront::catalog::{Catalog, CatalogError};
use sixam_storefront::config::{ConfigError, StorefrontConfig};
use sixam_storefront::state::AppState;
use thiserror::Error;

/// Errors raised while bringing up a test server.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("client: {0}")]
    Client(#[from] reqwest::Error),
}

/// A running storefront plus a client holding one shopper's session cookie.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Start a storefront serving the built-in mock catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be bound or configured.
    pub async fn start() -> Result<Self, SetupError> {
        let static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../storefront/static");
        let static_dir = static_dir.to_string_lossy().into_owned();
        let config = StorefrontConfig::from_lookup(|key| match key {
            "STOREFRONT_STATIC_DIR" => Some(static_dir.clone()),
            _ => None,
        })?;
        let catalog = Catalog::mock()?;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let app = sixam_storefront::app(AppState::new(config, catalog));

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let client = Client::builder().cookie_store(true).build()?;

        Ok(Self {
            client,
            base_url: format!("http://{addr}"),
        })
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// POST a form and follow the redirect back to the storefront page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<reqwest::Response, reqwest::Error> {
        self.client.post(self.url(path)).form(form).send().await
    }

    /// Fetch the JSON session snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn snapshot(&self) -> Result<Value, reqwest::Error> {
        self.client
            .get(self.url("/api/session"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

/// Read a price field (e.g. `order_total`) out of a snapshot.
#[must_use]
pub fn price_field(snapshot: &Value, field: &str) -> Option<Price> {
    serde_json::from_value(snapshot.get(field)?.clone()).ok()
}

/// Parse a USD amount for comparisons, e.g. `usd("13.46")`.
#[must_use]
pub fn usd(amount: &str) -> Option<Price> {
    Price::parse_usd(amount).ok()
}
