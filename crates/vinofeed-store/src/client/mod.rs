//! HTTP client for the WooCommerce REST `products` endpoint.

use std::time::Duration;

use reqwest::Client;
use vinofeed_core::{AppConfig, PageCountHeader};

use crate::error::StoreError;
use crate::pagination::total_pages;
use crate::source::ProductSource;
use crate::types::{Product, ProductPage};

/// Connection settings for [`WooClient`].
#[derive(Clone)]
pub struct StoreClientConfig {
    pub store_url: String,
    pub api_version: String,
    pub consumer_key: String,
    pub consumer_secret: String,
    pub page_count_header: PageCountHeader,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl StoreClientConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            store_url: config.store_url.clone(),
            api_version: config.store_api_version.clone(),
            consumer_key: config.store_key.clone(),
            consumer_secret: config.store_secret.clone(),
            page_count_header: config.page_count_header,
            timeout_secs: config.request_timeout_secs,
            user_agent: config.user_agent.clone(),
        }
    }
}

/// HTTP client for a WooCommerce store's product listing.
///
/// Authenticates with the consumer key and secret as HTTP basic auth.
/// Non-2xx responses become typed errors and nothing is retried; a failed
/// page is fatal to the run that requested it.
///
/// Build one per process and share it: the underlying `reqwest::Client`
/// pools connections across requests and runs.
pub struct WooClient {
    client: Client,
    store_url: String,
    api_version: String,
    consumer_key: String,
    consumer_secret: String,
    page_count_header: PageCountHeader,
}

impl WooClient {
    /// Creates a `WooClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(config: &StoreClientConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            store_url: config.store_url.trim_end_matches('/').to_owned(),
            api_version: config.api_version.trim_matches('/').to_owned(),
            consumer_key: config.consumer_key.clone(),
            consumer_secret: config.consumer_secret.clone(),
            page_count_header: config.page_count_header,
        })
    }

    /// Fetches one page of products.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Unauthorized`] on HTTP 401 or 403.
    /// - [`StoreError::NotFound`] on HTTP 404.
    /// - [`StoreError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`StoreError::Http`] on network or TLS failure.
    /// - [`StoreError::Deserialize`] when the body is not a product array.
    pub async fn fetch_products_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<ProductPage, StoreError> {
        let url = self.products_url(page, per_page)?;

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.consumer_key, Some(&self.consumer_secret))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(StoreError::Unauthorized {
                status: status.as_u16(),
                url,
            });
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound { url });
        }

        if !status.is_success() {
            return Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        // Read the page count before consuming the response body.
        let total_pages = total_pages(response.headers(), self.page_count_header);

        let body = response.text().await?;
        let products = serde_json::from_str::<Vec<Product>>(&body).map_err(|e| {
            StoreError::Deserialize {
                context: format!("products page {page} from {}", self.store_url),
                source: e,
            }
        })?;

        Ok(ProductPage {
            products,
            total_pages,
        })
    }

    /// Builds `{store}/wp-json/{version}/products?per_page=N&page=P`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidStoreUrl`] if the store URL cannot be
    /// parsed as a URL base.
    fn products_url(&self, page: u32, per_page: u32) -> Result<String, StoreError> {
        let base = format!("{}/wp-json/{}/products", self.store_url, self.api_version);
        let mut url = reqwest::Url::parse(&base).map_err(|e| StoreError::InvalidStoreUrl {
            store_url: self.store_url.clone(),
            reason: e.to_string(),
        })?;

        url.query_pairs_mut()
            .append_pair("per_page", &per_page.to_string())
            .append_pair("page", &page.to_string());

        Ok(url.to_string())
    }
}

impl ProductSource for WooClient {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<ProductPage, StoreError> {
        self.fetch_products_page(page, per_page).await
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
