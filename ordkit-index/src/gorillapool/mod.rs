//! Client for the GorillaPool 1Sat ordinals index.

mod inscription;
mod outpoints;
mod unspent;

pub use unspent::collection_query;

use url::Url;

#[derive(Debug, Clone)]
pub struct GorillaPoolClient {
    base_url: Url,
    client: reqwest::Client,
}

impl GorillaPoolClient {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Share an already configured HTTP client (timeouts, proxies, ...)
    pub fn with_client(base_url: Url, client: reqwest::Client) -> Self {
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
