//! WhatsOnChain 1Sat ordinals token lookups.

use async_trait::async_trait;
use ordkit_primitives::Outpoint;
use serde::Deserialize;
use tracing::trace;
use url::Url;

use crate::http::{endpoint, is_ok, read_json};
use crate::{ClientError, OwnershipSource};

#[derive(Debug, Clone)]
pub struct WhatsOnChainClient {
    base_url: Url,
    client: reqwest::Client,
}

impl WhatsOnChainClient {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: Url, client: reqwest::Client) -> Self {
        Self { base_url, client }
    }

    fn token_url(&self, origin: &Outpoint) -> Result<Url, ClientError> {
        let origin = origin.to_string();
        endpoint(
            &self.base_url,
            &["token", "1satordinals", origin.as_str(), "latest"],
        )
    }
}

#[derive(Debug, Deserialize)]
struct TokenLatest {
    token: Token,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Token {
    #[serde(default)]
    owner_address: Option<String>,
}

#[async_trait]
impl OwnershipSource for WhatsOnChainClient {
    fn name(&self) -> &'static str {
        "whatsonchain"
    }

    async fn current_owner(&self, origin: &Outpoint) -> Result<Option<String>, ClientError> {
        let url = self.token_url(origin)?;
        trace!(%url, "Fetching latest token");

        let response = self.client.get(url).send().await?;
        let latest: TokenLatest = read_json(response, is_ok).await?;
        Ok(latest.token.owner_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{http_client, serve_once};

    #[test]
    fn token_url() {
        let client =
            WhatsOnChainClient::new(Url::parse("https://api.whatsonchain.com/v1/bsv/main").unwrap());
        assert_eq!(
            client.token_url(&Outpoint::new("aa", 1)).unwrap().as_str(),
            "https://api.whatsonchain.com/v1/bsv/main/token/1satordinals/aa_1/latest"
        );
    }

    #[test]
    fn token_owner() {
        let latest: TokenLatest =
            serde_json::from_str(r#"{"token":{"ownerAddress":"1abc","outpoint":"aa_1"}}"#)
                .unwrap();
        assert_eq!(latest.token.owner_address.as_deref(), Some("1abc"));

        // A missing token object is malformed, not "no owner"
        assert!(serde_json::from_str::<TokenLatest>(r#"{"error":"not found"}"#).is_err());
    }

    #[tokio::test]
    async fn owner_address_over_http() {
        let (base, request) = serve_once(200, r#"{"token":{"ownerAddress":"1abc"}}"#).await;
        let client = WhatsOnChainClient::with_client(base, http_client());

        let owner = client.current_owner(&Outpoint::new("aa", 1)).await.unwrap();
        assert_eq!(owner.as_deref(), Some("1abc"));
        assert!(
            request
                .await
                .unwrap()
                .starts_with("GET /api/token/1satordinals/aa_1/latest HTTP/1.1")
        );
    }

    #[tokio::test]
    async fn missing_token_is_a_status_error() {
        let (base, _request) = serve_once(404, r#"{"error":"not found"}"#).await;
        let client = WhatsOnChainClient::with_client(base, http_client());

        let err = client.current_owner(&Outpoint::new("aa", 1)).await.unwrap_err();
        assert!(matches!(err, ClientError::Status { .. }), "{err:?}");
    }
}
