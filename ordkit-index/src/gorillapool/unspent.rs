use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use ordkit_primitives::IndexedTxo;
use serde_json::json;
use tracing::debug;
use url::Url;

use super::GorillaPoolClient;
use crate::http::{endpoint, is_success, read_json};
use crate::{ClientError, QueryUnspent};

impl QueryUnspent for GorillaPoolClient {
    type Error = ClientError;

    async fn unspent_by_address(
        &self,
        address: &str,
        collection_id: Option<&str>,
    ) -> Result<Vec<IndexedTxo>, Self::Error> {
        let url = self.unspent_url(address, collection_id)?;
        debug!(%address, ?collection_id, "Listing unspent outputs");

        let response = self.client.get(url).send().await?;
        let txos: Vec<IndexedTxo> = read_json(response, is_success).await?;

        debug!(%address, count = txos.len(), "Unspent outputs listed");
        Ok(txos)
    }
}

impl GorillaPoolClient {
    pub(crate) fn unspent_url(
        &self,
        address: &str,
        collection_id: Option<&str>,
    ) -> Result<Url, ClientError> {
        let mut url = endpoint(&self.base_url, &["txos", "address", address, "unspent"])?;
        if let Some(collection_id) = collection_id.filter(|id| !id.is_empty()) {
            url.query_pairs_mut()
                .append_pair("q", &collection_query(collection_id));
        }
        Ok(url)
    }
}

/// Index query selecting outputs tagged with a collection, as base64 JSON.
pub fn collection_query(collection_id: &str) -> String {
    let query = json!({
        "map": {
            "subTypeData": { "collectionId": collection_id },
        },
    });
    STANDARD.encode(query.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{http_client, serve_once};

    const ADDRESS: &str = "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH";

    fn client() -> GorillaPoolClient {
        GorillaPoolClient::new(Url::parse("https://ordinals.gorillapool.io/api").unwrap())
    }

    #[test]
    fn collection_query_is_base64_json() {
        assert_eq!(
            collection_query("abc_0"),
            "eyJtYXAiOnsic3ViVHlwZURhdGEiOnsiY29sbGVjdGlvbklkIjoiYWJjXzAifX19"
        );
    }

    #[test]
    fn unscoped_listing_has_no_query() {
        let url = client().unspent_url(ADDRESS, None).unwrap();
        assert_eq!(
            url.as_str(),
            format!("https://ordinals.gorillapool.io/api/txos/address/{ADDRESS}/unspent")
        );
        assert_eq!(url.query(), None);
    }

    #[test]
    fn empty_collection_id_has_no_query() {
        let url = client().unspent_url(ADDRESS, Some("")).unwrap();
        assert_eq!(url.query(), None);
        assert_eq!(url, client().unspent_url(ADDRESS, None).unwrap());
    }

    #[test]
    fn collection_listing_carries_decodable_predicate() {
        let url = client().unspent_url(ADDRESS, Some("col_1")).unwrap();
        let pairs: Vec<_> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "q");

        let decoded = STANDARD.decode(&pairs[0].1).unwrap();
        let predicate: serde_json::Value = serde_json::from_slice(&decoded).unwrap();
        assert_eq!(
            predicate,
            json!({ "map": { "subTypeData": { "collectionId": "col_1" } } })
        );
    }

    #[tokio::test]
    async fn lists_unspent_over_http() {
        let (base, request) = serve_once(
            200,
            r#"[{"txid":"aa","vout":1,"satoshis":1,"origin":{"outpoint":"bb_0"}}]"#,
        )
        .await;
        let client = GorillaPoolClient::with_client(base, http_client());

        let txos = client.unspent_by_address(ADDRESS, None).await.unwrap();
        assert_eq!(txos.len(), 1);
        assert_eq!(txos[0].outpoint().to_string(), "aa_1");
        assert!(
            request
                .await
                .unwrap()
                .starts_with(&format!("GET /api/txos/address/{ADDRESS}/unspent HTTP/1.1"))
        );
    }

    #[tokio::test]
    async fn server_error_is_a_status_error() {
        let (base, _request) = serve_once(500, r#"{"error":"boom"}"#).await;
        let client = GorillaPoolClient::with_client(base, http_client());

        let err = client.unspent_by_address(ADDRESS, None).await.unwrap_err();
        assert!(
            matches!(err, ClientError::Status { status, .. } if status.as_u16() == 500),
            "{err:?}"
        );
    }
}
