use ordkit_primitives::{IndexedTxo, Outpoint};
use tracing::debug;
use url::Url;

use super::GorillaPoolClient;
use crate::http::{endpoint, is_success, read_json};
use crate::{ClientError, ResolveOutpoints};

impl ResolveOutpoints for GorillaPoolClient {
    type Error = ClientError;

    async fn resolve_outpoints(
        &self,
        outpoints: &[Outpoint],
    ) -> Result<Vec<Option<IndexedTxo>>, Self::Error> {
        let url = self.outpoints_url()?;
        debug!(count = outpoints.len(), "Resolving outpoints");

        let response = self.client.post(url).json(outpoints).send().await?;
        let resolved: Option<Vec<Option<IndexedTxo>>> = read_json(response, is_success).await?;

        Ok(resolved.unwrap_or_default())
    }
}

impl GorillaPoolClient {
    pub(crate) fn outpoints_url(&self) -> Result<Url, ClientError> {
        let mut url = endpoint(&self.base_url, &["txos", "outpoints"])?;
        url.query_pairs_mut().append_pair("script", "true");
        Ok(url)
    }
}
