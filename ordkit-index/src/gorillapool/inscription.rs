use async_trait::async_trait;
use ordkit_primitives::Outpoint;
use serde::Deserialize;
use tracing::trace;

use super::GorillaPoolClient;
use crate::http::{endpoint, is_ok, read_json};
use crate::{ClientError, OwnershipSource};

/// Latest state of an inscription; only the owner is of interest here
#[derive(Debug, Deserialize)]
struct InscriptionLatest {
    #[serde(default)]
    owner: Option<String>,
}

#[async_trait]
impl OwnershipSource for GorillaPoolClient {
    fn name(&self) -> &'static str {
        "gorillapool"
    }

    async fn current_owner(&self, origin: &Outpoint) -> Result<Option<String>, ClientError> {
        let origin = origin.to_string();
        let url = endpoint(&self.base_url, &["inscriptions", origin.as_str(), "latest"])?;
        trace!(%url, "Fetching latest inscription");

        let response = self.client.get(url).send().await?;
        let latest: InscriptionLatest = read_json(response, is_ok).await?;
        Ok(latest.owner)
    }
}
