mod error;
mod gorillapool;
mod http;
#[cfg(test)]
mod test_server;
mod whatsonchain;

pub use error::ClientError;
pub use gorillapool::{GorillaPoolClient, collection_query};
pub use whatsonchain::WhatsOnChainClient;

use async_trait::async_trait;
use ordkit_primitives::{IndexedTxo, Outpoint};

pub const GORILLAPOOL_MAINNET_URL: &str = "https://ordinals.gorillapool.io/api";
pub const WHATSONCHAIN_MAINNET_URL: &str = "https://api.whatsonchain.com/v1/bsv/main";

/// Unspent outputs held by an address
pub trait QueryUnspent {
    type Error;
    fn unspent_by_address(
        &self,
        address: &str,
        collection_id: Option<&str>,
    ) -> impl std::future::Future<Output = Result<Vec<IndexedTxo>, Self::Error>>;
}

/// Current state of a batch of outputs, scripts included.
///
/// Entries the index does not know about come back as `None`. An empty or
/// `null` response is an empty batch.
pub trait ResolveOutpoints {
    type Error;
    fn resolve_outpoints(
        &self,
        outpoints: &[Outpoint],
    ) -> impl std::future::Future<Output = Result<Vec<Option<IndexedTxo>>, Self::Error>>;
}

/// Anything that can tell who currently holds an inscription.
#[async_trait]
pub trait OwnershipSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Address currently holding the inscription first created at `origin`,
    /// if the source reports one.
    async fn current_owner(&self, origin: &Outpoint) -> Result<Option<String>, ClientError>;
}
