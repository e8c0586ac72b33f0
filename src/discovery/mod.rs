//! Discovery of transferable ordinal UTxOs for an address.
//!
//! Two round trips against the index: list the unspent outputs of the
//! address, keep the single satoshi outputs that are not listed for sale, then
//! resolve those to their current origin and locking script. The two calls
//! are not atomic, so an output spent in between simply drops out of the
//! result.


use std::error::Error as StdError;

use ordkit_index::{QueryUnspent, ResolveOutpoints};
use ordkit_primitives::{EncodingError, IndexedTxo, NftUtxo, Outpoint, ScriptEncoding};
use tracing::{debug, warn};

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Address must not be empty")]
    EmptyAddress,

    #[error("Error fetching NFT utxos for {address}")]
    CandidateFetch {
        address: String,
        #[source]
        source: BoxError,
    },

    #[error("Error fetching NFT scripts for {address}")]
    ScriptResolution {
        address: String,
        #[source]
        source: BoxError,
    },

    #[error("Index returned {outpoint} without its {field}")]
    IncompleteOutput {
        outpoint: Outpoint,
        field: &'static str,
    },

    #[error("Could not encode script of {outpoint} as {encoding}")]
    ScriptEncoding {
        outpoint: Outpoint,
        encoding: ScriptEncoding,
        #[source]
        source: EncodingError,
    },
}

pub struct UtxoDiscovery<I> {
    index: I,
}

impl<I> UtxoDiscovery<I>
where
    I: QueryUnspent + ResolveOutpoints,
    <I as QueryUnspent>::Error: StdError + Send + Sync + 'static,
    <I as ResolveOutpoints>::Error: StdError + Send + Sync + 'static,
{
    pub fn new(index: I) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Every unspent, unlisted, single satoshi output held by `address`,
    /// optionally narrowed to one collection.
    ///
    /// `collection_id` is copied onto every result as given; it is not checked
    /// against what the index reports. An empty id means no collection.
    pub async fn nft_utxos(
        &self,
        address: &str,
        collection_id: Option<&str>,
        encoding: ScriptEncoding,
    ) -> Result<Vec<NftUtxo>, DiscoveryError> {
        if address.is_empty() {
            return Err(DiscoveryError::EmptyAddress);
        }
        let collection_id = collection_id.filter(|id| !id.is_empty());

        let candidates = self
            .index
            .unspent_by_address(address, collection_id)
            .await
            .map_err(|e| DiscoveryError::CandidateFetch {
                address: address.to_string(),
                source: Box::new(e),
            })?;

        let outpoints = transferable_outpoints(&candidates);
        debug!(
            %address,
            candidates = candidates.len(),
            transferable = outpoints.len(),
            "Filtered candidate outputs"
        );

        let resolved = self
            .index
            .resolve_outpoints(&outpoints)
            .await
            .map_err(|e| DiscoveryError::ScriptResolution {
                address: address.to_string(),
                source: Box::new(e),
            })?;

        let mut utxos = Vec::with_capacity(resolved.len());
        for txo in resolved {
            let Some(txo) = txo else {
                warn!(%address, "Index could not resolve an outpoint, it may have been spent");
                continue;
            };
            utxos.push(to_nft_utxo(txo, collection_id, encoding)?);
        }

        Ok(utxos)
    }
}

/// Outpoints of the candidates that carry a movable ordinal, in index order.
pub fn transferable_outpoints(candidates: &[IndexedTxo]) -> Vec<Outpoint> {
    candidates
        .iter()
        .filter(|txo| txo.is_transferable())
        .map(IndexedTxo::outpoint)
        .collect()
}

fn to_nft_utxo(
    txo: IndexedTxo,
    collection_id: Option<&str>,
    encoding: ScriptEncoding,
) -> Result<NftUtxo, DiscoveryError> {
    let outpoint = txo.outpoint();

    let Some(origin) = txo.origin else {
        return Err(DiscoveryError::IncompleteOutput {
            outpoint,
            field: "origin",
        });
    };
    let Some(script) = txo.script else {
        return Err(DiscoveryError::IncompleteOutput {
            outpoint,
            field: "script",
        });
    };

    let script = encoding
        .encode(&script)
        .map_err(|source| DiscoveryError::ScriptEncoding {
            outpoint,
            encoding,
            source,
        })?;

    Ok(NftUtxo {
        origin: origin.outpoint,
        script,
        vout: txo.vout,
        txid: txo.txid,
        satoshis: 1,
        collection_id: collection_id.map(str::to_string),
    })
}
