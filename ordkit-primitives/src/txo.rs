use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Outpoint;

/// An output as reported by the ordinals index.
///
/// Both the unspent listing and the outpoint resolution endpoints return this
/// shape; `script` is only populated when it was asked for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndexedTxo {
    pub txid: String,
    pub vout: u32,
    #[serde(default)]
    pub satoshis: u64,
    #[serde(default)]
    pub data: Option<TxoData>,
    #[serde(default)]
    pub origin: Option<Origin>,
    /// Base64 encoded locking script
    #[serde(default)]
    pub script: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TxoData {
    /// Marketplace offer attached to the output. Its shape varies between
    /// markets; only whether one is set matters.
    #[serde(default)]
    pub list: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Origin {
    pub outpoint: Outpoint,
}

impl IndexedTxo {
    pub fn outpoint(&self) -> Outpoint {
        Outpoint::new(self.txid.clone(), self.vout)
    }

    pub fn is_listed(&self) -> bool {
        self.data
            .as_ref()
            .and_then(|data| data.list.as_ref())
            .is_some_and(is_set)
    }

    /// Single satoshi outputs that are not up for sale carry an ordinal the
    /// owner can move.
    pub fn is_transferable(&self) -> bool {
        self.satoshis == 1 && !self.is_listed()
    }
}

fn is_set(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Bool(true) | Value::Array(_) | Value::Object(_) => true,
    }
}

/// An ordinal-bearing output ready to be spent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftUtxo {
    pub origin: Outpoint,
    pub script: String,
    pub vout: u32,
    pub txid: String,
    pub satoshis: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
}
