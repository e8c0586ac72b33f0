use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutpointError {
    #[error("Outpoint `{0}` has no `_` separator")]
    MissingSeparator(String),
    #[error("Outpoint `{0}` has an empty txid")]
    EmptyTxid(String),
    #[error("Outpoint `{0}` has an invalid output index")]
    InvalidVout(String),
}

/// Reference to a single transaction output, written as `txid_vout`.
///
/// This is the form the ordinals index uses both for outpoint batches and for
/// inscription origins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Outpoint {
    pub txid: String,
    pub vout: u32,
}

impl Outpoint {
    pub fn new(txid: impl Into<String>, vout: u32) -> Self {
        Self {
            txid: txid.into(),
            vout,
        }
    }
}

impl fmt::Display for Outpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.txid, self.vout)
    }
}

impl FromStr for Outpoint {
    type Err = OutpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The txid is opaque to us, so only the last separator is significant.
        let (txid, vout) = s
            .rsplit_once('_')
            .ok_or_else(|| OutpointError::MissingSeparator(s.to_string()))?;
        if txid.is_empty() {
            return Err(OutpointError::EmptyTxid(s.to_string()));
        }
        let vout = vout
            .parse()
            .map_err(|_| OutpointError::InvalidVout(s.to_string()))?;
        Ok(Self::new(txid, vout))
    }
}

impl Serialize for Outpoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Outpoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
