use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use crate::{Script, ScriptError};

/// Presentation of a locking script returned to callers.
///
/// The index always hands scripts out as base64; the other variants are
/// derived from that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptEncoding {
    Hex,
    #[default]
    Base64,
    Asm,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("Unknown script encoding `{0}`, expected one of `hex`, `base64`, `asm`")]
    Unknown(String),
    #[error("Script is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Could not parse script: {0}")]
    Script(#[from] ScriptError),
}

impl ScriptEncoding {
    /// Re-encode a base64 script from the index. Base64 is passed through
    /// untouched, without validation.
    pub fn encode(self, base64_script: &str) -> Result<String, EncodingError> {
        match self {
            ScriptEncoding::Base64 => Ok(base64_script.to_string()),
            ScriptEncoding::Hex => Ok(hex::encode(STANDARD.decode(base64_script)?)),
            ScriptEncoding::Asm => {
                let bytes = STANDARD.decode(base64_script)?;
                Ok(Script::from_bytes(&bytes)?.to_asm())
            }
        }
    }
}

impl fmt::Display for ScriptEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScriptEncoding::Hex => "hex",
            ScriptEncoding::Base64 => "base64",
            ScriptEncoding::Asm => "asm",
        })
    }
}

impl FromStr for ScriptEncoding {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(ScriptEncoding::Hex),
            "base64" => Ok(ScriptEncoding::Base64),
            "asm" => Ok(ScriptEncoding::Asm),
            _ => Err(EncodingError::Unknown(s.to_string())),
        }
    }
}
