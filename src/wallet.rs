//! Private keys, public keys and P2PKH addresses.
//!
//! Public keys are always handled in compressed form, whatever form they were
//! given in.

use std::str::FromStr;

use bitcoin::secp256k1::{self, Secp256k1, SecretKey, rand};
use bitcoin::{Address, NetworkKind, PrivateKey, PublicKey};

#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("Invalid WIF private key: {0}")]
    Wif(#[from] bitcoin::key::FromWifError),
    #[error("Invalid public key: {0}")]
    PublicKey(#[from] secp256k1::Error),
}

/// A fresh random mainnet key, in compressed WIF.
pub fn generate_private_key() -> String {
    let secret = SecretKey::new(&mut rand::thread_rng());
    PrivateKey::new(secret, NetworkKind::Main).to_wif()
}

pub fn private_key_to_public_key(wif: &str) -> Result<String, KeyError> {
    Ok(public_key_of(wif)?.to_string())
}

pub fn private_key_to_address(wif: &str, network: NetworkKind) -> Result<String, KeyError> {
    Ok(p2pkh(public_key_of(wif)?, network))
}

/// Accepts compressed or uncompressed hex.
pub fn public_key_to_address(public_key: &str, network: NetworkKind) -> Result<String, KeyError> {
    Ok(p2pkh(secp256k1::PublicKey::from_str(public_key)?, network))
}

fn public_key_of(wif: &str) -> Result<secp256k1::PublicKey, KeyError> {
    let private_key = PrivateKey::from_wif(wif)?;
    let secp = Secp256k1::signing_only();
    Ok(secp256k1::PublicKey::from_secret_key(&secp, &private_key.inner))
}

fn p2pkh(public_key: secp256k1::PublicKey, network: NetworkKind) -> String {
    let public_key = PublicKey::new(public_key);
    Address::p2pkh(public_key.pubkey_hash(), network).to_string()
}
