use anyhow::{anyhow, Result};
use solana_sdk::{pubkey::Pubkey, signature::Keypair};
use std::str::FromStr;

/// Restore Keypair from base58 string (64 bytes).
pub fn keypair_from_base58(keypair_base58: &str) -> Result<Keypair> {
    let keypair_bytes = bs58::decode(keypair_base58.trim())
        .into_vec()
        .map_err(|e| anyhow!("Failed to decode base58 keypair: {}", e))?;

    if keypair_bytes.len() != 64 {
        return Err(anyhow!("Invalid keypair length: {}", keypair_bytes.len()));
    }

    let keypair = Keypair::from_bytes(&keypair_bytes)
        .map_err(|e| anyhow!("Failed to create keypair from bytes: {}", e))?;

    Ok(keypair)
}

/// Convert base58 string to Solana `Pubkey`.
pub fn parse_pubkey(address: &str) -> Result<Pubkey> {
    Pubkey::from_str(address).map_err(|e| anyhow!("Invalid Solana address: {}", e))
}
