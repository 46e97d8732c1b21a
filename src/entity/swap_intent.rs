use anyhow::Result;
use solana_sdk::pubkey::Pubkey;

use crate::solana::wallet::parse_pubkey;

/// Everything the caller supplies for one swap. `amount` is in the source
/// token's smallest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapIntent {
    pub user_wallet: Pubkey,
    pub market: Pubkey,
    pub source_token_account: Pubkey,
    pub destination_token_account: Pubkey,
    pub amount: u64,
}

impl SwapIntent {
    /// Resolves base58 addresses into a swap intent.
    pub fn parse(
        user_wallet: &str,
        market: &str,
        source_token_account: &str,
        destination_token_account: &str,
        amount: u64,
    ) -> Result<Self> {
        Ok(Self {
            user_wallet: parse_pubkey(user_wallet)?,
            market: parse_pubkey(market)?,
            source_token_account: parse_pubkey(source_token_account)?,
            destination_token_account: parse_pubkey(destination_token_account)?,
            amount,
        })
    }
}
