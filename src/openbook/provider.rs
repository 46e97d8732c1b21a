use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::debug;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use std::sync::Arc;

/// Network connection plus the wallet that pays for and signs transactions.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Fee payer and signer of submitted transactions
    fn wallet(&self) -> Pubkey;

    /// Signs `transaction` with the wallet, sends it and waits for confirmation.
    async fn send_and_confirm(&self, transaction: Transaction) -> Result<Signature>;
}

/// Provider backed by a Solana RPC node and a local keypair
pub struct RpcProvider {
    client: Arc<RpcClient>,
    payer: Keypair,
}

impl RpcProvider {
    pub fn new(client: Arc<RpcClient>, payer: Keypair) -> Self {
        Self { client, payer }
    }

    /// Connects to `rpc_url`, waiting for confirmed commitment on submissions.
    pub fn connect(rpc_url: &str, payer: Keypair) -> Self {
        let client =
            RpcClient::new_with_commitment(rpc_url.to_string(), CommitmentConfig::confirmed());
        Self::new(Arc::new(client), payer)
    }

    pub fn client(&self) -> Arc<RpcClient> {
        self.client.clone()
    }
}

#[async_trait]
impl Provider for RpcProvider {
    fn wallet(&self) -> Pubkey {
        self.payer.pubkey()
    }

    async fn send_and_confirm(&self, mut transaction: Transaction) -> Result<Signature> {
        // Get recent blockhash
        let recent_blockhash = self
            .client
            .get_latest_blockhash()
            .await
            .map_err(|e| anyhow!("Failed to get recent blockhash: {}", e))?;

        transaction
            .try_sign(&[&self.payer], recent_blockhash)
            .map_err(|e| anyhow!("Failed to sign transaction: {}", e))?;

        debug!("Sending transaction signed by {}", self.payer.pubkey());

        self.client
            .send_and_confirm_transaction(&transaction)
            .await
            .map_err(|e| anyhow!("Failed to send transaction: {}", e))
    }
}
