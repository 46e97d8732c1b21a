use anyhow::Result;
use log::{debug, info};
use solana_sdk::transaction::Transaction;
use std::sync::Arc;

use crate::entity::SwapIntent;
use crate::openbook::program::ProgramHandle;
use crate::openbook::provider::Provider;

/// Submits single-instruction swap transactions to OpenBook V2.
///
/// There is no retry and no idempotency key: calling again after a failure
/// may land the swap twice.
pub struct OpenbookSwapper {
    program: ProgramHandle,
    provider: Arc<dyn Provider>,
}

impl OpenbookSwapper {
    pub fn new(program: ProgramHandle, provider: Arc<dyn Provider>) -> Self {
        Self { program, provider }
    }

    pub fn program(&self) -> &ProgramHandle {
        &self.program
    }

    /// Unsigned transaction carrying the swap instruction, paid by the
    /// provider's wallet.
    pub fn build_transaction(&self, intent: &SwapIntent) -> Transaction {
        let instruction = self.program.swap_instruction(intent);
        Transaction::new_with_payer(&[instruction], Some(&self.provider.wallet()))
    }

    /// Swaps `intent.amount` and returns the confirmed transaction signature.
    pub async fn execute_swap(&self, intent: &SwapIntent) -> Result<String> {
        debug!(
            "Building swap of {} on market {} for {}",
            intent.amount, intent.market, intent.user_wallet
        );

        let transaction = self.build_transaction(intent);
        let signature = self.provider.send_and_confirm(transaction).await?;

        info!("Transaction signature {}", signature);

        Ok(signature.to_string())
    }

    pub async fn swap_on_openbook_v2(
        &self,
        user_wallet: &str,
        market: &str,
        source_token_account: &str,
        destination_token_account: &str,
        amount: u64,
    ) -> Result<String> {
        let intent = SwapIntent::parse(
            user_wallet,
            market,
            source_token_account,
            destination_token_account,
            amount,
        )?;

        self.execute_swap(&intent).await
    }
}
