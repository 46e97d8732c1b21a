//! Swap submission against a recording provider.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use solana_sdk::{
    pubkey::Pubkey,
    signature::Signature,
    system_program,
    transaction::Transaction,
};
use sollet_swap_client::openbook::{ix_discriminator, OPENBOOK_V2_PROGRAM_ID};
use sollet_swap_client::{OpenbookSwapper, ProgramHandle, Provider, SwapIntent};
use std::sync::{Arc, Mutex};

struct RecordingProvider {
    wallet: Pubkey,
    signature: Signature,
    fail: bool,
    submitted: Mutex<Vec<Transaction>>,
}

impl RecordingProvider {
    fn new(wallet: Pubkey) -> Arc<Self> {
        Arc::new(Self {
            wallet,
            signature: Signature::from([9u8; 64]),
            fail: false,
            submitted: Mutex::new(Vec::new()),
        })
    }

    fn failing(wallet: Pubkey) -> Arc<Self> {
        Arc::new(Self {
            wallet,
            signature: Signature::default(),
            fail: true,
            submitted: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl Provider for RecordingProvider {
    fn wallet(&self) -> Pubkey {
        self.wallet
    }

    async fn send_and_confirm(&self, transaction: Transaction) -> Result<Signature> {
        self.submitted.lock().unwrap().push(transaction);
        if self.fail {
            return Err(anyhow!("Failed to send transaction: blockhash not found"));
        }
        Ok(self.signature)
    }
}

#[tokio::test]
async fn swap_submits_one_swap_instruction() {
    let user = Pubkey::new_unique();
    let market = Pubkey::new_unique();
    let source = Pubkey::new_unique();
    let destination = Pubkey::new_unique();

    let provider = RecordingProvider::new(user);
    let swapper = OpenbookSwapper::new(ProgramHandle::openbook_v2(), provider.clone());

    let signature = swapper
        .swap_on_openbook_v2(
            &user.to_string(),
            &market.to_string(),
            &source.to_string(),
            &destination.to_string(),
            1000,
        )
        .await
        .unwrap();

    assert_eq!(signature, provider.signature.to_string());

    let submitted = provider.submitted.lock().unwrap();
    assert_eq!(submitted.len(), 1);

    let message = &submitted[0].message;
    assert_eq!(message.instructions.len(), 1);
    assert_eq!(message.account_keys[0], user, "wallet pays the fee");

    let ix = &message.instructions[0];
    assert_eq!(
        message.account_keys[ix.program_id_index as usize],
        OPENBOOK_V2_PROGRAM_ID
    );
    assert_eq!(&ix.data[..8], &ix_discriminator("swap"));
    assert_eq!(u64::from_le_bytes(ix.data[8..16].try_into().unwrap()), 1000);

    let accounts: Vec<Pubkey> = ix
        .accounts
        .iter()
        .map(|index| message.account_keys[*index as usize])
        .collect();
    assert_eq!(
        accounts,
        vec![
            market,
            source,
            destination,
            user,
            system_program::ID,
            spl_token::ID
        ]
    );
}

#[tokio::test]
async fn execute_swap_uses_intent_amount() {
    let intent = SwapIntent {
        user_wallet: Pubkey::new_unique(),
        market: Pubkey::new_unique(),
        source_token_account: Pubkey::new_unique(),
        destination_token_account: Pubkey::new_unique(),
        amount: u64::MAX,
    };
    let provider = RecordingProvider::new(intent.user_wallet);
    let swapper = OpenbookSwapper::new(ProgramHandle::openbook_v2(), provider.clone());

    swapper.execute_swap(&intent).await.unwrap();

    let submitted = provider.submitted.lock().unwrap();
    let data = &submitted[0].message.instructions[0].data;
    assert_eq!(&data[8..], &u64::MAX.to_le_bytes());
}

#[tokio::test]
async fn invalid_address_fails_before_submission() {
    let provider = RecordingProvider::new(Pubkey::new_unique());
    let swapper = OpenbookSwapper::new(ProgramHandle::openbook_v2(), provider.clone());
    let good = Pubkey::new_unique().to_string();

    let err = swapper
        .swap_on_openbook_v2("wallet", &good, &good, &good, 1)
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("Invalid Solana address"));
    assert!(provider.submitted.lock().unwrap().is_empty());
}

#[tokio::test]
async fn submission_failure_propagates() {
    let user = Pubkey::new_unique();
    let provider = RecordingProvider::failing(user);
    let swapper = OpenbookSwapper::new(ProgramHandle::openbook_v2(), provider.clone());
    let key = || Pubkey::new_unique().to_string();

    let err = swapper
        .swap_on_openbook_v2(&user.to_string(), &key(), &key(), &key(), 10)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed to send transaction: blockhash not found"
    );
    assert_eq!(provider.submitted.lock().unwrap().len(), 1);
}
