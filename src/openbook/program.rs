use anyhow::{anyhow, Result};
use log::info;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};
use std::path::Path;

use crate::entity::{ConfigError, SwapIntent};
use crate::openbook::constants::{OPENBOOK_V2_PROGRAM_ID, SWAP_ACCOUNT_NAMES, SWAP_INSTRUCTION};
use crate::openbook::idl::Idl;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountFlags {
    pub writable: bool,
    pub signer: bool,
}

impl AccountFlags {
    const fn new(writable: bool, signer: bool) -> Self {
        Self { writable, signer }
    }

    fn meta(self, pubkey: Pubkey) -> AccountMeta {
        if self.writable {
            AccountMeta::new(pubkey, self.signer)
        } else {
            AccountMeta::new_readonly(pubkey, self.signer)
        }
    }
}

// market, source, destination, user, system program, token program
const DEFAULT_SWAP_ACCOUNTS: [AccountFlags; 6] = [
    AccountFlags::new(true, false),
    AccountFlags::new(true, false),
    AccountFlags::new(true, false),
    AccountFlags::new(true, true),
    AccountFlags::new(false, false),
    AccountFlags::new(false, false),
];

/// Anchor instruction discriminator: first 8 bytes of `sha256("<namespace>:<name>")`.
pub fn anchor_discriminator(namespace: &str, name: &str) -> [u8; 8] {
    let preimage = format!("{}:{}", namespace, name);
    let hash = solana_sdk::hash::hash(preimage.as_bytes());
    let mut disc = [0u8; 8];
    disc.copy_from_slice(&hash.to_bytes()[..8]);
    disc
}

pub fn ix_discriminator(name: &str) -> [u8; 8] {
    anchor_discriminator("global", name)
}

/// A deployed program the swap instruction is built against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramHandle {
    program_id: Pubkey,
    swap_accounts: [AccountFlags; 6],
}

impl ProgramHandle {
    /// Handle using the built-in swap account layout.
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            swap_accounts: DEFAULT_SWAP_ACCOUNTS,
        }
    }

    pub fn openbook_v2() -> Self {
        Self::new(OPENBOOK_V2_PROGRAM_ID)
    }

    /// Takes the swap account flags from an IDL. Fails if the IDL has no
    /// `swap` instruction, lacks one of its accounts, or declares anything
    /// other than a single argument.
    pub fn from_idl(program_id: Pubkey, idl: &Idl) -> Result<Self> {
        let swap = idl
            .instruction(SWAP_INSTRUCTION)
            .ok_or_else(|| anyhow!("IDL has no `{}` instruction", SWAP_INSTRUCTION))?;

        if swap.args.len() != 1 {
            return Err(anyhow!(
                "IDL `{}` instruction takes {} arguments, expected 1",
                SWAP_INSTRUCTION,
                swap.args.len()
            ));
        }

        let mut swap_accounts = DEFAULT_SWAP_ACCOUNTS;
        for (flags, name) in swap_accounts.iter_mut().zip(SWAP_ACCOUNT_NAMES) {
            let account = swap.account(name).ok_or_else(|| {
                anyhow!(
                    "IDL `{}` instruction has no `{}` account",
                    SWAP_INSTRUCTION,
                    name
                )
            })?;
            *flags = AccountFlags::new(account.is_mut, account.is_signer);
        }

        Ok(Self {
            program_id,
            swap_accounts,
        })
    }

    pub fn from_idl_file(program_id: Pubkey, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::Idl {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let idl = Idl::parse(&json)?;
        info!("Loaded program IDL from {}", path.display());

        Self::from_idl(program_id, &idl)
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    pub fn swap_accounts(&self) -> &[AccountFlags; 6] {
        &self.swap_accounts
    }

    /// Builds the `swap(amount)` instruction for `intent`.
    pub fn swap_instruction(&self, intent: &SwapIntent) -> Instruction {
        let keys = [
            intent.market,
            intent.source_token_account,
            intent.destination_token_account,
            intent.user_wallet,
            system_program::ID,
            spl_token::ID,
        ];

        let accounts = self
            .swap_accounts
            .iter()
            .zip(keys)
            .map(|(flags, key)| flags.meta(key))
            .collect();

        let mut data = ix_discriminator(SWAP_INSTRUCTION).to_vec();
        data.extend_from_slice(&intent.amount.to_le_bytes());

        Instruction {
            program_id: self.program_id,
            accounts,
            data,
        }
    }
}
