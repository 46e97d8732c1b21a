use anyhow::Result;
use serde::Deserialize;
use solana_sdk::{pubkey::Pubkey, signature::Keypair};
use std::str::FromStr;

use crate::entity::ConfigError;
use crate::openbook::{ProgramHandle, OPENBOOK_V2_PROGRAM_ID};
use crate::solana::wallet::keypair_from_base58;
use crate::swap_api::config::{SwapApiConfig, DEFAULT_SWAP_API_URL};

pub const DEFAULT_SOLANA_RPC_URL: &str = "http://127.0.0.1:8899";

/// Application configuration, read from environment variables on top of
/// built-in defaults
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub swap_api_url: String,
    pub swap_api_timeout_secs: Option<u64>,
    pub solana_rpc_url: String,
    pub openbook_program_id: String,
    pub openbook_idl_path: Option<String>,
    pub wallet_private_key: Option<String>,
}

impl AppConfig {
    /// Loads configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_source(config::Environment::default())
    }

    pub fn from_source<S>(source: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder()
            .set_default("swap_api_url", DEFAULT_SWAP_API_URL)?
            .set_default("solana_rpc_url", DEFAULT_SOLANA_RPC_URL)?
            .set_default("openbook_program_id", OPENBOOK_V2_PROGRAM_ID.to_string())?
            .add_source(source)
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn swap_api(&self) -> SwapApiConfig {
        SwapApiConfig {
            base_url: self.swap_api_url.clone(),
            timeout_secs: self.swap_api_timeout_secs,
        }
    }

    pub fn program_id(&self) -> Result<Pubkey, ConfigError> {
        Pubkey::from_str(&self.openbook_program_id)
            .map_err(|_| ConfigError::InvalidProgramId(self.openbook_program_id.clone()))
    }

    /// Program handle, taking the swap layout from the IDL when one is configured
    pub fn program_handle(&self) -> Result<ProgramHandle> {
        let program_id = self.program_id()?;

        match &self.openbook_idl_path {
            Some(path) => ProgramHandle::from_idl_file(program_id, path),
            None => Ok(ProgramHandle::new(program_id)),
        }
    }

    pub fn wallet_keypair(&self) -> Result<Keypair> {
        let encoded = self
            .wallet_private_key
            .as_deref()
            .ok_or(ConfigError::Missing("WALLET_PRIVATE_KEY"))?;

        keypair_from_base58(encoded)
    }
}
