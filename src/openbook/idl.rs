//! The parts of an Anchor IDL needed to locate an instruction and its
//! account flags. Both the legacy (`isMut`/`isSigner`) and the 0.30
//! (`writable`/`signer`) spellings are accepted.

use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct Idl {
    #[serde(default)]
    pub instructions: Vec<IdlInstruction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdlInstruction {
    pub name: String,
    #[serde(default)]
    pub accounts: Vec<IdlAccount>,
    #[serde(default)]
    pub args: Vec<IdlArg>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdlAccount {
    pub name: String,
    #[serde(default, rename = "isMut", alias = "writable")]
    pub is_mut: bool,
    #[serde(default, rename = "isSigner", alias = "signer")]
    pub is_signer: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdlArg {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Value,
}

impl Idl {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| anyhow!("Failed to parse IDL: {}", e))
    }

    pub fn instruction(&self, name: &str) -> Option<&IdlInstruction> {
        self.instructions
            .iter()
            .find(|ix| names_match(&ix.name, name))
    }
}

impl IdlInstruction {
    pub fn account(&self, name: &str) -> Option<&IdlAccount> {
        self.accounts.iter().find(|acc| names_match(&acc.name, name))
    }
}

/// `sourceTokenAccount` and `source_token_account` name the same thing.
pub fn names_match(a: &str, b: &str) -> bool {
    let normalize = |s: &str| -> String {
        s.chars()
            .filter(|c| *c != '_')
            .flat_map(char::to_lowercase)
            .collect()
    };
    normalize(a) == normalize(b)
}
