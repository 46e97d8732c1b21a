pub mod wallet;

pub use wallet::{keypair_from_base58, parse_pubkey};
