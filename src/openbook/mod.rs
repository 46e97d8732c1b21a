pub mod constants;
pub mod idl;
pub mod program;
pub mod provider;
pub mod swapper;

pub use constants::{OPENBOOK_V2_PROGRAM_ID, SWAP_INSTRUCTION};
pub use idl::Idl;
pub use program::{anchor_discriminator, ix_discriminator, AccountFlags, ProgramHandle};
pub use provider::{Provider, RpcProvider};
pub use swapper::OpenbookSwapper;
