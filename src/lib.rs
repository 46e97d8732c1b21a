pub mod config;
pub mod entity;
pub mod openbook;
pub mod solana;
pub mod swap_api;

// Re-export commonly used items
pub use config::AppConfig;
pub use entity::*;
pub use openbook::{OpenbookSwapper, ProgramHandle, Provider, RpcProvider};
pub use solana::*;
pub use swap_api::{
    swap_api_request, use_swap_api_get, AsyncData, AsyncDataOptions, AsyncDataSource,
    RequestOptions, SwapApiClient, SwapApiConfig,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
