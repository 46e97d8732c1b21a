mod config_error;
pub(crate) mod swap_api_error;
mod swap_intent;

pub use config_error::ConfigError;
pub use swap_api_error::SwapApiError;
pub use swap_intent::SwapIntent;
