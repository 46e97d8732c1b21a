pub mod client;
pub mod config;
pub mod envelope;
pub mod query;
pub mod transport;

pub use client::{swap_api_request, RequestOptions, SwapApiClient, SwapApiRequest};
pub use config::SwapApiConfig;
pub use envelope::{decode_response, RawResponse, ResponseEnvelope};
pub use query::{
    use_swap_api_get, AsyncData, AsyncDataOptions, AsyncDataSource, AsyncDataState, QueryKey,
    SwapApiGet,
};
pub use transport::{HttpTransport, ReqwestTransport};
