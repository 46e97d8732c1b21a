use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::error;
use reqwest::{Client, Request};

use crate::swap_api::envelope::RawResponse;

/// Sends one prepared HTTP request and hands back the raw response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: Request) -> Result<RawResponse>;
}

/// Transport backed by `reqwest`
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
        }
    }

    pub fn with_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<RawResponse> {
        let url = request.url().to_string();

        let response = self.http_client.execute(request).await.map_err(|e| {
            error!("Failed to reach swap API at {}: {}", url, e);
            anyhow!("HTTP request failed: {}", e)
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| anyhow!("Failed to read swap API response: {}", e))?;

        Ok(RawResponse { status, body })
    }
}
