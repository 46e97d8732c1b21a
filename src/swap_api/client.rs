use anyhow::{anyhow, Result};
use log::debug;
use reqwest::header::{HeaderValue, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Body, Method, Request, Url};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::swap_api::config::SwapApiConfig;
use crate::swap_api::envelope::{decode_response, is_truthy};
use crate::swap_api::transport::{HttpTransport, ReqwestTransport};

/// One call to the swap API: method, path relative to the base URL and an
/// optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl SwapApiRequest {
    pub fn new(method: Method, path: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method,
            path: path.into(),
            body,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path, None)
    }

    // Falsy bodies (`null`, `false`, `0`, `""`) are not sent
    fn payload(&self) -> Option<&Value> {
        self.body.as_ref().filter(|body| is_truthy(body))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Treat failed envelopes with a 4xx status as "no data"
    pub ignore_user_errors: bool,
}

impl RequestOptions {
    pub fn ignore_user_errors() -> Self {
        Self {
            ignore_user_errors: true,
        }
    }
}

/// Client for the swap API
pub struct SwapApiClient {
    config: SwapApiConfig,
    transport: Arc<dyn HttpTransport>,
}

impl SwapApiClient {
    /// Creates a client that talks HTTP through `reqwest`
    pub fn new(config: SwapApiConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(config: SwapApiConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &SwapApiConfig {
        &self.config
    }

    /// Builds the HTTP request for `request` without sending it.
    ///
    /// GET requests bypass caches and never carry a body. Other methods send
    /// the body, when there is one, as JSON.
    pub fn build_request(&self, request: &SwapApiRequest) -> Result<Request> {
        let url = Url::parse(&self.config.url_for(&request.path))
            .map_err(|e| anyhow!("Invalid swap API URL for {}: {}", request.path, e))?;

        let mut http_request = Request::new(request.method.clone(), url);

        if request.method == Method::GET {
            http_request
                .headers_mut()
                .insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        } else if let Some(body) = request.payload() {
            let payload = serde_json::to_vec(body)
                .map_err(|e| anyhow!("Failed to serialize request body: {}", e))?;
            http_request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *http_request.body_mut() = Some(Body::from(payload));
        }

        if let Some(secs) = self.config.timeout_secs {
            *http_request.timeout_mut() = Some(Duration::from_secs(secs));
        }

        Ok(http_request)
    }

    /// Sends one request and decodes the response envelope.
    pub async fn send(
        &self,
        request: &SwapApiRequest,
        options: RequestOptions,
    ) -> Result<Option<Value>> {
        let http_request = self.build_request(request)?;
        debug!("Swap API request: {} {}", request.method, http_request.url());

        let response = self.transport.execute(http_request).await?;
        debug!(
            "Swap API response [{}] for {}",
            response.status, request.path
        );

        decode_response(&response, options.ignore_user_errors)
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Option<Value>> {
        self.send(&SwapApiRequest::new(method, path, body), options).await
    }

    pub async fn get(&self, path: &str, options: RequestOptions) -> Result<Option<Value>> {
        self.request(Method::GET, path, None, options).await
    }

    pub async fn post(
        &self,
        path: &str,
        body: Value,
        options: RequestOptions,
    ) -> Result<Option<Value>> {
        self.request(Method::POST, path, Some(body), options).await
    }
}

/// Issues a single swap API request through `client`.
pub async fn swap_api_request(
    client: &SwapApiClient,
    method: Method,
    path: &str,
    body: Option<Value>,
    options: RequestOptions,
) -> Result<Option<Value>> {
    client.request(method, path, body, options).await
}
