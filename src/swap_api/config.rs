pub const DEFAULT_SWAP_API_URL: &str = "https://swap.sollet.io/api/";

/// Swap API configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapApiConfig {
    /// Base URL every request path is appended to
    pub base_url: String,

    /// Optional request timeout; the transport default applies when unset
    pub timeout_secs: Option<u64>,
}

impl Default for SwapApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SWAP_API_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl SwapApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: None,
        }
    }

    /// Full URL for a request path.
    pub fn url_for(&self, path: &str) -> String {
        if self.base_url.ends_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}
