//! Keyed asynchronous data sources over the swap API.
//!
//! A UI layer subscribes to these by [`QueryKey`]; two sources with equal keys
//! are the same logical subscription, so any deduplication happens there, not
//! here.

use anyhow::Result;
use async_trait::async_trait;
use log::warn;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::swap_api::client::{RequestOptions, SwapApiClient};

pub const SWAP_API_GET_TAG: &str = "swapApiGet";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub tag: &'static str,
    pub path: Option<String>,
}

impl QueryKey {
    pub fn new(tag: &'static str, path: Option<String>) -> Self {
        Self { tag, path }
    }
}

/// Settings for the framework driving a data source. [`AsyncData`] carries
/// them on its handle but fetches exactly once regardless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AsyncDataOptions {
    pub refresh_interval: Option<Duration>,
}

/// Something a reactive framework can fetch and cache under a key.
#[async_trait]
pub trait AsyncDataSource: Send + Sync {
    type Output: Send + Sync + 'static;

    fn key(&self) -> QueryKey;

    fn options(&self) -> AsyncDataOptions {
        AsyncDataOptions::default()
    }

    async fn fetch(&self) -> Result<Self::Output>;
}

/// GET query against the swap API.
pub struct SwapApiGet {
    client: Arc<SwapApiClient>,
    path: Option<String>,
    options: AsyncDataOptions,
}

/// Creates the GET query for `path`. `None` and `""` both mean "nothing to
/// fetch".
pub fn use_swap_api_get(
    client: Arc<SwapApiClient>,
    path: Option<&str>,
    options: AsyncDataOptions,
) -> SwapApiGet {
    SwapApiGet {
        client,
        path: path.filter(|p| !p.is_empty()).map(str::to_string),
        options,
    }
}

impl SwapApiGet {
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

#[async_trait]
impl AsyncDataSource for SwapApiGet {
    type Output = Option<Value>;

    fn key(&self) -> QueryKey {
        QueryKey::new(SWAP_API_GET_TAG, self.path.clone())
    }

    fn options(&self) -> AsyncDataOptions {
        self.options.clone()
    }

    async fn fetch(&self) -> Result<Option<Value>> {
        let Some(path) = self.path.as_deref() else {
            return Ok(None);
        };

        self.client
            .get(path, RequestOptions::ignore_user_errors())
            .await
    }
}

#[derive(Debug, Clone)]
pub enum AsyncDataState<T> {
    Loading,
    Loaded(T),
    Failed(Arc<anyhow::Error>),
}

impl<T> AsyncDataState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, AsyncDataState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            AsyncDataState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&anyhow::Error> {
        match self {
            AsyncDataState::Failed(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

/// Handle to one load of a data source: current state plus change
/// notifications. The source is fetched exactly once.
pub struct AsyncData<T> {
    key: QueryKey,
    options: AsyncDataOptions,
    state: watch::Receiver<AsyncDataState<T>>,
}

impl<T> AsyncData<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Starts fetching `source` on the current tokio runtime.
    pub fn load<S>(source: S) -> Self
    where
        S: AsyncDataSource<Output = T> + 'static,
    {
        let key = source.key();
        let options = source.options();
        let (tx, rx) = watch::channel(AsyncDataState::Loading);

        let task_key = key.clone();
        tokio::spawn(async move {
            let state = match source.fetch().await {
                Ok(value) => AsyncDataState::Loaded(value),
                Err(err) => {
                    warn!("Query {:?} failed: {}", task_key, err);
                    AsyncDataState::Failed(Arc::new(err))
                }
            };
            tx.send_replace(state);
        });

        Self {
            key,
            options,
            state: rx,
        }
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    pub fn options(&self) -> &AsyncDataOptions {
        &self.options
    }

    pub fn state(&self) -> AsyncDataState<T> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AsyncDataState<T>> {
        self.state.clone()
    }

    /// Waits until the load has finished, successfully or not.
    pub async fn wait(&mut self) -> AsyncDataState<T> {
        if let Ok(state) = self.state.wait_for(|state| !state.is_loading()).await {
            return state.clone();
        }
        // Sender is gone; whatever it last published is final
        self.state.borrow().clone()
    }
}
