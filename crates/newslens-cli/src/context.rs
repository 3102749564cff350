use crate::config::{resolve_api_url, Config};
use anyhow::Result;
use newslens_client::ApiClient;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Lazily constructed per-invocation dependencies: the config file is read
/// and the HTTP client built at most once, and only when a handler actually
/// needs them.
pub struct ExecutionContext {
    api_url_flag: Option<String>,
    config: OnceCell<Config>,
    client: OnceCell<Arc<ApiClient>>,
}

impl ExecutionContext {
    pub fn new(api_url_flag: Option<String>) -> Self {
        Self {
            api_url_flag,
            config: OnceCell::new(),
            client: OnceCell::new(),
        }
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(Config::load)
    }

    pub fn api_url(&self) -> Result<String> {
        let config = self.config()?;
        Ok(resolve_api_url(self.api_url_flag.as_deref(), config))
    }

    pub fn client(&self) -> Result<Arc<ApiClient>> {
        self.client
            .get_or_try_init(|| {
                let api_url = self.api_url()?;
                let client = ApiClient::new(api_url).map_err(anyhow::Error::new)?;
                Ok(Arc::new(client))
            })
            .cloned()
    }
}
