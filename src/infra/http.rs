use crate::error::{Result, ScraperError};
use async_trait::async_trait;

/// Transport seam for page fetches. The paginator only ever needs "GET this
/// URL, give me the body"; tests substitute an in-memory implementation.
#[async_trait]
pub trait PageTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Vec<u8>>;
}

/// Real transport. One instance per run; the inner client pools connections
/// across page fetches within that run.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PageTransport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("HTTP GET request to: {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::Api {
                message: format!("request to {url} failed with status {status}"),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}
