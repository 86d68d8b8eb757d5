use std::sync::OnceLock;

use reqwest::Client;

use super::{Category, ContentSource, LoadError};
use crate::config::ContentConfig;

static SOURCE: OnceLock<HttpSource> = OnceLock::new();

/// Fetches content bodies from the configured content API.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    config: ContentConfig,
}

impl HttpSource {
    pub fn new(config: ContentConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    fn classify(&self, e: reqwest::Error) -> LoadError {
        if e.is_timeout() {
            LoadError::Timeout(self.config.timeout())
        } else {
            LoadError::Transport(e.to_string())
        }
    }
}

impl ContentSource for HttpSource {
    async fn fetch(&self, category: Category) -> Result<String, LoadError> {
        let url = self.config.endpoint(category);
        log::debug!("fetching {category} from {url}");
        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        let status = res.status();
        if !status.is_success() {
            return Err(LoadError::Status(status));
        }
        res.text().await.map_err(|e| self.classify(e))
    }
}

/// Makes `source` the process-wide content source. Only the first call wins.
pub fn install(source: HttpSource) {
    if SOURCE.set(source).is_err() {
        log::warn!("content source already installed, ignoring");
    }
}

pub fn installed() -> Option<&'static HttpSource> {
    SOURCE.get()
}
