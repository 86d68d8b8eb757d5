use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::Category;

pub const DEFAULT_BASE_URL: &str = "https://vishnu-api.onrender.com/api/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;
pub const CONFIG_FILE: &str = "content.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("couldn't read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid content config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Where each content category is fetched from.
///
/// ```toml
/// base_url = "https://example.com/api/"
/// timeout_secs = 8
///
/// [endpoints]
/// blogs = "posts/"
/// projects = "https://api.github.com/users/someone/repos"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Per-category overrides, relative to `base_url` unless absolute.
    pub endpoints: BTreeMap<Category, String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            endpoints: BTreeMap::new(),
        }
    }
}

impl ContentConfig {
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads the config at `path`. A missing file means built-in defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(s) => Self::from_toml(&s),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("{} not found, using default content endpoints", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Request timeout. Never zero, so a hung endpoint can't stall a section.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn endpoint(&self, category: Category) -> String {
        let path = self
            .endpoints
            .get(&category)
            .map(String::as_str)
            .unwrap_or(category.default_path());
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
