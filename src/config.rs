mod collections_config;
mod raw_config;

use std::path::PathBuf;

pub use self::{collections_config::CollectionsConfig, raw_config::RawConfig};

/// Main service config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory the persisted collections are stored in.
    pub data_dir: PathBuf,
    /// Names of the persisted collections.
    pub collections: CollectionsConfig,
}

impl AsRef<Config> for Config {
    fn as_ref(&self) -> &Config {
        self
    }
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self {
            data_dir: PathBuf::from(raw_config.data_dir),
            collections: raw_config.collections,
        }
    }
}
