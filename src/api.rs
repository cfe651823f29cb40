use crate::{
    config::Config,
    datastore::{CollectionStore, Datastore, FileStore},
};

/// The root object wiring the persisted collections and the configuration
/// together. Constructed once at application start and passed by reference to
/// consumers; the sub-APIs (`notifications()`, `audit()`) hang off of it.
#[derive(Clone)]
pub struct Api<CS: CollectionStore> {
    pub datastore: Datastore<CS>,
    pub config: Config,
}

impl<CS: CollectionStore> Api<CS> {
    /// Instantiates APIs collection with the specified config and datastore.
    pub fn new(config: Config, datastore: Datastore<CS>) -> Self {
        Self { datastore, config }
    }
}

impl Api<FileStore> {
    /// Instantiates APIs collection backed by JSON files under the configured
    /// data directory.
    pub fn open(config: Config) -> anyhow::Result<Self> {
        let datastore = Datastore::open(&config.data_dir)?;
        Ok(Self::new(config, datastore))
    }
}

impl<CS: CollectionStore> AsRef<Api<CS>> for Api<CS> {
    fn as_ref(&self) -> &Self {
        self
    }
}
