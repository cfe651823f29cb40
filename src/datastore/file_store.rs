use crate::datastore::CollectionStore;
use anyhow::Context;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Collection store that persists every collection as a standalone JSON file
/// under a root data directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a file store rooted at the specified directory, creating the
    /// directory if needed.
    pub fn open<P: AsRef<Path>>(root: P) -> anyhow::Result<Self> {
        fs::create_dir_all(root.as_ref())
            .with_context(|| format!("Cannot create {:?} data dir.", root.as_ref()))?;
        Ok(Self {
            root: root.as_ref().to_path_buf(),
        })
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{collection}.json"))
    }
}

impl CollectionStore for FileStore {
    fn read(&self, collection: &str) -> anyhow::Result<Option<String>> {
        match fs::read_to_string(self.collection_path(collection)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("Cannot read `{collection}` collection."))
            }
        }
    }

    fn write(&self, collection: &str, payload: &str) -> anyhow::Result<()> {
        fs::write(self.collection_path(collection), payload)
            .with_context(|| format!("Cannot write `{collection}` collection."))
    }

    fn remove(&self, collection: &str) -> anyhow::Result<()> {
        match fs::remove_file(self.collection_path(collection)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("Cannot remove `{collection}` collection."))
            }
        }
    }
}
