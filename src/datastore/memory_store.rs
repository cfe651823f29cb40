use crate::datastore::CollectionStore;
use anyhow::anyhow;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

/// Ephemeral, in-process collection store. Clones share the same underlying
/// collections.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    collections: Arc<Mutex<HashMap<String, String>>>,
}

impl CollectionStore for MemoryStore {
    fn read(&self, collection: &str) -> anyhow::Result<Option<String>> {
        Ok(self
            .collections
            .lock()
            .map_err(|_| anyhow!("Collection store lock is poisoned."))?
            .get(collection)
            .cloned())
    }

    fn write(&self, collection: &str, payload: &str) -> anyhow::Result<()> {
        self.collections
            .lock()
            .map_err(|_| anyhow!("Collection store lock is poisoned."))?
            .insert(collection.to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&self, collection: &str) -> anyhow::Result<()> {
        self.collections
            .lock()
            .map_err(|_| anyhow!("Collection store lock is poisoned."))?
            .remove(collection);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::datastore::{CollectionStore, MemoryStore};

    #[test]
    fn read_write_and_remove() -> anyhow::Result<()> {
        let store = MemoryStore::default();

        assert_eq!(store.read("notification_pool")?, None);

        store.write("notification_pool", "[]")?;
        assert_eq!(store.read("notification_pool")?.as_deref(), Some("[]"));

        store.remove("notification_pool")?;
        assert_eq!(store.read("notification_pool")?, None);

        Ok(())
    }

    #[test]
    fn clones_share_collections() -> anyhow::Result<()> {
        let store = MemoryStore::default();
        let clone = store.clone();

        store.write("notification_pool", "[]")?;
        assert_eq!(clone.read("notification_pool")?.as_deref(), Some("[]"));

        Ok(())
    }
}
