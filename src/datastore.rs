mod collection_store;
mod file_store;
mod memory_store;
mod transaction;

pub use self::{
    collection_store::CollectionStore, file_store::FileStore, memory_store::MemoryStore,
    transaction::Snapshot,
};

use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;

/// Provides typed access to the named, JSON-serialized collections the service
/// persists, and the snapshot/rollback envelope every mutation runs under.
#[derive(Clone)]
pub struct Datastore<CS: CollectionStore> {
    store: CS,
}

impl<CS: CollectionStore> Datastore<CS> {
    /// Creates a datastore on top of the specified collection store.
    pub fn new(store: CS) -> Self {
        Self { store }
    }

    /// Retrieves all entries of the specified collection. A collection that has
    /// never been written reads as empty.
    pub fn get_collection<T: DeserializeOwned>(&self, collection: &str) -> anyhow::Result<Vec<T>> {
        match self.store.read(collection)? {
            Some(payload) => serde_json::from_str(&payload)
                .with_context(|| format!("Cannot deserialize `{collection}` collection.")),
            None => Ok(vec![]),
        }
    }

    /// Replaces the specified collection with the provided entries.
    pub fn set_collection<T: Serialize>(
        &self,
        collection: &str,
        entries: &[T],
    ) -> anyhow::Result<()> {
        let payload = serde_json::to_string(entries)
            .with_context(|| format!("Cannot serialize `{collection}` collection."))?;
        self.store.write(collection, &payload)
    }

    /// Removes the specified collection entirely.
    pub fn remove_collection(&self, collection: &str) -> anyhow::Result<()> {
        self.store.remove(collection)
    }

    /// Captures the raw serialized state of every specified collection so that
    /// a failed operation can restore it via `rollback`.
    pub fn begin_transaction(&self, collections: &[&str]) -> anyhow::Result<Snapshot> {
        let mut snapshot = Snapshot::with_capacity(collections.len());
        for collection in collections {
            snapshot.capture(collection, self.store.read(collection)?);
        }
        Ok(snapshot)
    }

    /// Completes a transaction. All writes have already been performed by the
    /// operation itself, so committing only discards the pre-operation image.
    pub fn commit(&self, _snapshot: Snapshot) {}

    /// Restores every collection captured in the snapshot to its pre-operation
    /// state. A collection that did not exist before the transaction is removed
    /// rather than left behind as an empty value.
    pub fn rollback(&self, snapshot: &Snapshot) -> anyhow::Result<()> {
        for (collection, payload) in snapshot.entries() {
            match payload {
                Some(payload) => self.store.write(collection, payload)?,
                None => self.store.remove(collection)?,
            }
        }
        Ok(())
    }
}

impl Datastore<FileStore> {
    /// Opens a file-backed datastore rooted at the specified directory.
    pub fn open<P: AsRef<Path>>(root_data_path: P) -> anyhow::Result<Self> {
        Ok(Self::new(FileStore::open(root_data_path)?))
    }
}

impl<CS: CollectionStore> AsRef<Datastore<CS>> for Datastore<CS> {
    fn as_ref(&self) -> &Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::datastore::{CollectionStore, Datastore, MemoryStore};

    #[test]
    fn missing_collection_reads_as_empty() -> anyhow::Result<()> {
        let datastore = Datastore::new(MemoryStore::default());
        assert_eq!(
            datastore.get_collection::<String>("notification_pool")?,
            Vec::<String>::new()
        );
        Ok(())
    }

    #[test]
    fn collection_round_trip() -> anyhow::Result<()> {
        let datastore = Datastore::new(MemoryStore::default());
        datastore.set_collection(
            "notification_pool",
            &["one".to_string(), "two".to_string()],
        )?;
        assert_eq!(
            datastore.get_collection::<String>("notification_pool")?,
            vec!["one".to_string(), "two".to_string()]
        );
        Ok(())
    }

    #[test]
    fn rollback_restores_previous_state() -> anyhow::Result<()> {
        let datastore = Datastore::new(MemoryStore::default());
        datastore.set_collection("notification_pool", &["one".to_string()])?;

        let snapshot = datastore.begin_transaction(&["notification_pool"])?;
        datastore.set_collection(
            "notification_pool",
            &["two".to_string(), "one".to_string()],
        )?;
        datastore.rollback(&snapshot)?;

        assert_eq!(
            datastore.get_collection::<String>("notification_pool")?,
            vec!["one".to_string()]
        );
        Ok(())
    }

    #[test]
    fn rollback_removes_collection_that_did_not_exist() -> anyhow::Result<()> {
        let store = MemoryStore::default();
        let datastore = Datastore::new(store.clone());

        let snapshot = datastore.begin_transaction(&["sent_notifications"])?;
        datastore.set_collection("sent_notifications", &["one".to_string()])?;
        datastore.rollback(&snapshot)?;

        assert_eq!(store.read("sent_notifications")?, None);
        Ok(())
    }

    #[test]
    fn rollback_preserves_serialized_bytes() -> anyhow::Result<()> {
        let store = MemoryStore::default();
        let datastore = Datastore::new(store.clone());
        store.write("notification_pool", r#"["one","two"]"#)?;

        let snapshot = datastore.begin_transaction(&["notification_pool"])?;
        store.write("notification_pool", r#"["three"]"#)?;
        datastore.rollback(&snapshot)?;

        assert_eq!(
            store.read("notification_pool")?.as_deref(),
            Some(r#"["one","two"]"#)
        );
        Ok(())
    }

    #[test]
    fn commit_keeps_written_state() -> anyhow::Result<()> {
        let datastore = Datastore::new(MemoryStore::default());

        let snapshot = datastore.begin_transaction(&["notification_pool"])?;
        datastore.set_collection("notification_pool", &["one".to_string()])?;
        datastore.commit(snapshot);

        assert_eq!(
            datastore.get_collection::<String>("notification_pool")?,
            vec!["one".to_string()]
        );
        Ok(())
    }
}
