/// Storage of named, opaque serialized collections. Implementations only move
/// raw payloads around; (de)serialization and transaction semantics live in
/// `Datastore`.
pub trait CollectionStore {
    /// Reads the raw payload of the specified collection, or `None` if the
    /// collection has never been written.
    fn read(&self, collection: &str) -> anyhow::Result<Option<String>>;

    /// Writes the raw payload of the specified collection, replacing any
    /// previous payload.
    fn write(&self, collection: &str, payload: &str) -> anyhow::Result<()>;

    /// Removes the specified collection. Removing a collection that does not
    /// exist is not an error.
    fn remove(&self, collection: &str) -> anyhow::Result<()>;
}
