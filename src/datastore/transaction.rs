/// Pre-operation image of the persisted collections a mutation may touch.
/// Holding the raw serialized payloads (rather than structured copies) lets a
/// rollback restore the exact byte-for-byte state, including the absence of a
/// collection that had never been written.
#[derive(Debug)]
pub struct Snapshot {
    entries: Vec<(String, Option<String>)>,
}

impl Snapshot {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(super) fn capture(&mut self, collection: &str, payload: Option<String>) {
        self.entries.push((collection.to_string(), payload));
    }

    pub(super) fn entries(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(collection, payload)| (collection.as_str(), payload.as_deref()))
    }
}
