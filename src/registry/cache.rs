use dashmap::DashMap;

/// Memoizes transformed names so each distinct input is converted at most
/// once. Entries are never evicted or mutated; inputs are a small, bounded
/// set of schema identifiers, not unbounded user data.
///
/// DashMap shards its locks, so concurrent transforms of different keys do
/// not serialize. A race where two callers miss on the same key and both
/// compute is harmless: the transform is pure, last write wins.
#[derive(Default)]
pub(crate) struct NameCache {
    entries: DashMap<String, String>,
}

impl NameCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn get(&self, name: &str) -> Option<String> {
        self.entries.get(name).map(|entry| entry.value().clone())
    }

    pub(crate) fn set(&self, name: &str, renamed: &str) {
        self.entries.insert(name.to_string(), renamed.to_string());
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
