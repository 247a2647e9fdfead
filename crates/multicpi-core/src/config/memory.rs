//! In-memory configuration store

use std::collections::HashMap;
use std::sync::RwLock;

use super::traits::ConfigStore;
use crate::types::{ConfigKind, RawDocument};

/// In-memory configuration store for testing
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    documents: RwLock<HashMap<ConfigKind, Vec<RawDocument>>>,
}

impl MemoryConfigStore {
    /// Create a new empty memory config store
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
        }
    }

    /// Set the latest document set for a kind, replacing any existing set
    pub fn set_latest(&self, kind: ConfigKind, documents: Vec<RawDocument>) {
        let mut guard = self.documents.write().unwrap();
        guard.insert(kind, documents);
    }

    /// Append a document to a kind's latest set
    pub fn push(&self, kind: ConfigKind, document: RawDocument) {
        let mut guard = self.documents.write().unwrap();
        guard.entry(kind).or_default().push(document);
    }

    /// Clear all documents
    pub fn clear(&self) {
        let mut guard = self.documents.write().unwrap();
        guard.clear();
    }
}

impl ConfigStore for MemoryConfigStore {
    fn latest_set(&self, kind: ConfigKind) -> Vec<RawDocument> {
        let guard = self.documents.read().unwrap();
        guard.get(&kind).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_config_store() {
        let store = MemoryConfigStore::new();

        // Initially empty for both kinds
        assert!(store.latest_set(ConfigKind::Cpi).is_empty());
        assert!(store.latest_set(ConfigKind::Cloud).is_empty());

        let doc: RawDocument = serde_yaml::from_str("cpis: []").unwrap();
        store.push(ConfigKind::Cpi, doc.clone());
        assert_eq!(store.latest_set(ConfigKind::Cpi), vec![doc]);

        // Cloud set is unaffected
        assert!(store.latest_set(ConfigKind::Cloud).is_empty());

        store.clear();
        assert!(store.latest_set(ConfigKind::Cpi).is_empty());
    }

    #[test]
    fn test_set_latest_replaces() {
        let store = MemoryConfigStore::new();
        let first: RawDocument = serde_yaml::from_str("azs: []").unwrap();
        let second: RawDocument = serde_yaml::from_str("azs: [{name: z1}]").unwrap();

        store.push(ConfigKind::Cloud, first);
        store.set_latest(ConfigKind::Cloud, vec![second.clone()]);

        assert_eq!(store.latest_set(ConfigKind::Cloud), vec![second]);
    }
}
