//! File-based configuration store (YAML)
//!
//! Lays documents out as one YAML file per document under `<root>/<kind>/`,
//! e.g. `<root>/cpi/00-base.yml`. Files are read in lexicographic name order
//! so that a numeric prefix gives a deterministic merge order.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::traits::ConfigStore;
use crate::log_warn;
use crate::logging::{Logger, NoOpLogger};
use crate::types::{ConfigKind, RawDocument};

/// File-based configuration store
///
/// # Example
///
/// ```no_run
/// use multicpi_core::config::FileConfigStore;
///
/// let store = FileConfigStore::new("/var/multicpi/configs");
/// ```
pub struct FileConfigStore {
    root: PathBuf,
    logger: Arc<dyn Logger>,
}

impl FileConfigStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            logger: Arc::new(NoOpLogger),
        }
    }

    /// Attach a logger for skipped-file diagnostics
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Get the store root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding documents of the given kind
    pub fn kind_dir(&self, kind: ConfigKind) -> PathBuf {
        self.root.join(kind.as_str())
    }

    /// Check whether any documents of the given kind exist
    pub fn exists(&self, kind: ConfigKind) -> bool {
        !self.latest_set(kind).is_empty()
    }
}

impl ConfigStore for FileConfigStore {
    fn latest_set(&self, kind: ConfigKind) -> Vec<RawDocument> {
        let dir = self.kind_dir(kind);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                matches!(
                    p.extension().and_then(|ext| ext.to_str()),
                    Some("yml") | Some("yaml")
                )
            })
            .collect();
        paths.sort();

        let mut documents = Vec::new();
        for path in paths {
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(err) => {
                    log_warn!(self.logger, "skipping unreadable {} config {}: {}", kind, path.display(), err);
                    continue;
                }
            };
            match serde_yaml::from_str::<RawDocument>(&content) {
                Ok(document) => documents.push(document),
                Err(err) => {
                    log_warn!(self.logger, "skipping malformed {} config {}: {}", kind, path.display(), err);
                }
            }
        }
        documents
    }
}
