//! Configuration store trait

use crate::types::{ConfigKind, RawDocument};

/// Versioned configuration document store abstraction
///
/// Returns the most recent set of documents of a kind, in a stable order
/// (older document first); the factory merges them in that order.
pub trait ConfigStore: Send + Sync {
    /// Get the latest set of config documents of the given kind
    ///
    /// An empty vector means no configuration of that kind exists, which for
    /// `ConfigKind::Cpi` puts the factory into legacy single-CPI mode.
    fn latest_set(&self, kind: ConfigKind) -> Vec<RawDocument>;
}
