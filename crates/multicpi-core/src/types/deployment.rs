//! Deployment slice consumed by the cloud factory

use super::document::RawDocument;

/// The slice of a deployment record the cloud factory needs: its name (used
/// to scope zone construction) and the cloud config documents bound to it.
#[derive(Debug, Clone, Default)]
pub struct Deployment {
    /// Deployment name
    pub name: String,
    /// Cloud config documents bound to this deployment
    pub cloud_configs: Vec<RawDocument>,
}

impl Deployment {
    /// Create a deployment with no bound cloud configs
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cloud_configs: Vec::new(),
        }
    }

    /// Set the bound cloud config documents
    pub fn with_cloud_configs(mut self, cloud_configs: Vec<RawDocument>) -> Self {
        self.cloud_configs = cloud_configs;
        self
    }
}
