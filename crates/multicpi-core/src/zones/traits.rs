//! Zone resolver trait

use std::collections::HashMap;

use crate::types::{AvailabilityZone, RawDocument};

/// Zone name to descriptor mapping
pub type ZoneMap = HashMap<String, AvailabilityZone>;

/// Errors that can occur while building zone descriptors
#[derive(Debug, thiserror::Error)]
pub enum ZoneError {
    #[error("Invalid cloud config: {0}")]
    InvalidFormat(#[from] serde_yaml::Error),
}

pub type ZoneResult<T> = Result<T, ZoneError>;

/// Builds zone descriptors from cloud config documents
///
/// `deployment_name` scopes deployment-specific interpolation in host
/// implementations. Returning `None` means no usable cloud configuration
/// exists and zone lookups are unavailable; the factory calls this only when
/// at least one cloud document exists.
pub trait ZoneResolver: Send + Sync {
    fn build_zones(
        &self,
        cloud_configs: &[RawDocument],
        deployment_name: Option<&str>,
    ) -> ZoneResult<Option<ZoneMap>>;
}
