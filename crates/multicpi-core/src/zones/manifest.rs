//! Zone resolver over plain cloud config documents

use std::sync::Arc;

use serde_yaml::Value;

use super::traits::{ZoneMap, ZoneResolver, ZoneResult};
use crate::log_debug;
use crate::logging::{Logger, NoOpLogger};
use crate::types::{AvailabilityZone, RawDocument};

/// Builds zone descriptors straight from `azs:` sections
///
/// Documents are applied in order and a later declaration of the same zone
/// name overrides an earlier one. Contentless documents (null or `{}`) don't
/// count as cloud configuration: when no document has content, the zone
/// mapping is absent rather than empty. The deployment-name hint is accepted
/// for contract parity with interpolating hosts and only logged here.
pub struct CloudManifestZoneResolver {
    logger: Arc<dyn Logger>,
}

impl Default for CloudManifestZoneResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CloudManifestZoneResolver {
    pub fn new() -> Self {
        Self {
            logger: Arc::new(NoOpLogger),
        }
    }

    pub fn with_logger(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

impl ZoneResolver for CloudManifestZoneResolver {
    fn build_zones(
        &self,
        cloud_configs: &[RawDocument],
        deployment_name: Option<&str>,
    ) -> ZoneResult<Option<ZoneMap>> {
        if !cloud_configs.iter().any(has_content) {
            return Ok(None);
        }

        if let Some(name) = deployment_name {
            log_debug!(self.logger, "building zones scoped to deployment '{}'", name);
        }

        let mut zones = ZoneMap::new();
        for document in cloud_configs {
            // A cloud config without an `azs:` section contributes no zones
            let Some(azs) = document.get("azs") else {
                continue;
            };
            let parsed: Vec<AvailabilityZone> = serde_yaml::from_value(azs.clone())?;
            for zone in parsed {
                zones.insert(zone.name.clone(), zone);
            }
        }

        Ok(Some(zones))
    }
}

fn has_content(document: &RawDocument) -> bool {
    match document {
        Value::Null => false,
        Value::Mapping(mapping) => !mapping.is_empty(),
        _ => true,
    }
}
