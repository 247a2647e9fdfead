//! Availability zone descriptor

use serde::{Deserialize, Serialize};

/// An availability zone as declared in a cloud config document
///
/// A zone may pin its resources to a named CPI; a zone without a `cpi`
/// reference uses the director's legacy default backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityZone {
    /// Zone name
    pub name: String,
    /// Name of the CPI serving this zone, if pinned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpi: Option<String>,
}

impl AvailabilityZone {
    /// Create a zone that uses the legacy default CPI
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cpi: None,
        }
    }

    /// Pin this zone to a named CPI
    pub fn with_cpi(mut self, cpi: impl Into<String>) -> Self {
        self.cpi = Some(cpi.into());
        self
    }

    /// The name of the CPI serving this zone, empty for the legacy default
    pub fn cpi_name(&self) -> &str {
        self.cpi.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpi_name_defaults_to_empty() {
        let zone = AvailabilityZone::new("z1");
        assert_eq!(zone.cpi_name(), "");

        let pinned = AvailabilityZone::new("z2").with_cpi("aws-east");
        assert_eq!(pinned.cpi_name(), "aws-east");
    }
}
