//! External CPI handle

use serde_yaml::Mapping;

use super::error::{CpiError, CpiResult};
use super::traits::CpiFactory;

/// Handle to an external CPI executable
///
/// Carries everything a request to the backend needs: the executable path,
/// the director uuid stamped into every request, and the backend properties
/// from the cpi-config entry (absent for the legacy default CPI).
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalCpi {
    exec_path: String,
    director_uuid: String,
    properties: Option<Mapping>,
}

impl ExternalCpi {
    /// Create a new handle
    pub fn new(
        exec_path: impl Into<String>,
        director_uuid: impl Into<String>,
        properties: Option<Mapping>,
    ) -> Self {
        Self {
            exec_path: exec_path.into(),
            director_uuid: director_uuid.into(),
            properties,
        }
    }

    /// Executable path of the backend
    pub fn exec_path(&self) -> &str {
        &self.exec_path
    }

    /// Director uuid this handle was constructed for
    pub fn director_uuid(&self) -> &str {
        &self.director_uuid
    }

    /// Backend properties, absent for the legacy default CPI
    pub fn properties(&self) -> Option<&Mapping> {
        self.properties.as_ref()
    }
}

/// The real factory: constructs handles as-is
///
/// Rejects an empty executable path; anything beyond that (the executable
/// existing, being runnable) is validated by the host when it first invokes
/// the backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalCpiFactory;

impl ExternalCpiFactory {
    pub fn new() -> Self {
        Self
    }
}

impl CpiFactory for ExternalCpiFactory {
    fn create(
        &self,
        exec_path: &str,
        director_uuid: &str,
        properties: Option<&Mapping>,
    ) -> CpiResult<ExternalCpi> {
        if exec_path.is_empty() {
            return Err(CpiError::construction(exec_path, "executable path is empty"));
        }
        Ok(ExternalCpi::new(exec_path, director_uuid, properties.cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructs_handle_with_properties() {
        let factory = ExternalCpiFactory::new();
        let props: Mapping = serde_yaml::from_str("{region: us-east-1}").unwrap();

        let cpi = factory
            .create("/var/vcap/jobs/aws_cpi/bin/cpi", "director-uuid", Some(&props))
            .unwrap();

        assert_eq!(cpi.exec_path(), "/var/vcap/jobs/aws_cpi/bin/cpi");
        assert_eq!(cpi.director_uuid(), "director-uuid");
        assert_eq!(cpi.properties(), Some(&props));
    }

    #[test]
    fn test_rejects_empty_exec_path() {
        let factory = ExternalCpiFactory::new();
        let result = factory.create("", "director-uuid", None);
        assert!(matches!(result, Err(CpiError::Construction { .. })));
    }
}
