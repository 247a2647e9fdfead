//! Mock CPI factory for testing
//!
//! Records every construction so tests can assert which backends were built,
//! how often, and with what arguments, without touching any executable.

use std::sync::Mutex;

use serde_yaml::Mapping;

use super::error::{CpiError, CpiResult};
use super::external::ExternalCpi;
use super::traits::CpiFactory;

/// One recorded handle construction
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedConstruction {
    pub exec_path: String,
    pub director_uuid: String,
    pub properties: Option<Mapping>,
}

/// Mock CPI factory
///
/// Constructs real [`ExternalCpi`] values while recording each call.
/// Can be configured to fail every construction.
#[derive(Debug, Default)]
pub struct MockCpiFactory {
    constructions: Mutex<Vec<RecordedConstruction>>,
    fail_with: Mutex<Option<String>>,
}

impl MockCpiFactory {
    /// Create a mock factory that succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent construction fail with the given message
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.fail_with.lock().unwrap() = Some(message.into());
    }

    /// Number of constructions performed
    pub fn construction_count(&self) -> usize {
        self.constructions.lock().unwrap().len()
    }

    /// All recorded constructions, in call order
    pub fn constructions(&self) -> Vec<RecordedConstruction> {
        self.constructions.lock().unwrap().clone()
    }
}

impl CpiFactory for MockCpiFactory {
    fn create(
        &self,
        exec_path: &str,
        director_uuid: &str,
        properties: Option<&Mapping>,
    ) -> CpiResult<ExternalCpi> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(CpiError::construction(exec_path, message));
        }

        self.constructions.lock().unwrap().push(RecordedConstruction {
            exec_path: exec_path.to_string(),
            director_uuid: director_uuid.to_string(),
            properties: properties.cloned(),
        });

        Ok(ExternalCpi::new(exec_path, director_uuid, properties.cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_constructions_in_order() {
        let factory = MockCpiFactory::new();
        factory.create("/cpi/a", "uuid", None).unwrap();
        factory.create("/cpi/b", "uuid", None).unwrap();

        let recorded = factory.constructions();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].exec_path, "/cpi/a");
        assert_eq!(recorded[1].exec_path, "/cpi/b");
    }

    #[test]
    fn test_fail_mode() {
        let factory = MockCpiFactory::new();
        factory.fail_with("boom");

        let result = factory.create("/cpi/a", "uuid", None);
        assert!(matches!(result, Err(CpiError::Construction { .. })));
        assert_eq!(factory.construction_count(), 0);
    }
}
