//! CPI factory trait

use serde_yaml::Mapping;

use super::error::CpiResult;
use super::external::ExternalCpi;

/// Constructs CPI backend handles
///
/// Implementations:
/// - `ExternalCpiFactory`: Plain handle construction
/// - `MockCpiFactory`: Records constructions for testing
///
/// Every call yields a fresh, independent handle; factories never cache.
pub trait CpiFactory: Send + Sync {
    /// Construct a handle for the CPI at `exec_path`
    ///
    /// `properties` is `None` for the legacy default CPI, which carries no
    /// per-backend configuration.
    fn create(
        &self,
        exec_path: &str,
        director_uuid: &str,
        properties: Option<&Mapping>,
    ) -> CpiResult<ExternalCpi>;
}
