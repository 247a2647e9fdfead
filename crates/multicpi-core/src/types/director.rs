//! Ambient director configuration

/// Director-level configuration the factory needs to build the legacy
/// default backend handle.
///
/// Passed explicitly at construction; the factory never reads global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorConfig {
    /// Director instance id, stamped into every constructed handle
    pub uuid: String,
    /// Executable path of the legacy default CPI
    pub default_cpi_path: String,
}

impl DirectorConfig {
    /// Create a new director configuration
    pub fn new(uuid: impl Into<String>, default_cpi_path: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            default_cpi_path: default_cpi_path.into(),
        }
    }
}
