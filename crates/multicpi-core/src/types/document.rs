//! Raw configuration documents

/// A raw, unvalidated configuration document as stored by the director.
///
/// Documents are YAML end to end; parsing into typed models happens in
/// `cpi_config` and `zones`.
pub type RawDocument = serde_yaml::Value;

/// Kind of a versioned configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKind {
    /// Multi-CPI configuration (`cpis:` documents)
    Cpi,
    /// Cloud configuration (`azs:` documents, among other sections)
    Cloud,
}

impl ConfigKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKind::Cpi => "cpi",
            ConfigKind::Cloud => "cloud",
        }
    }
}

impl std::fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
