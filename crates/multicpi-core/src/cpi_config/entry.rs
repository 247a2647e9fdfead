//! A single named CPI entry

use serde::Deserialize;
use serde_yaml::Mapping;

/// Raw `migrated_from` list element: `- name: old-name`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MigratedFrom {
    pub name: String,
}

/// A named CPI entry as declared in a `cpis:` document
///
/// `exec_path` may be omitted in the document, in which case it derives from
/// the CPI type: `/var/vcap/jobs/{type}_cpi/bin/cpi`.
#[derive(Debug, Clone, Deserialize)]
pub struct CpiEntry {
    /// Unique, non-empty entry name
    pub name: String,
    /// CPI type, e.g. "aws" or "vsphere"
    #[serde(rename = "type")]
    pub cpi_type: String,
    /// Explicit executable path, if any
    exec_path: Option<String>,
    /// Opaque configuration passed through to the backend
    #[serde(default)]
    pub properties: Mapping,
    /// Historical names this entry still answers to, in declaration order
    #[serde(default, rename = "migrated_from")]
    migrated_from: Vec<MigratedFrom>,
}

impl CpiEntry {
    /// Executable path of this CPI, derived from the type when not explicit
    pub fn exec_path(&self) -> String {
        match &self.exec_path {
            Some(path) => path.clone(),
            None => format!("/var/vcap/jobs/{}_cpi/bin/cpi", self.cpi_type),
        }
    }

    /// Historical alias names, in declaration order
    pub fn migrated_from_names(&self) -> Vec<String> {
        self.migrated_from.iter().map(|m| m.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exec_path_defaults_from_type() {
        let entry: CpiEntry = serde_yaml::from_str("{name: aws-east, type: aws}").unwrap();
        assert_eq!(entry.exec_path(), "/var/vcap/jobs/aws_cpi/bin/cpi");
    }

    #[test]
    fn test_explicit_exec_path_wins() {
        let entry: CpiEntry =
            serde_yaml::from_str("{name: aws-east, type: aws, exec_path: /opt/cpi}").unwrap();
        assert_eq!(entry.exec_path(), "/opt/cpi");
    }

    #[test]
    fn test_migrated_from_names_preserve_order() {
        let entry: CpiEntry = serde_yaml::from_str(
            "{name: n, type: t, migrated_from: [{name: some-cpi}, {name: another-cpi}]}",
        )
        .unwrap();
        assert_eq!(entry.migrated_from_names(), vec!["some-cpi", "another-cpi"]);
    }

    #[test]
    fn test_properties_default_empty() {
        let entry: CpiEntry = serde_yaml::from_str("{name: n, type: t}").unwrap();
        assert!(entry.properties.is_empty());
    }
}
