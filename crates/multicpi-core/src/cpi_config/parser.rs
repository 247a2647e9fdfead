//! Multi-CPI document merging and parsing

use std::collections::HashSet;

use serde_yaml::{Mapping, Value};

use super::entry::CpiEntry;
use crate::types::RawDocument;

/// Errors that can occur while merging or parsing multi-CPI documents
#[derive(Debug, thiserror::Error)]
pub enum CpiConfigError {
    #[error("cpi-config document has no 'cpis' section")]
    MissingCpis,

    #[error("cpi-config entry has an empty name")]
    EmptyCpiName,

    #[error("Duplicate cpi name '{0}'")]
    DuplicateCpiName(String),

    #[error("Invalid cpi-config: {0}")]
    InvalidFormat(#[from] serde_yaml::Error),
}

pub type CpiConfigResult<T> = Result<T, CpiConfigError>;

/// Validated, ordered collection of CPI entries
///
/// Absence of a `ParsedCpiConfig` (an `Option::None` at the factory) means
/// legacy single-CPI mode.
#[derive(Debug, Clone)]
pub struct ParsedCpiConfig {
    cpis: Vec<CpiEntry>,
}

impl ParsedCpiConfig {
    /// All entries, in parse order
    pub fn cpis(&self) -> &[CpiEntry] {
        &self.cpis
    }

    /// Entry names, in parse order
    pub fn names(&self) -> Vec<String> {
        self.cpis.iter().map(|cpi| cpi.name.clone()).collect()
    }

    /// Find an entry by exact name
    pub fn find_by_name(&self, name: &str) -> Option<&CpiEntry> {
        self.cpis.iter().find(|cpi| cpi.name == name)
    }
}

/// Merges and parses raw `cpis:` documents
///
/// `merge_configs` concatenates the `cpis` arrays of all documents in
/// document order; `parse` then validates the merged document. Overlapping
/// names across documents are an error, never silently shadowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpiManifestParser;

impl CpiManifestParser {
    pub fn new() -> Self {
        Self
    }

    /// Merge raw documents into a single `cpis:` document
    pub fn merge_configs(&self, documents: &[RawDocument]) -> CpiConfigResult<RawDocument> {
        let mut merged = Vec::new();
        for document in documents {
            let cpis = document
                .get("cpis")
                .and_then(Value::as_sequence)
                .ok_or(CpiConfigError::MissingCpis)?;
            merged.extend(cpis.iter().cloned());
        }

        let mut root = Mapping::new();
        root.insert(Value::from("cpis"), Value::Sequence(merged));
        Ok(Value::Mapping(root))
    }

    /// Parse a merged document into a validated config
    pub fn parse(&self, document: RawDocument) -> CpiConfigResult<ParsedCpiConfig> {
        if document.get("cpis").and_then(Value::as_sequence).is_none() {
            return Err(CpiConfigError::MissingCpis);
        }

        #[derive(serde::Deserialize)]
        struct CpiConfigFile {
            cpis: Vec<CpiEntry>,
        }

        let file: CpiConfigFile = serde_yaml::from_value(document)?;

        let mut seen = HashSet::new();
        for cpi in &file.cpis {
            if cpi.name.is_empty() {
                return Err(CpiConfigError::EmptyCpiName);
            }
            if !seen.insert(cpi.name.clone()) {
                return Err(CpiConfigError::DuplicateCpiName(cpi.name.clone()));
            }
        }

        Ok(ParsedCpiConfig { cpis: file.cpis })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> RawDocument {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_merge_concatenates_in_document_order() {
        let parser = CpiManifestParser::new();
        let merged = parser
            .merge_configs(&[
                doc("cpis: [{name: a, type: t}]"),
                doc("cpis: [{name: b, type: t}, {name: c, type: t}]"),
            ])
            .unwrap();

        let parsed = parser.parse(merged).unwrap();
        assert_eq!(parsed.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_merge_rejects_document_without_cpis() {
        let parser = CpiManifestParser::new();
        let result = parser.merge_configs(&[doc("azs: []")]);
        assert!(matches!(result, Err(CpiConfigError::MissingCpis)));
    }

    #[test]
    fn test_parse_rejects_duplicate_names() {
        let parser = CpiManifestParser::new();
        let merged = parser
            .merge_configs(&[
                doc("cpis: [{name: dup, type: t1}]"),
                doc("cpis: [{name: dup, type: t2}]"),
            ])
            .unwrap();

        match parser.parse(merged) {
            Err(CpiConfigError::DuplicateCpiName(name)) => assert_eq!(name, "dup"),
            other => panic!("expected duplicate name error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        let parser = CpiManifestParser::new();
        let result = parser.parse(doc("cpis: [{name: '', type: t}]"));
        assert!(matches!(result, Err(CpiConfigError::EmptyCpiName)));
    }

    #[test]
    fn test_parse_keeps_entry_details() {
        let parser = CpiManifestParser::new();
        let parsed = parser
            .parse(doc(
                "cpis: [{name: aws-east, type: aws, properties: {region: us-east-1}, migrated_from: [{name: old-east}]}]",
            ))
            .unwrap();

        let entry = parsed.find_by_name("aws-east").unwrap();
        assert_eq!(entry.cpi_type, "aws");
        assert_eq!(entry.exec_path(), "/var/vcap/jobs/aws_cpi/bin/cpi");
        assert_eq!(entry.properties["region"], "us-east-1");
        assert_eq!(entry.migrated_from_names(), vec!["old-east"]);
        assert!(parsed.find_by_name("aws-west").is_none());
    }
}
