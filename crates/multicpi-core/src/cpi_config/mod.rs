//! Multi-CPI configuration model
//!
//! Turns raw `cpis:` documents into a validated, ordered collection of named
//! CPI entries. Multiple documents are merged before parsing; an empty
//! document set parses to "no multi-CPI config", i.e. legacy mode.

mod entry;
mod parser;

pub use entry::CpiEntry;
pub use parser::{CpiConfigError, CpiConfigResult, CpiManifestParser, ParsedCpiConfig};
