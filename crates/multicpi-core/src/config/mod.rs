//! Versioned configuration document store
//!
//! The director keeps versioned `cpi` and `cloud` config documents; the
//! factory only ever asks for the latest set of a given kind. Implementations:
//! - `MemoryConfigStore`: In-memory for testing
//! - `FileConfigStore`: One YAML document per file on disk
//! - Host adapters: database-backed stores in the embedding director

mod file;
mod memory;
mod traits;

pub use file::FileConfigStore;
pub use memory::MemoryConfigStore;
pub use traits::ConfigStore;
