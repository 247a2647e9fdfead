//! MultiCPI Core
//!
//! Runtime-agnostic multi-CPI cloud resolution.
//! This crate decides, at deployment-planning time, which cloud-provider
//! backend (CPI) serves a given availability zone or explicit CPI name,
//! reconciling the legacy single-CPI director configuration with an optional
//! multi-CPI configuration document.
//!
//! ## Resolution
//!
//! The `resolver` module provides the [`CloudFactory`], built once per
//! planning operation and immutable afterwards:
//!
//! ```rust,ignore
//! use multicpi_core::{CloudFactory, ConfigKind};
//!
//! let factory = CloudFactory::with_latest_configs(
//!     Some(&deployment), &store, &zones, director, cpi_factory, logger,
//! )?;
//!
//! // Which CPI serves this AZ?
//! let cloud = factory.get_for_az("z1")?;
//! ```

pub mod types;
pub mod logging;
pub mod config;
pub mod cpi_config;
pub mod zones;
pub mod cpis;
pub mod resolver;

// Re-export commonly used types
pub use types::{
    AvailabilityZone, ConfigKind, Deployment, DirectorConfig, RawDocument,
};

pub use logging::{Logger, NoOpLogger, ConsoleLogger};

pub use config::{ConfigStore, FileConfigStore, MemoryConfigStore};

pub use cpi_config::{
    CpiConfigError, CpiConfigResult, CpiEntry, CpiManifestParser, ParsedCpiConfig,
};

pub use zones::{CloudManifestZoneResolver, ZoneError, ZoneMap, ZoneResolver};

pub use cpis::{CpiError, CpiFactory, CpiResult, ExternalCpi, ExternalCpiFactory, MockCpiFactory};

pub use resolver::{CloudFactory, CloudFactoryError, CloudFactoryResult};
