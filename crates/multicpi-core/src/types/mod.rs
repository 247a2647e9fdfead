//! Core types for CPI resolution
//!
//! This module contains the shared value types used across the crate.

mod deployment;
mod director;
mod document;
mod zone;

pub use deployment::Deployment;
pub use director::DirectorConfig;
pub use document::{ConfigKind, RawDocument};
pub use zone::AvailabilityZone;
