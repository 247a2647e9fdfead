//! Availability-zone descriptor construction
//!
//! Cloud config documents declare zones under `azs:`; the factory only needs
//! the zone name and its optional CPI reference. Manifest interpolation is a
//! host concern; hosts with an interpolation stack supply their own
//! [`ZoneResolver`] implementation.

mod manifest;
mod traits;

pub use manifest::CloudManifestZoneResolver;
pub use traits::{ZoneError, ZoneMap, ZoneResolver, ZoneResult};
