//! CPI resolution
//!
//! The [`CloudFactory`] looks up and constructs cloud backends, taken either
//! from the director's legacy configuration or from the multi-CPI config.

mod cloud_factory;

pub use cloud_factory::{CloudFactory, CloudFactoryError, CloudFactoryResult};
