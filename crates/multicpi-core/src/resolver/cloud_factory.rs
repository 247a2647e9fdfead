//! Cloud factory: resolves which CPI serves an AZ or an explicit name
//!
//! Built once per deployment-planning operation from two optional inputs, a
//! zone mapping and a parsed multi-CPI config, and immutable afterwards.
//! Every operation is a pure function of that state; handles come out fresh
//! on every call.

use std::sync::Arc;

use crate::config::ConfigStore;
use crate::cpi_config::{CpiConfigError, CpiEntry, CpiManifestParser, ParsedCpiConfig};
use crate::cpis::{CpiError, CpiFactory, ExternalCpi};
use crate::log_debug;
use crate::logging::Logger;
use crate::types::{ConfigKind, Deployment, DirectorConfig, RawDocument};
use crate::zones::{ZoneError, ZoneMap, ZoneResolver};

/// Errors surfaced by CPI resolution
///
/// Callers match on the variant; the Display strings are stable because the
/// zone wrap embeds the underlying message verbatim.
#[derive(Debug, thiserror::Error)]
pub enum CloudFactoryError {
    /// Named lookup attempted while only legacy mode is configured
    #[error("CPI '{0}' not found in cpi-config (because cpi-config is not set)")]
    CpiConfigMissing(String),

    /// Requested name not among the configured CPI entries
    #[error("CPI '{0}' not found in cpi-config")]
    CpiNotFound(String),

    /// Zone lookup attempted on a factory built without any zone mapping
    #[error("AZs must be given to lookup cpis from AZ")]
    AzsNotConfigured,

    /// Requested zone absent from the zone mapping
    #[error("AZ '{0}' not found in cloud config")]
    AzNotFound(String),

    /// Failure while resolving a zone's CPI, carrying both zone and cause
    #[error("Failed to load CPI for AZ '{zone}': {source}")]
    ForZone {
        zone: String,
        #[source]
        source: Box<CloudFactoryError>,
    },

    /// Multi-CPI document merge/parse failure, passed through unmodified
    #[error(transparent)]
    Config(#[from] CpiConfigError),

    /// Zone descriptor construction failure, passed through unmodified
    #[error(transparent)]
    Zones(#[from] ZoneError),

    /// Handle construction failure, passed through unmodified
    #[error(transparent)]
    Cpi(#[from] CpiError),
}

pub type CloudFactoryResult<T> = Result<T, CloudFactoryError>;

/// Looks up and constructs cloud backends
///
/// Resolution precedence: an explicit CPI name wins; a zone's `cpi` reference
/// comes next; everything else falls back to the director's legacy default
/// backend. Stateless after construction, so shared references may be used
/// from multiple threads without coordination.
pub struct CloudFactory {
    azs: Option<ZoneMap>,
    parsed_cpi_config: Option<ParsedCpiConfig>,
    director: DirectorConfig,
    cpi_factory: Arc<dyn CpiFactory>,
    logger: Arc<dyn Logger>,
}

impl CloudFactory {
    /// Create a factory from already-resolved inputs
    ///
    /// `azs == None` means zone lookups are unavailable (distinct from an
    /// empty mapping); `parsed_cpi_config == None` means legacy mode.
    pub fn new(
        azs: Option<ZoneMap>,
        parsed_cpi_config: Option<ParsedCpiConfig>,
        director: DirectorConfig,
        cpi_factory: Arc<dyn CpiFactory>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            azs,
            parsed_cpi_config,
            director,
            cpi_factory,
            logger,
        }
    }

    /// Create a factory from the latest versioned config documents
    ///
    /// Zone construction is scoped to the deployment's name when one is
    /// given, matching how cloud configs interpolate per deployment.
    pub fn with_latest_configs(
        deployment: Option<&Deployment>,
        store: &dyn ConfigStore,
        zone_resolver: &dyn ZoneResolver,
        director: DirectorConfig,
        cpi_factory: Arc<dyn CpiFactory>,
        logger: Arc<dyn Logger>,
    ) -> CloudFactoryResult<Self> {
        let cpi_configs = store.latest_set(ConfigKind::Cpi);
        let cloud_configs = store.latest_set(ConfigKind::Cloud);

        let azs = Self::create_azs(
            &cloud_configs,
            deployment.map(|d| d.name.as_str()),
            zone_resolver,
        )?;
        let parsed_cpi_config = Self::parse_cpi_configs(&cpi_configs)?;

        Ok(Self::new(azs, parsed_cpi_config, director, cpi_factory, logger))
    }

    /// Create a factory from a deployment's bound cloud configs
    ///
    /// `cpi_configs` defaults to the store's latest set when `None`. Without
    /// a deployment there is nothing to scope zones to, so zone lookups are
    /// unavailable.
    pub fn from_deployment(
        deployment: Option<&Deployment>,
        cpi_configs: Option<Vec<RawDocument>>,
        store: &dyn ConfigStore,
        zone_resolver: &dyn ZoneResolver,
        director: DirectorConfig,
        cpi_factory: Arc<dyn CpiFactory>,
        logger: Arc<dyn Logger>,
    ) -> CloudFactoryResult<Self> {
        let cpi_configs = cpi_configs.unwrap_or_else(|| store.latest_set(ConfigKind::Cpi));

        let azs = match deployment {
            Some(deployment) => Self::create_azs(
                &deployment.cloud_configs,
                Some(deployment.name.as_str()),
                zone_resolver,
            )?,
            None => None,
        };
        let parsed_cpi_config = Self::parse_cpi_configs(&cpi_configs)?;

        Ok(Self::new(azs, parsed_cpi_config, director, cpi_factory, logger))
    }

    /// Merge and parse raw `cpis:` documents; an empty set means legacy mode
    pub fn parse_cpi_configs(
        documents: &[RawDocument],
    ) -> Result<Option<ParsedCpiConfig>, CpiConfigError> {
        if documents.is_empty() {
            return Ok(None);
        }

        let parser = CpiManifestParser::new();
        let merged = parser.merge_configs(documents)?;
        Ok(Some(parser.parse(merged)?))
    }

    fn create_azs(
        cloud_configs: &[RawDocument],
        deployment_name: Option<&str>,
        zone_resolver: &dyn ZoneResolver,
    ) -> Result<Option<ZoneMap>, ZoneError> {
        if cloud_configs.is_empty() {
            return Ok(None);
        }
        zone_resolver.build_zones(cloud_configs, deployment_name)
    }

    /// Whether a multi-CPI config is in effect
    pub fn uses_cpi_config(&self) -> bool {
        self.parsed_cpi_config.is_some()
    }

    /// All known CPI names in parse order; `[""]` in legacy mode
    pub fn all_names(&self) -> Vec<String> {
        match &self.parsed_cpi_config {
            None => vec![String::new()],
            Some(config) => config.names(),
        }
    }

    /// The names an entry answers to: its own name first, then its
    /// migrated-from aliases. `[""]` in legacy mode regardless of input.
    pub fn cpi_aliases(&self, cpi_name: &str) -> CloudFactoryResult<Vec<String>> {
        if !self.uses_cpi_config() {
            return Ok(vec![String::new()]);
        }

        let entry = self.get_cpi_config(cpi_name)?;
        let mut aliases = vec![cpi_name.to_string()];
        aliases.extend(entry.migrated_from_names());
        Ok(aliases)
    }

    /// Construct the legacy default backend handle; fresh on every call
    pub fn get_default_cloud(&self) -> CloudFactoryResult<ExternalCpi> {
        let cpi = self
            .cpi_factory
            .create(&self.director.default_cpi_path, &self.director.uuid, None)?;
        Ok(cpi)
    }

    /// Construct a backend handle for the named CPI
    ///
    /// An empty name resolves to the legacy default backend.
    pub fn get(&self, cpi_name: &str) -> CloudFactoryResult<ExternalCpi> {
        if cpi_name.is_empty() {
            return self.get_default_cloud();
        }

        let entry = self.get_cpi_config(cpi_name)?;
        let cpi = self.cpi_factory.create(
            &entry.exec_path(),
            &self.director.uuid,
            Some(&entry.properties),
        )?;
        Ok(cpi)
    }

    /// Construct a backend handle for the named zone's CPI
    pub fn get_for_az(&self, az_name: &str) -> CloudFactoryResult<ExternalCpi> {
        let cpi_name = self.name_for_az(az_name)?;
        log_debug!(self.logger, "AZ '{}' resolved to CPI '{}'", az_name, cpi_name);

        self.get(&cpi_name).map_err(|err| CloudFactoryError::ForZone {
            zone: az_name.to_string(),
            source: Box::new(err),
        })
    }

    /// The CPI name serving a zone; empty for the legacy default
    pub fn name_for_az(&self, az_name: &str) -> CloudFactoryResult<String> {
        if az_name.is_empty() {
            return Ok(String::new());
        }

        let azs = self
            .azs
            .as_ref()
            .ok_or(CloudFactoryError::AzsNotConfigured)?;
        let az = azs
            .get(az_name)
            .ok_or_else(|| CloudFactoryError::AzNotFound(az_name.to_string()))?;

        Ok(az.cpi_name().to_string())
    }

    fn get_cpi_config(&self, cpi_name: &str) -> CloudFactoryResult<&CpiEntry> {
        let config = self
            .parsed_cpi_config
            .as_ref()
            .ok_or_else(|| CloudFactoryError::CpiConfigMissing(cpi_name.to_string()))?;

        config
            .find_by_name(cpi_name)
            .ok_or_else(|| CloudFactoryError::CpiNotFound(cpi_name.to_string()))
    }
}
