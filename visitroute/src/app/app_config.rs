use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use visitroute_core::{
    catalog::{CatalogConfig, RouteCatalog},
    link::MapsLinkConfig,
};

use super::AppError;

/// roster and route plans used when no configuration file is provided.
pub const DEFAULT_CONFIGURATION: &str = include_str!("visitroute-default.toml");

/// environment overrides, e.g. VISITROUTE_LINK__TRAVEL_MODE=walking
const ENV_PREFIX: &str = "VISITROUTE";

/// static configuration for the application, loaded once at startup.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct VisitRouteConfig {
    #[serde(default)]
    pub link: MapsLinkConfig,
    /// `staff` and `route_plans` at the top level of the file
    #[serde(flatten)]
    pub catalog: CatalogConfig,
}

impl VisitRouteConfig {
    /// reads the configuration file if provided, otherwise the embedded
    /// default configuration. environment overrides apply in both cases.
    pub fn load(configuration_file: Option<&str>) -> Result<VisitRouteConfig, AppError> {
        load_with_environment(configuration_file.map(Path::new), environment())
    }

    pub fn build_catalog(&self) -> Result<RouteCatalog, AppError> {
        let catalog = RouteCatalog::try_from(&self.catalog)?;
        Ok(catalog)
    }
}

impl TryFrom<&Path> for VisitRouteConfig {
    type Error = AppError;

    fn try_from(filepath: &Path) -> Result<Self, Self::Error> {
        load_with_environment(Some(filepath), environment())
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

fn load_with_environment(
    configuration_file: Option<&Path>,
    environment: Environment,
) -> Result<VisitRouteConfig, AppError> {
    let (builder, source_name) = match configuration_file {
        Some(filepath) => {
            log::info!("reading configuration from {}", filepath.display());
            let builder = Config::builder().add_source(File::from(filepath));
            (builder, filepath.display().to_string())
        }
        None => {
            log::info!("using embedded default configuration");
            let default_file = File::from_str(DEFAULT_CONFIGURATION, FileFormat::Toml);
            let builder = Config::builder().add_source(default_file);
            (builder, String::from("<default>"))
        }
    };
    let config = builder.add_source(environment).build().map_err(|e| {
        let msg = format!("file '{source_name}' produced error: {e}");
        AppError::Configuration(msg)
    })?;
    config.try_deserialize::<VisitRouteConfig>().map_err(|e| {
        let msg = format!("error reading configuration from '{source_name}': {e}");
        AppError::Configuration(msg)
    })
}
