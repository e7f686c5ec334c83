use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_or_default, env_parse_or, server::ServerConfig};
use database::mongodb::MongoConfig;
use domain_catalog::mongo::DEFAULT_COLLECTION;

pub use core_config::Environment;

/// Catalog-specific settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Collection holding product documents
    pub collection: String,
    /// Load the starter products when the collection is empty
    pub seed: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION.to_string(),
            seed: true,
        }
    }
}

impl FromEnv for CatalogConfig {
    /// - CATALOG_COLLECTION: defaults to "products"
    /// - CATALOG_SEED: defaults to true
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            collection: env_or_default("CATALOG_COLLECTION", DEFAULT_COLLECTION),
            seed: env_parse_or("CATALOG_SEED", true)?,
        })
    }
}

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub mongodb: MongoConfig,
    pub catalog: CatalogConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let app = app_info!();
        let mongodb = MongoConfig::from_env()?;

        Ok(Self {
            app,
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            mongodb: MongoConfig {
                app_name: mongodb.app_name.or_else(|| Some(app.name.to_string())),
                ..mongodb
            },
            catalog: CatalogConfig::from_env()?,
        })
    }
}
