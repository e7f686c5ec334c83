#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_parse_or, env_required_any};
use std::time::Duration;

/// MongoDB connection settings
///
/// Built by hand for tests and tools, or loaded from the environment with
/// the `config` feature.
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "catalog")
///     .with_app_name("catalog_api");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MongoConfig {
    /// Connection string, `mongodb://[user:pass@]host[:port][/db][?options]`
    pub url: String,
    pub database: String,
    /// Reported to the server in connection handshakes
    pub app_name: Option<String>,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout: Duration,
    pub server_selection_timeout: Duration,
}

impl MongoConfig {
    pub const DEFAULT_URL: &'static str = "mongodb://localhost:27017";
    pub const DEFAULT_DATABASE: &'static str = "catalog";
    pub const DEFAULT_MAX_POOL_SIZE: u32 = 100;
    pub const DEFAULT_MIN_POOL_SIZE: u32 = 5;
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const DEFAULT_SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(30);

    /// Settings for `url` against the default database
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_database(url, Self::DEFAULT_DATABASE)
    }

    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            app_name: None,
            max_pool_size: Self::DEFAULT_MAX_POOL_SIZE,
            min_pool_size: Self::DEFAULT_MIN_POOL_SIZE,
            connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
            server_selection_timeout: Self::DEFAULT_SERVER_SELECTION_TIMEOUT,
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_URL)
    }
}

/// Environment variables:
/// - `MONGODB_URL` or `MONGO_URL` (required)
/// - `MONGODB_DATABASE` or `MONGO_DATABASE` (required)
/// - `MONGODB_APP_NAME`
/// - `MONGODB_MAX_POOL_SIZE` (default 100)
/// - `MONGODB_MIN_POOL_SIZE` (default 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (default 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default 30)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_required_any(&["MONGODB_URL", "MONGO_URL"])?;
        let database = env_required_any(&["MONGODB_DATABASE", "MONGO_DATABASE"])?;

        let connect_timeout_secs = env_parse_or(
            "MONGODB_CONNECT_TIMEOUT_SECS",
            Self::DEFAULT_CONNECT_TIMEOUT.as_secs(),
        )?;
        let server_selection_timeout_secs = env_parse_or(
            "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
            Self::DEFAULT_SERVER_SELECTION_TIMEOUT.as_secs(),
        )?;

        Ok(Self {
            url,
            database,
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: env_parse_or("MONGODB_MAX_POOL_SIZE", Self::DEFAULT_MAX_POOL_SIZE)?,
            min_pool_size: env_parse_or("MONGODB_MIN_POOL_SIZE", Self::DEFAULT_MIN_POOL_SIZE)?,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            server_selection_timeout: Duration::from_secs(server_selection_timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mongo_config_new_uses_defaults() {
        let config = MongoConfig::new("mongodb://db:27017");
        assert_eq!(config.url(), "mongodb://db:27017");
        assert_eq!(config.database(), "catalog");
        assert_eq!(config.max_pool_size, 100);
        assert_eq!(config.min_pool_size, 5);
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.app_name.is_none());
    }

    #[test]
    fn test_mongo_config_builders() {
        let config = MongoConfig::with_database("mongodb://db:27017", "shop")
            .with_app_name("catalog_api")
            .with_server_selection_timeout(Duration::from_secs(2));

        assert_eq!(config.database(), "shop");
        assert_eq!(config.app_name.as_deref(), Some("catalog_api"));
        assert_eq!(config.server_selection_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_mongo_config_default() {
        assert_eq!(MongoConfig::default().url(), "mongodb://localhost:27017");
    }

    #[cfg(feature = "config")]
    mod from_env {
        use super::*;

        const ALL_KEYS: [&str; 9] = [
            "MONGODB_URL",
            "MONGO_URL",
            "MONGODB_DATABASE",
            "MONGO_DATABASE",
            "MONGODB_APP_NAME",
            "MONGODB_MAX_POOL_SIZE",
            "MONGODB_MIN_POOL_SIZE",
            "MONGODB_CONNECT_TIMEOUT_SECS",
            "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
        ];

        #[test]
        fn test_from_env_primary_keys() {
            temp_env::with_vars_unset(ALL_KEYS, || {
                temp_env::with_vars(
                    [
                        ("MONGODB_URL", Some("mongodb://primary:27017")),
                        ("MONGODB_DATABASE", Some("catalog")),
                        ("MONGODB_MAX_POOL_SIZE", Some("20")),
                        ("MONGODB_CONNECT_TIMEOUT_SECS", Some("3")),
                    ],
                    || {
                        let config = MongoConfig::from_env().unwrap();
                        assert_eq!(config.url, "mongodb://primary:27017");
                        assert_eq!(config.database, "catalog");
                        assert_eq!(config.max_pool_size, 20);
                        assert_eq!(config.min_pool_size, 5);
                        assert_eq!(config.connect_timeout, Duration::from_secs(3));
                    },
                );
            });
        }

        #[test]
        fn test_from_env_fallback_keys() {
            temp_env::with_vars_unset(ALL_KEYS, || {
                temp_env::with_vars(
                    [
                        ("MONGO_URL", Some("mongodb://fallback:27017")),
                        ("MONGO_DATABASE", Some("fallbackdb")),
                    ],
                    || {
                        let config = MongoConfig::from_env().unwrap();
                        assert_eq!(config.url, "mongodb://fallback:27017");
                        assert_eq!(config.database, "fallbackdb");
                    },
                );
            });
        }

        #[test]
        fn test_from_env_missing_url() {
            temp_env::with_vars_unset(ALL_KEYS, || {
                temp_env::with_var("MONGODB_DATABASE", Some("catalog"), || {
                    let err = MongoConfig::from_env().unwrap_err();
                    assert!(err.to_string().contains("MONGODB_URL or MONGO_URL"));
                });
            });
        }

        #[test]
        fn test_from_env_bad_pool_size() {
            temp_env::with_vars_unset(ALL_KEYS, || {
                temp_env::with_vars(
                    [
                        ("MONGODB_URL", Some("mongodb://primary:27017")),
                        ("MONGODB_DATABASE", Some("catalog")),
                        ("MONGODB_MAX_POOL_SIZE", Some("lots")),
                    ],
                    || {
                        let err = MongoConfig::from_env().unwrap_err();
                        assert!(matches!(err, ConfigError::ParseError { ref key, .. } if key == "MONGODB_MAX_POOL_SIZE"));
                    },
                );
            });
        }
    }
}
