//! MongoDB connection management
//!
//! Configuration, connect-with-retry and health probes. Collections and
//! documents belong to the domain crates.

mod config;
mod connector;
mod health;

pub use config::MongoConfig;
pub use connector::{client_options, connect_from_config, connect_from_config_with_retry};
pub use health::{HealthStatus, check_health, check_health_detailed, ping};

pub use mongodb::{Client, Collection, Database};
