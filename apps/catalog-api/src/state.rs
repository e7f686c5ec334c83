//! Shared application state

use mongodb::{Client, Database};

use crate::config::Config;

/// Cloned into handlers that need the database outside the catalog service.
/// `Client` and `Database` are handles onto one shared connection pool.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub mongo_client: Client,
    pub db: Database,
}

impl AppState {
    pub fn new(config: Config, mongo_client: Client) -> Self {
        let db = mongo_client.database(config.mongodb.database());
        Self {
            config,
            mongo_client,
            db,
        }
    }
}
