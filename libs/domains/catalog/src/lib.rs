//! Catalog Domain
//!
//! Product catalog backed by a pluggable repository.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, built from the routing table in `routes`
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Id checks, validation, not-found reporting
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait with MongoDB and in-memory implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, ProductId
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{handlers, mongo::MongoProductRepository, service::CatalogService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("CatalogDb");
//!
//! let repository = MongoProductRepository::new(&db);
//! let service = CatalogService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod diagnostics;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongo;
pub mod repository;
pub mod routes;
pub mod seed;
pub mod service;

pub use diagnostics::{CatalogDiagnostics, RecordingDiagnostics, TracingDiagnostics};
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryProductRepository;
pub use models::{LookupKind, Product, ProductId, PRODUCT_ID_LEN};
pub use mongo::MongoProductRepository;
pub use repository::ProductRepository;
pub use routes::{CatalogOperation, MOUNT_PATH};
pub use service::CatalogService;
