//! Routing table for the catalog API
//!
//! Each operation owns its method and path. The router in [`crate::handlers`]
//! is built by walking this table, so the table is the single place a route
//! is declared.

use axum::http::Method;
use axum::routing::MethodFilter;
use axum_helpers::server::API_PREFIX;
use strum::{Display, EnumIter};

/// Where the catalog router is mounted, relative to the API prefix
pub const MOUNT_PATH: &str = "/products";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum CatalogOperation {
    ListAll,
    GetById,
    GetByCategory,
    GetByName,
    Create,
    Update,
    Delete,
}

impl CatalogOperation {
    pub fn method(self) -> Method {
        match self {
            Self::ListAll | Self::GetById | Self::GetByCategory | Self::GetByName => Method::GET,
            Self::Create => Method::POST,
            Self::Update => Method::PUT,
            Self::Delete => Method::DELETE,
        }
    }

    pub fn method_filter(self) -> MethodFilter {
        match self {
            Self::ListAll | Self::GetById | Self::GetByCategory | Self::GetByName => {
                MethodFilter::GET
            }
            Self::Create => MethodFilter::POST,
            Self::Update => MethodFilter::PUT,
            Self::Delete => MethodFilter::DELETE,
        }
    }

    /// Path relative to [`MOUNT_PATH`]
    pub fn path(self) -> &'static str {
        match self {
            Self::ListAll | Self::Create | Self::Update => "/",
            Self::GetById | Self::Delete => "/{id}",
            Self::GetByCategory => "/GetProductByCategory/{category}",
            Self::GetByName => "/GetProductByName/{name}",
        }
    }
}

/// Absolute URL of a single product, used for `Location` headers
pub fn location(id: &str) -> String {
    format!("{API_PREFIX}{MOUNT_PATH}/{id}")
}
