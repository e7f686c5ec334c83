use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{Product, ProductId};

/// Repository trait for Product persistence
///
/// The catalog talks to storage only through this trait, so a MongoDB
/// collection and an in-memory store are interchangeable behind the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every stored product, in storage order
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: &ProductId) -> ProductResult<Option<Product>>;

    /// Products whose category equals `category` exactly
    async fn find_by_category(&self, category: &str) -> ProductResult<Vec<Product>>;

    /// Products whose name equals `name` exactly
    async fn find_by_name(&self, name: &str) -> ProductResult<Vec<Product>>;

    /// Store a new product, minting an id when it has none
    async fn insert(&self, product: Product) -> ProductResult<Product>;

    /// Replace the product with the same id, or insert it when absent
    async fn replace(&self, product: Product) -> ProductResult<Product>;

    /// Remove a product. Returns whether anything was removed
    async fn remove(&self, id: &ProductId) -> ProductResult<bool>;
}
