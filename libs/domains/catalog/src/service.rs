//! Catalog Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::diagnostics::{CatalogDiagnostics, TracingDiagnostics};
use crate::error::{ProductError, ProductResult};
use crate::models::{LookupKind, Product, ProductId};
use crate::repository::ProductRepository;

/// Catalog service providing the product operations
///
/// Ids are checked here before any repository call, and lookup misses are
/// reported through the diagnostics port before surfacing as `NotFound`.
pub struct CatalogService<R: ProductRepository> {
    repository: Arc<R>,
    diagnostics: Arc<dyn CatalogDiagnostics>,
}

impl<R: ProductRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            diagnostics: Arc::clone(&self.diagnostics),
        }
    }
}

impl<R: ProductRepository> CatalogService<R> {
    /// Create a service that reports diagnostics through `tracing`
    pub fn new(repository: R) -> Self {
        Self::with_diagnostics(repository, Arc::new(TracingDiagnostics))
    }

    pub fn with_diagnostics(repository: R, diagnostics: Arc<dyn CatalogDiagnostics>) -> Self {
        Self {
            repository: Arc::new(repository),
            diagnostics,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Every product. An empty catalog is not an error.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> ProductResult<Product> {
        let id = ProductId::parse(id)?;
        match self.repository.find_by_id(&id).await? {
            Some(product) => Ok(product),
            None => Err(self.not_found(LookupKind::Id, id.as_str())),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        let products = self.repository.find_by_category(category).await?;
        self.non_empty(products, LookupKind::Category, category)
    }

    #[instrument(skip(self))]
    pub async fn get_by_name(&self, name: &str) -> ProductResult<Vec<Product>> {
        let products = self.repository.find_by_name(name).await?;
        self.non_empty(products, LookupKind::Name, name)
    }

    /// Store a new product and return it with its id
    #[instrument(skip(self, product), fields(product_name = %product.name))]
    pub async fn create(&self, product: Product) -> ProductResult<Product> {
        Self::validate(&product)?;
        self.repository.insert(product).await
    }

    /// Replace the product with the same id, inserting it when it does not exist
    #[instrument(skip(self, product), fields(product_name = %product.name))]
    pub async fn update(&self, product: Product) -> ProductResult<Product> {
        Self::validate(&product)?;
        self.repository.replace(product).await
    }

    /// Delete by id. Succeeds whether or not the product existed; the flag
    /// says whether anything was removed.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> ProductResult<bool> {
        let id = ProductId::parse(id)?;
        self.repository.remove(&id).await
    }

    fn validate(product: &Product) -> ProductResult<()> {
        product
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))
    }

    fn non_empty(
        &self,
        products: Vec<Product>,
        kind: LookupKind,
        key: &str,
    ) -> ProductResult<Vec<Product>> {
        if products.is_empty() {
            return Err(self.not_found(kind, key));
        }
        Ok(products)
    }

    fn not_found(&self, kind: LookupKind, key: &str) -> ProductError {
        self.diagnostics.product_not_found(kind, key);
        ProductError::not_found(kind, key)
    }
}
