//! In-memory implementation of ProductRepository
//!
//! Keeps products in insertion order behind a lock. Used by the unit and
//! handler tests, which need a store without a running database.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{is_canonical_id, Product, ProductId};
use crate::repository::ProductRepository;

#[derive(Debug, Default)]
struct Inner {
    products: RwLock<Vec<Product>>,
    calls: AtomicUsize,
}

/// Process-local product store
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    inner: Arc<Inner>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `products`
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            inner: Arc::new(Inner {
                products: RwLock::new(products.into_iter().collect()),
                calls: AtomicUsize::new(0),
            }),
        }
    }

    /// Number of repository calls made so far
    pub fn storage_calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.inner.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn record_call(&self) {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
    }

    async fn matching<F>(&self, predicate: F) -> Vec<Product>
    where
        F: Fn(&Product) -> bool,
    {
        self.inner
            .products
            .read()
            .await
            .iter()
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }
}

/// Mint an id when absent. Given ids must be in the form the MongoDB
/// store keeps, so both stores accept and return the same keys.
fn assign_id(mut product: Product) -> ProductResult<Product> {
    match product.id.as_deref() {
        Some(raw) if !is_canonical_id(raw) => {
            return Err(ProductError::Validation(format!(
                "id '{raw}' must be 24 lowercase hex digits"
            )))
        }
        Some(_) => {}
        None => product.id = Some(ProductId::generate().into_inner()),
    }
    Ok(product)
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        self.record_call();
        Ok(self.inner.products.read().await.clone())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &ProductId) -> ProductResult<Option<Product>> {
        self.record_call();
        Ok(self
            .matching(|p| p.id.as_deref() == Some(id.as_str()))
            .await
            .into_iter()
            .next())
    }

    #[instrument(skip(self))]
    async fn find_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        self.record_call();
        Ok(self.matching(|p| p.category == category).await)
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> ProductResult<Vec<Product>> {
        self.record_call();
        Ok(self.matching(|p| p.name == name).await)
    }

    #[instrument(skip(self, product), fields(product_name = %product.name))]
    async fn insert(&self, product: Product) -> ProductResult<Product> {
        self.record_call();
        let product = assign_id(product)?;
        let mut products = self.inner.products.write().await;

        if products.iter().any(|p| p.id == product.id) {
            return Err(ProductError::Database(format!(
                "duplicate product id '{}'",
                product.id.as_deref().unwrap_or_default()
            )));
        }

        products.push(product.clone());
        Ok(product)
    }

    #[instrument(skip(self, product), fields(product_name = %product.name))]
    async fn replace(&self, product: Product) -> ProductResult<Product> {
        self.record_call();
        let product = assign_id(product)?;
        let mut products = self.inner.products.write().await;

        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => products.push(product.clone()),
        }

        Ok(product)
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: &ProductId) -> ProductResult<bool> {
        self.record_call();
        let mut products = self.inner.products.write().await;
        let before = products.len();
        products.retain(|p| p.id.as_deref() != Some(id.as_str()));
        Ok(products.len() != before)
    }
}
