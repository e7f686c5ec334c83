//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{is_canonical_id, Product, ProductId};
use crate::repository::ProductRepository;

/// Default collection the catalog lives in
pub const DEFAULT_COLLECTION: &str = "products";

/// Stored shape of a product. The id is kept as a native ObjectId in `_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_file: String,
    #[serde(default)]
    pub price: f64,
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            id: Some(doc.id.to_hex()),
            name: doc.name,
            category: doc.category,
            summary: doc.summary,
            description: doc.description,
            image_file: doc.image_file,
            price: doc.price,
        }
    }
}

impl TryFrom<Product> for ProductDocument {
    type Error = ProductError;

    /// Fails when the product carries an id that is not a lowercase hex
    /// ObjectId. A product without an id gets a fresh one.
    fn try_from(product: Product) -> Result<Self, Self::Error> {
        let id = match product.id.as_deref() {
            Some(raw) if is_canonical_id(raw) => ObjectId::parse_str(raw)?,
            Some(raw) => {
                return Err(ProductError::Validation(format!(
                    "id '{raw}' must be 24 lowercase hex digits"
                )))
            }
            None => ObjectId::new(),
        };

        Ok(Self {
            id,
            name: product.name,
            category: product.category,
            summary: product.summary,
            description: product.description,
            image_file: product.image_file,
            price: product.price,
        })
    }
}

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<ProductDocument>(collection_name);
        Self { collection }
    }

    /// Create the secondary indexes used by the category and name lookups
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "category": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_category".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "name": 1 })
                .options(IndexOptions::builder().name("idx_name".to_string()).build())
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    pub fn collection(&self) -> &Collection<ProductDocument> {
        &self.collection
    }

    async fn find_many(&self, filter: Document) -> ProductResult<Vec<Product>> {
        let cursor = self.collection.find(filter).await?;
        let docs: Vec<ProductDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Product::from).collect())
    }

    /// Ids that are 24 characters but not lowercase hex can never match a
    /// stored document
    fn object_id(id: &ProductId) -> Option<ObjectId> {
        if !is_canonical_id(id.as_str()) {
            return None;
        }
        ObjectId::parse_str(id.as_str()).ok()
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        self.find_many(doc! {}).await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &ProductId) -> ProductResult<Option<Product>> {
        let Some(oid) = Self::object_id(id) else {
            return Ok(None);
        };

        let found = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(found.map(Product::from))
    }

    #[instrument(skip(self))]
    async fn find_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        self.find_many(doc! { "category": category }).await
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> ProductResult<Vec<Product>> {
        self.find_many(doc! { "name": name }).await
    }

    #[instrument(skip(self, product), fields(product_name = %product.name))]
    async fn insert(&self, product: Product) -> ProductResult<Product> {
        let document = ProductDocument::try_from(product)?;
        self.collection.insert_one(&document).await?;

        tracing::info!(product_id = %document.id, "Product created successfully");
        Ok(document.into())
    }

    #[instrument(skip(self, product), fields(product_name = %product.name))]
    async fn replace(&self, product: Product) -> ProductResult<Product> {
        let document = ProductDocument::try_from(product)?;
        let result = self
            .collection
            .replace_one(doc! { "_id": document.id }, &document)
            .upsert(true)
            .await?;

        tracing::info!(
            product_id = %document.id,
            matched = result.matched_count,
            upserted = result.upserted_id.is_some(),
            "Product replaced"
        );
        Ok(document.into())
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: &ProductId) -> ProductResult<bool> {
        let Some(oid) = Self::object_id(id) else {
            return Ok(false);
        };

        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count > 0)
    }
}
