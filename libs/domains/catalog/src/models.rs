use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::Display;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{ProductError, ProductResult};

/// Length of a product identifier (hex form of a MongoDB ObjectId)
pub const PRODUCT_ID_LEN: usize = 24;

/// Whether `raw` is an ObjectId in the form the store hands back: 24
/// lowercase hex digits. Stored ids are always in this form, so any other
/// spelling could never be found again.
pub fn is_canonical_id(raw: &str) -> bool {
    raw.len() == PRODUCT_ID_LEN && raw.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

fn validate_canonical_id(id: &str) -> Result<(), validator::ValidationError> {
    if !is_canonical_id(id) {
        return Err(validator::ValidationError::new("invalid_object_id"));
    }
    Ok(())
}

/// Product entity as exposed by the catalog API
///
/// `id` is optional on the way in: create and update mint one when it is absent.
/// Everything besides `id`, `name` and `category` is descriptive payload that the
/// catalog stores and returns unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Product {
    /// 24 lowercase hex digits, assigned on creation when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(equal = 24), custom(function = "validate_canonical_id"))]
    #[schema(example = "602d2149e773f2a3990b47f5")]
    pub id: Option<String>,
    /// Product name
    #[validate(length(min = 1))]
    pub name: String,
    /// Category label used for grouping
    #[validate(length(min = 1))]
    pub category: String,
    /// Short summary
    #[serde(default)]
    pub summary: String,
    /// Long description
    #[serde(default)]
    pub description: String,
    /// Image file reference
    #[serde(default)]
    pub image_file: String,
    /// Unit price
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub price: f64,
}

impl Product {
    /// Create a product with no id and an empty descriptive payload
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: category.into(),
            summary: String::new(),
            description: String::new(),
            image_file: String::new(),
            price: 0.0,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }
}

/// A product identifier that passed the length check
///
/// Point lookups and deletes only accept ids of exactly [`PRODUCT_ID_LEN`]
/// characters; anything else is rejected before storage is touched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    pub fn parse(raw: &str) -> ProductResult<Self> {
        if raw.chars().count() != PRODUCT_ID_LEN {
            return Err(ProductError::InvalidId(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// Mint a fresh identifier
    pub fn generate() -> Self {
        Self(ObjectId::new().to_hex())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The key a lookup was made by, used when reporting misses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum LookupKind {
    Id,
    Category,
    Name,
}
