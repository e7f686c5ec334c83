//! Starter products loaded into an empty catalog

use tracing::instrument;

use crate::error::ProductResult;
use crate::models::Product;
use crate::repository::ProductRepository;

const STARTER: &[(&str, &str, &str, f64)] = &[
    ("602d2149e773f2a3990b47f5", "IPhone X", "Smart Phone", 950.00),
    ("602d2149e773f2a3990b47f6", "Samsung 10", "Smart Phone", 840.00),
    ("602d2149e773f2a3990b47f7", "Huawei Plus", "White Appliances", 650.00),
    ("602d2149e773f2a3990b47f8", "Xiaomi Mi 9", "White Appliances", 470.00),
    ("602d2149e773f2a3990b47f9", "HTC U11+ Plus", "Smart Phone", 380.00),
    ("602d2149e773f2a3990b47fa", "LG G7 ThinQ", "Home Kitchen", 240.00),
];

pub fn starter_catalog() -> Vec<Product> {
    STARTER
        .iter()
        .enumerate()
        .map(|(i, (id, name, category, price))| {
            let mut product = Product::new(*name, *category)
                .with_id(*id)
                .with_price(*price);
            product.summary = format!("{name} in the {category} range.");
            product.description = format!(
                "{name} is part of the starter catalog. Replace this text with a real description."
            );
            product.image_file = format!("product-{}.png", i + 1);
            product
        })
        .collect()
}

/// Insert the starter catalog when the repository holds no products.
/// Returns how many products were inserted.
#[instrument(skip(repository))]
pub async fn seed_if_empty<R: ProductRepository + ?Sized>(repository: &R) -> ProductResult<usize> {
    if !repository.find_all().await?.is_empty() {
        tracing::debug!("Catalog already populated, skipping seed");
        return Ok(0);
    }

    let products = starter_catalog();
    let count = products.len();
    for product in products {
        repository.insert(product).await?;
    }

    tracing::info!(count, "Seeded starter catalog");
    Ok(count)
}
