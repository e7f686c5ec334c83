//! Integration tests for the MongoDB product repository
//!
//! The MongoDB tests use a real server via testcontainers and need Docker:
//! `cargo test -p domain_catalog -- --ignored`. Checks shared by both stores
//! also run against the in-memory repository.

use domain_catalog::*;
use test_utils::{assertions::*, TestDataBuilder, TestMongo};

async fn repository(mongo: &TestMongo) -> MongoProductRepository {
    let repo = MongoProductRepository::new(&mongo.database());
    repo.init_indexes().await.unwrap();
    repo
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_insert_and_find_by_id() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo).await;
    let builder = TestDataBuilder::from_test_name("insert_and_find");

    let id = builder.object_id("widget");
    let product = Product::new(builder.name("product", "widget"), "Tools")
        .with_id(&id)
        .with_price(9.99);
    let created = repo.insert(product.clone()).await.unwrap();
    assert_eq!(created, product);

    let found = repo.find_by_id(&ProductId::parse(&id).unwrap()).await.unwrap();
    assert_eq!(assert_some(found, "inserted product"), product);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_insert_mints_id_and_rejects_duplicates() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo).await;

    let created = repo.insert(Product::new("Widget", "Tools")).await.unwrap();
    let id = assert_some(created.id.clone(), "minted id");
    assert_eq!(id.len(), PRODUCT_ID_LEN);

    let err = repo
        .insert(Product::new("Other", "Tools").with_id(id))
        .await
        .unwrap_err();
    assert!(matches!(err, ProductError::Database(_)));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_category_and_name_match_exactly() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo).await;

    for product in seed::starter_catalog() {
        repo.insert(product).await.unwrap();
    }

    let phones = repo.find_by_category("Smart Phone").await.unwrap();
    let names: Vec<String> = phones.into_iter().map(|p| p.name).collect();
    assert_same_items(
        &names,
        &[
            "IPhone X".to_string(),
            "Samsung 10".to_string(),
            "HTC U11+ Plus".to_string(),
        ],
    );

    assert!(repo.find_by_category("smart phone").await.unwrap().is_empty());
    assert_eq!(repo.find_by_name("LG G7 ThinQ").await.unwrap().len(), 1);
    assert!(repo.find_by_name("LG").await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_replace_upserts() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo).await;
    let builder = TestDataBuilder::from_test_name("replace_upserts");
    let id = builder.object_id("gadget");

    repo.replace(Product::new("Gadget", "Tools").with_id(&id))
        .await
        .unwrap();
    repo.replace(Product::new("Gadget v2", "Tools").with_id(&id))
        .await
        .unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Gadget v2");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_remove_and_non_hex_ids() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo).await;

    let created = repo.insert(Product::new("Widget", "Tools")).await.unwrap();
    let id = ProductId::parse(created.id.as_deref().unwrap()).unwrap();

    assert!(repo.remove(&id).await.unwrap());
    assert!(!repo.remove(&id).await.unwrap());

    let non_hex = ProductId::parse("zzzzzzzzzzzzzzzzzzzzzzzz").unwrap();
    assert!(repo.find_by_id(&non_hex).await.unwrap().is_none());
    assert!(!repo.remove(&non_hex).await.unwrap());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_seed_if_empty_against_mongo() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo).await;

    assert_eq!(seed::seed_if_empty(&repo).await.unwrap(), 6);
    assert_eq!(seed::seed_if_empty(&repo).await.unwrap(), 0);
    assert_eq!(repo.find_all().await.unwrap().len(), 6);
}

/// Both stores must hand back caller-supplied ids unchanged and agree on
/// which spellings of an id exist.
async fn check_id_spelling<R: ProductRepository>(repo: &R, id: &str) {
    let stored = repo
        .insert(Product::new("Widget", "Tools").with_id(id))
        .await
        .unwrap();
    assert_eq!(stored.id.as_deref(), Some(id));

    let upper = id.to_uppercase();
    let err = repo
        .replace(Product::new("Widget", "Tools").with_id(&upper))
        .await
        .unwrap_err();
    assert!(matches!(err, ProductError::Validation(_)));

    let upper_id = ProductId::parse(&upper).unwrap();
    assert!(repo.find_by_id(&upper_id).await.unwrap().is_none());
    assert!(!repo.remove(&upper_id).await.unwrap());

    let found = repo.find_by_id(&ProductId::parse(id).unwrap()).await.unwrap();
    assert_eq!(assert_some(found, "stored product").id.as_deref(), Some(id));
}

#[tokio::test]
async fn test_id_spelling_in_memory() {
    let repo = InMemoryProductRepository::new();
    check_id_spelling(&repo, "602d2149e773f2a3990b47fa").await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_id_spelling_in_mongo() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo).await;
    check_id_spelling(&repo, "602d2149e773f2a3990b47fa").await;
}
