//! Integration tests for the Products domain
//!
//! Runs the SeaORM repository against an in-memory SQLite database with the
//! real migrations applied.

use domain_products::*;
use migration::{Migrator, MigratorTrait};
use uuid::Uuid;

async fn setup() -> ProductService<SeaOrmProductRepository> {
    let db = database::sqlite::connect_in_memory().await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    ProductService::new(SeaOrmProductRepository::new(db))
}

fn product(name: &str, price: f64) -> Product {
    Product::new(CreateProduct {
        name: name.to_string(),
        price,
    })
    .unwrap()
}

async fn seed(service: &ProductService<SeaOrmProductRepository>, count: usize) -> Vec<Uuid> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let created = service
            .create(product(&format!("product-{:02}", i), i as f64))
            .await
            .unwrap();
        ids.push(created.id);
    }
    ids
}

#[tokio::test]
async fn test_create_and_find_product() {
    let service = setup().await;

    let created = service.create(product("Keyboard", 49.9)).await.unwrap();
    let fetched = service.find_by_id(created.id).await.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Keyboard");
    assert_eq!(fetched.price, 49.9);
}

#[tokio::test]
async fn test_find_unknown_product_is_not_found() {
    let service = setup().await;

    let result = service.find_by_id(Uuid::now_v7()).await;
    assert!(matches!(result, Err(ProductError::NotFound(_))));
}

#[tokio::test]
async fn test_update_replaces_fields_and_keeps_identity() {
    let service = setup().await;
    let created = service.create(product("Keyboard", 49.9)).await.unwrap();

    let revised = Product::with_id(
        created.id,
        CreateProduct {
            name: "Mechanical keyboard".to_string(),
            price: 89.0,
        },
    )
    .unwrap();
    service.update(revised).await.unwrap();

    let fetched = service.find_by_id(created.id).await.unwrap();
    assert_eq!(fetched.name, "Mechanical keyboard");
    assert_eq!(fetched.price, 89.0);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_never_created_product_leaves_storage_unchanged() {
    let service = setup().await;
    seed(&service, 2).await;

    let result = service.update(product("Ghost", 1.0)).await;
    assert!(matches!(result, Err(ProductError::NotFound(_))));

    let all = service.list(0, 0, "").await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|p| p.name != "Ghost"));
}

#[tokio::test]
async fn test_delete_then_find_is_not_found() {
    let service = setup().await;
    let created = service.create(product("Keyboard", 49.9)).await.unwrap();

    service.delete(created.id).await.unwrap();

    let result = service.find_by_id(created.id).await;
    assert!(matches!(result, Err(ProductError::NotFound(_))));

    let again = service.delete(created.id).await;
    assert!(matches!(again, Err(ProductError::NotFound(_))));
}

#[tokio::test]
async fn test_list_without_paging_returns_everything_ascending() {
    let service = setup().await;
    let ids = seed(&service, 5).await;

    let all = service.list(0, 0, "").await.unwrap();
    assert_eq!(all.iter().map(|p| p.id).collect::<Vec<_>>(), ids);

    let bogus = service.list(0, 0, "bogus").await.unwrap();
    assert_eq!(bogus, all);
}

#[tokio::test]
async fn test_list_descending() {
    let service = setup().await;
    let mut ids = seed(&service, 5).await;
    ids.reverse();

    let all = service.list(0, 0, "desc").await.unwrap();
    assert_eq!(all.iter().map(|p| p.id).collect::<Vec<_>>(), ids);
}

#[tokio::test]
async fn test_list_pages_cover_every_product_once() {
    let service = setup().await;
    let ids = seed(&service, 24).await;

    let mut seen = Vec::new();
    let mut sizes = Vec::new();
    for page in 1..=3 {
        let window = service.list(page, 10, "asc").await.unwrap();
        sizes.push(window.len());
        seen.extend(window.into_iter().map(|p| p.id));
    }

    assert_eq!(sizes, vec![10, 10, 4]);
    assert_eq!(seen, ids);

    let past_end = service.list(4, 10, "asc").await.unwrap();
    assert!(past_end.is_empty());
}

#[tokio::test]
async fn test_list_with_only_limit_returns_everything() {
    let service = setup().await;
    seed(&service, 12).await;

    let all = service.list(0, 10, "").await.unwrap();
    assert_eq!(all.len(), 12);
}

#[tokio::test]
async fn test_list_with_oversized_window_does_not_overflow() {
    let service = setup().await;
    seed(&service, 5).await;

    let all = service.list(1, u64::MAX, "").await.unwrap();
    assert_eq!(all.len(), 5);

    let past_end = service.list(u64::MAX, u64::MAX, "desc").await.unwrap();
    assert!(past_end.is_empty());
}
