use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, SortDirection};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Persist a constructed product
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn create(&self, product: Product) -> ProductResult<Product> {
        product.check()?;
        self.repository.save(product).await
    }

    /// Get a product by ID
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn find_by_id(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Replace every mutable field of an existing product.
    ///
    /// The identifier and the stored creation time are kept.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn update(&self, product: Product) -> ProductResult<Product> {
        product.check()?;

        let existing = self.find_by_id(product.id).await?;

        self.repository
            .replace(Product {
                created_at: existing.created_at,
                ..product
            })
            .await
    }

    /// Delete a product
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete(&self, id: Uuid) -> ProductResult<()> {
        self.find_by_id(id).await?;

        // Lost a race with another delete
        if !self.repository.delete_by_id(id).await? {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }

    /// List products ordered by creation time.
    ///
    /// `page` is 1-based. When either `page` or `limit` is zero every product is
    /// returned. `sort` other than `desc`/`descending` sorts ascending.
    #[instrument(skip(self))]
    pub async fn list(&self, page: u64, limit: u64, sort: &str) -> ProductResult<Vec<Product>> {
        let direction = SortDirection::parse_or_default(sort);
        let (offset, limit) = page_window(page, limit);

        self.repository.query(direction, offset, limit).await
    }
}

/// SQL drivers bind LIMIT and OFFSET as signed 64-bit integers
const MAX_WINDOW: u64 = i64::MAX as u64;

fn page_window(page: u64, limit: u64) -> (u64, Option<u64>) {
    if page != 0 && limit != 0 {
        let limit = limit.min(MAX_WINDOW);
        let offset = (page - 1).saturating_mul(limit).min(MAX_WINDOW);
        (offset, Some(limit))
    } else {
        (0, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateProduct;
    use crate::repository::MockProductRepository;
    use mockall::predicate::{always, eq};

    fn product(name: &str, price: f64) -> Product {
        Product::new(CreateProduct {
            name: name.to_string(),
            price,
        })
        .unwrap()
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(0, 0), (0, None));
        assert_eq!(page_window(1, 10), (0, Some(10)));
        assert_eq!(page_window(3, 10), (20, Some(10)));
        // One of the two unset falls back to everything
        assert_eq!(page_window(0, 10), (0, None));
        assert_eq!(page_window(2, 0), (0, None));
    }

    #[test]
    fn test_page_window_stays_within_signed_range() {
        assert_eq!(page_window(1, u64::MAX), (0, Some(MAX_WINDOW)));
        assert_eq!(page_window(u64::MAX, u64::MAX), (MAX_WINDOW, Some(MAX_WINDOW)));
        assert_eq!(page_window(u64::MAX, 10), (MAX_WINDOW, Some(10)));
    }

    #[tokio::test]
    async fn test_find_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_find_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.find_by_id(id).await;

        assert!(matches!(result, Err(ProductError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_product_before_storage() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_save().never();

        let mut invalid = product("Desk", 100.0);
        invalid.price = -1.0;

        let service = ProductService::new(mock_repo);
        let result = service.create(invalid).await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_propagates_storage_error() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(ProductError::Storage("connection reset".to_string())));

        let service = ProductService::new(mock_repo);
        let result = service.create(product("Desk", 100.0)).await;

        assert!(matches!(result, Err(ProductError::Storage(_))));
    }

    #[tokio::test]
    async fn test_update_missing_product_never_writes() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));
        mock_repo.expect_replace().never();

        let service = ProductService::new(mock_repo);
        let result = service.update(product("Desk", 100.0)).await;

        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_keeps_stored_creation_time() {
        let stored = product("Desk", 100.0);
        let stored_created_at = stored.created_at;
        let id = stored.id;

        let mut mock_repo = MockProductRepository::new();
        let found = stored.clone();
        mock_repo
            .expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(found.clone())));
        mock_repo
            .expect_replace()
            .withf(move |p| p.id == id && p.created_at == stored_created_at && p.price == 80.0)
            .returning(|p| Ok(p));

        let revised = Product::with_id(
            id,
            CreateProduct {
                name: "Desk".to_string(),
                price: 80.0,
            },
        )
        .unwrap();

        let service = ProductService::new(mock_repo);
        let updated = service.update(revised).await.unwrap();

        assert_eq!(updated.created_at, stored_created_at);
        assert_eq!(updated.price, 80.0);
    }

    #[tokio::test]
    async fn test_delete_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));
        mock_repo.expect_delete_by_id().never();

        let service = ProductService::new(mock_repo);
        let result = service.delete(Uuid::now_v7()).await;

        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_defaults_unknown_sort_to_ascending() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_query()
            .with(eq(SortDirection::Asc), eq(0), eq(None))
            .times(2)
            .returning(|_, _, _| Ok(vec![]));

        let service = ProductService::new(mock_repo);
        service.list(0, 0, "bogus").await.unwrap();
        service.list(0, 0, "").await.unwrap();
    }

    #[tokio::test]
    async fn test_list_translates_page_to_offset() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_query()
            .with(eq(SortDirection::Desc), eq(10), eq(Some(10)))
            .returning(|_, _, _| Ok(vec![]));

        let service = ProductService::new(mock_repo);
        service.list(2, 10, "desc").await.unwrap();
    }

    #[tokio::test]
    async fn test_list_propagates_storage_error() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_query()
            .with(always(), always(), always())
            .returning(|_, _, _| Err(ProductError::Storage("timeout".to_string())));

        let service = ProductService::new(mock_repo);
        let result = service.list(1, 10, "asc").await;

        assert!(matches!(result, Err(ProductError::Storage(_))));
    }
}
