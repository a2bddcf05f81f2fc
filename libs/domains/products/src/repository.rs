use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, SortDirection};

/// Repository trait for Product persistence
///
/// Implementations store whole records; validation and existence checks live in
/// [`crate::ProductService`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Get a product by ID
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Overwrite every field of an existing product
    async fn replace(&self, product: Product) -> ProductResult<Product>;

    /// Delete a product by ID, returning whether a record was removed
    async fn delete_by_id(&self, id: Uuid) -> ProductResult<bool>;

    /// Products ordered by creation time (ties broken by id).
    ///
    /// `offset` is only meaningful together with a `limit`; `None` returns every
    /// record.
    async fn query(
        &self,
        direction: SortDirection,
        offset: u64,
        limit: Option<u64>,
    ) -> ProductResult<Vec<Product>>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        if products.contains_key(&product.id) {
            return Err(ProductError::Storage(format!(
                "duplicate product id {}",
                product.id
            )));
        }

        products.insert(product.id, product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn replace(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        match products.get_mut(&product.id) {
            Some(stored) => *stored = product.clone(),
            None => {
                return Err(ProductError::Storage(format!(
                    "no product row for id {}",
                    product.id
                )));
            }
        }

        tracing::info!(product_id = %product.id, "Updated product");
        Ok(product)
    }

    async fn delete_by_id(&self, id: Uuid) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::info!(product_id = %id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn query(
        &self,
        direction: SortDirection,
        offset: u64,
        limit: Option<u64>,
    ) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products.values().cloned().collect();
        result.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        if direction == SortDirection::Desc {
            result.reverse();
        }

        let result = match limit {
            Some(limit) => result
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect(),
            None => result,
        };

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateProduct;

    fn product(name: &str) -> Product {
        Product::new(CreateProduct {
            name: name.to_string(),
            price: 10.0,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_save_and_find_product() {
        let repo = InMemoryProductRepository::new();

        let saved = repo.save(product("Lamp")).await.unwrap();
        let fetched = repo.find_by_id(saved.id).await.unwrap();

        assert_eq!(fetched, Some(saved));
    }

    #[tokio::test]
    async fn test_save_duplicate_id_is_storage_error() {
        let repo = InMemoryProductRepository::new();
        let lamp = product("Lamp");

        repo.save(lamp.clone()).await.unwrap();
        let result = repo.save(lamp).await;

        assert!(matches!(result, Err(ProductError::Storage(_))));
    }

    #[tokio::test]
    async fn test_replace_missing_product_does_not_insert() {
        let repo = InMemoryProductRepository::new();
        let lamp = product("Lamp");

        assert!(repo.replace(lamp.clone()).await.is_err());
        assert!(repo.find_by_id(lamp.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_whether_removed() {
        let repo = InMemoryProductRepository::new();
        let saved = repo.save(product("Lamp")).await.unwrap();

        assert!(repo.delete_by_id(saved.id).await.unwrap());
        assert!(!repo.delete_by_id(saved.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_query_orders_and_windows() {
        let repo = InMemoryProductRepository::new();
        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(repo.save(product(&format!("p{}", i))).await.unwrap().id);
        }

        let all = repo.query(SortDirection::Asc, 0, None).await.unwrap();
        assert_eq!(all.iter().map(|p| p.id).collect::<Vec<_>>(), ids);

        let newest = repo.query(SortDirection::Desc, 0, Some(2)).await.unwrap();
        assert_eq!(newest.iter().map(|p| p.id).collect::<Vec<_>>(), vec![ids[4], ids[3]]);

        let tail = repo.query(SortDirection::Asc, 4, Some(2)).await.unwrap();
        assert_eq!(tail.len(), 1);
        assert_eq!(tail[0].id, ids[4]);
    }
}
