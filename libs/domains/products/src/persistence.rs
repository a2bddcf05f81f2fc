use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};
use uuid::Uuid;

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Product, SortDirection},
    repository::ProductRepository,
};

/// SeaORM-backed ProductRepository (PostgreSQL in production, SQLite locally)
#[derive(Clone)]
pub struct SeaOrmProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn save(&self, product: Product) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = product.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(ProductError::database)?;

        tracing::info!(product_id = %model.id, "Created product");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(ProductError::database)?;

        Ok(model.map(|m| m.into()))
    }

    async fn replace(&self, product: Product) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = product.into();

        let model = self
            .base
            .update(active_model)
            .await
            .map_err(ProductError::database)?;

        tracing::info!(product_id = %model.id, "Updated product");
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: Uuid) -> ProductResult<bool> {
        let rows = self
            .base
            .delete_by_id(id)
            .await
            .map_err(ProductError::database)?;

        if rows > 0 {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(rows > 0)
    }

    async fn query(
        &self,
        direction: SortDirection,
        offset: u64,
        limit: Option<u64>,
    ) -> ProductResult<Vec<Product>> {
        let mut query = entity::Entity::find();

        query = match direction {
            SortDirection::Asc => query
                .order_by_asc(entity::Column::CreatedAt)
                .order_by_asc(entity::Column::Id),
            SortDirection::Desc => query
                .order_by_desc(entity::Column::CreatedAt)
                .order_by_desc(entity::Column::Id),
        };

        // SQLite only accepts OFFSET after a LIMIT
        if let Some(limit) = limit {
            query = query.limit(limit).offset(offset);
        }

        let models = query
            .all(self.base.db())
            .await
            .map_err(ProductError::database)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }
}
