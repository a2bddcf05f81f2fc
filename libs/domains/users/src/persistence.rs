use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::{
    entity,
    error::{UserError, UserResult},
    models::User,
    repository::UserRepository,
};

/// SeaORM-backed UserRepository
#[derive(Clone)]
pub struct SeaOrmUserRepository {
    base: BaseRepository<entity::Entity>,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn save(&self, user: User) -> UserResult<User> {
        let active_model: entity::ActiveModel = user.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(UserError::database)?;

        tracing::info!(user_id = %model.id, "Created user");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(UserError::database)?;

        Ok(model.map(|m| m.into()))
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Email.eq(email))
            .one(self.base.db())
            .await
            .map_err(UserError::database)?;

        Ok(model.map(|m| m.into()))
    }
}
