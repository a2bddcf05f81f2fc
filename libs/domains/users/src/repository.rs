use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
///
/// Email uniqueness is enforced here, not in the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    async fn save(&self, user: User) -> UserResult<User>;

    /// Get a user by ID
    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Get a user by email
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.id) {
            return Err(UserError::Storage(format!("duplicate user id {}", user.id)));
        }

        // Same constraint as the unique index on users.email
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::Storage(format!(
                "email '{}' is already registered",
                user.email
            )));
        }

        users.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateUser;

    fn user(email: &str) -> User {
        User::new(CreateUser {
            name: "Jane".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_save_and_find_user() {
        let repo = InMemoryUserRepository::new();
        let saved = repo.save(user("jane@x.com")).await.unwrap();

        let by_id = repo.find_by_id(saved.id).await.unwrap();
        let by_email = repo.find_by_email("jane@x.com").await.unwrap();

        assert_eq!(by_id.as_ref(), Some(&saved));
        assert_eq!(by_email, Some(saved));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_storage_error() {
        let repo = InMemoryUserRepository::new();
        repo.save(user("jane@x.com")).await.unwrap();

        let result = repo.save(user("jane@x.com")).await;
        assert!(matches!(result, Err(UserError::Storage(_))));
    }

    #[tokio::test]
    async fn test_find_unknown_email() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.find_by_email("nobody@x.com").await.unwrap().is_none());
    }
}
