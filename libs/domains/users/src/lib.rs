//! Users Domain
//!
//! User entity with bcrypt password hashing, its storage contract, the user
//! service and the token-issuing authentication flow.
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::JwtConfig;
//! use domain_users::{Authenticator, CreateUser, InMemoryUserRepository, User, UserService};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let users = UserService::new(InMemoryUserRepository::new());
//! users
//!     .create(User::new(CreateUser {
//!         name: "Jane".to_string(),
//!         email: "jane@x.com".to_string(),
//!         password: "secret1".to_string(),
//!     })?)
//!     .await?;
//!
//! let config = JwtConfig::new("a-secret-of-at-least-thirty-two-chars", 300)?;
//! let auth = Authenticator::new(users, &config);
//! let token = auth.authenticate("jane@x.com", "secret1").await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod entity;
pub mod error;
pub mod models;
pub mod persistence;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use auth::{AccessToken, Authenticator, Claims};
pub use error::{AuthError, AuthResult, UserError, UserResult};
pub use models::{CreateUser, User, UserResponse};
pub use persistence::SeaOrmUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
