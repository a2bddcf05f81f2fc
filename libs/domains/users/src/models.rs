use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::{UserError, UserResult};

/// bcrypt work factor
pub const BCRYPT_COST: u32 = 10;

/// bcrypt only reads the first 72 bytes of its input
pub const MAX_PASSWORD_BYTES: usize = 72;

fn validate_password_length(password: &str) -> Result<(), validator::ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        let mut err = validator::ValidationError::new("password_too_long");
        err.message = Some(format!("must be at most {} bytes", MAX_PASSWORD_BYTES).into());
        return Err(err);
    }
    Ok(())
}

/// User entity
///
/// `password_hash` always holds a bcrypt hash; the plaintext never leaves
/// [`User::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// User view without credentials, for output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// DTO for creating a new user
///
/// The email format is not checked here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1))]
    pub name: String,
    pub email: String,
    #[validate(custom(function = "validate_password_length"))]
    pub password: String,
}

impl User {
    /// Validate the input, hash the password and assign a new identifier.
    pub fn new(input: CreateUser) -> UserResult<Self> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        let password_hash = bcrypt::hash(&input.password, BCRYPT_COST)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Ok(Self {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            password_hash,
        })
    }

    /// Re-check the invariants of a record built outside [`User::new`].
    pub fn check(&self) -> UserResult<()> {
        if self.name.is_empty() {
            return Err(UserError::Validation("name: must not be empty".to_string()));
        }

        // Every bcrypt variant ($2a$, $2b$, $2y$)
        if !self.password_hash.starts_with("$2") {
            return Err(UserError::Validation(
                "password_hash: must be a bcrypt hash".to_string(),
            ));
        }

        Ok(())
    }

    /// Check `candidate` against the stored hash.
    ///
    /// Candidates over the byte ceiling and malformed hashes never match.
    pub fn validate_password(&self, candidate: &str) -> bool {
        if candidate.len() > MAX_PASSWORD_BYTES {
            return false;
        }
        bcrypt::verify(candidate, &self.password_hash).unwrap_or(false)
    }
}
