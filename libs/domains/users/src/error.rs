use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    /// Holds the id or email that was looked up
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    pub(crate) fn database(err: sea_orm::DbErr) -> Self {
        UserError::Storage(format!("Database error: {}", err))
    }
}

/// Errors from the authentication flow
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    User(#[from] UserError),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// The signing configuration is unusable
    #[error("Token signing failed: {0}")]
    Signing(String),
}

pub type AuthResult<T> = Result<T, AuthError>;

impl AuthError {
    /// Unknown email and wrong password, reported the same way to callers.
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidCredentials | AuthError::User(UserError::NotFound(_))
        )
    }
}
