//! Password login issuing short-lived HS256 access tokens.
//!
//! Tokens are stateless: there is no refresh, whitelist or revocation. A token
//! stays valid until its `exp` claim passes.

use chrono::{Duration, Utc};
use core_config::JwtConfig;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};
use crate::models::User;
use crate::repository::UserRepository;
use crate::service::UserService;

/// Access token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: Uuid,
    /// Expiry, seconds since the epoch
    pub exp: i64,
    /// Issued at, seconds since the epoch
    pub iat: i64,
}

/// Login result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
}

/// Verifies credentials through [`UserService`] and signs access tokens.
#[derive(Clone)]
pub struct Authenticator<R: UserRepository> {
    users: UserService<R>,
    expires_in: i64,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl<R: UserRepository> Authenticator<R> {
    pub fn new(users: UserService<R>, config: &JwtConfig) -> Self {
        Self {
            users,
            expires_in: i64::try_from(config.expires_in).unwrap_or(i64::MAX),
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
        }
    }

    /// Exchange an email and password for an access token.
    ///
    /// An unknown email comes back as `AuthError::User(UserError::NotFound)` and
    /// a wrong password as `AuthError::InvalidCredentials`; use
    /// [`AuthError::is_invalid_credentials`] to report both the same way.
    #[instrument(skip(self, email, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> AuthResult<AccessToken> {
        let user = self.users.find_by_email(email).await?;

        if !user.validate_password(password) {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = self.issue(user.id)?;
        Ok(AccessToken { access_token })
    }

    /// Sign a token for `user_id` expiring after the configured lifetime.
    pub fn issue(&self, user_id: Uuid) -> AuthResult<String> {
        let now = Utc::now();
        let exp = Duration::try_seconds(self.expires_in)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| AuthError::Signing("token lifetime out of range".to_string()))?;

        let claims = Claims {
            sub: user_id,
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Check the signature and expiry of `token` and return its claims.
    pub fn verify(&self, token: &str) -> AuthResult<Claims> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    /// Verify `token` and load the user it was issued to.
    #[instrument(skip(self, token))]
    pub async fn resolve(&self, token: &str) -> AuthResult<User> {
        let claims = self.verify(token)?;
        Ok(self.users.find_by_id(claims.sub).await?)
    }
}
