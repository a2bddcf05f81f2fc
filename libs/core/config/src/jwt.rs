//! Token signing configuration.

use crate::{env_parse_or, env_required, ConfigError, FromEnv};

/// Shortest accepted signing secret.
pub const MIN_SECRET_LEN: usize = 32;

/// Token lifetime used when `JWT_EXPIRES_IN` is unset.
pub const DEFAULT_EXPIRES_IN_SECS: u64 = 300;

/// Longest accepted token lifetime (one year).
pub const MAX_EXPIRES_IN_SECS: u64 = 365 * 24 * 60 * 60;

/// HS256 signing configuration for access tokens.
///
/// Loaded once at startup and handed to the authentication flow; it is never
/// mutated afterwards.
///
/// Environment variables:
/// - `JWT_SECRET` (required) - shared signing secret, at least 32 characters
/// - `JWT_EXPIRES_IN` (optional, default: 300) - token lifetime in seconds, at most one year
///
/// # Example
///
/// ```ignore
/// use core_config::{FromEnv, JwtConfig};
///
/// let config = JwtConfig::from_env()?;
/// let config = JwtConfig::new("a-test-secret-that-is-long-enough-to-sign", 60)?;
/// ```
#[derive(Clone)]
pub struct JwtConfig {
    /// Shared HS256 secret
    pub secret: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expires_in: u64) -> Result<Self, ConfigError> {
        let secret = secret.into();
        validate_secret(&secret)?;
        validate_expires_in(expires_in)?;
        Ok(Self { secret, expires_in })
    }
}

// Keep the secret out of logs and panic messages.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;
        let expires_in = env_parse_or("JWT_EXPIRES_IN", DEFAULT_EXPIRES_IN_SECS)?;
        Self::new(secret, expires_in)
    }
}

fn validate_secret(secret: &str) -> Result<(), ConfigError> {
    if secret.len() < MIN_SECRET_LEN {
        return Err(ConfigError::ParseError {
            key: "JWT_SECRET".to_string(),
            details: format!(
                "must be at least {} characters (got {}). Generate one with: openssl rand -base64 32",
                MIN_SECRET_LEN,
                secret.len()
            ),
        });
    }
    Ok(())
}

fn validate_expires_in(expires_in: u64) -> Result<(), ConfigError> {
    if expires_in == 0 {
        return Err(ConfigError::ParseError {
            key: "JWT_EXPIRES_IN".to_string(),
            details: "token lifetime must be at least one second".to_string(),
        });
    }
    if expires_in > MAX_EXPIRES_IN_SECS {
        return Err(ConfigError::ParseError {
            key: "JWT_EXPIRES_IN".to_string(),
            details: format!(
                "token lifetime must be at most {} seconds (got {})",
                MAX_EXPIRES_IN_SECS, expires_in
            ),
        });
    }
    Ok(())
}
