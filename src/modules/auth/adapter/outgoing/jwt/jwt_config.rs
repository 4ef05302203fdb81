use std::env;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least 32 characters long for HS256")]
    SecretTooShort,

    #[error("invalid {0} value")]
    InvalidExpiry(&'static str),
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    pub fn from_env() -> Result<Self, JwtConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| JwtConfigError::MissingSecret)?;
        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "portfolio".to_string());
        let expiry = env::var("JWT_ACCESS_EXPIRY").ok();

        Self::build(secret_key, issuer, expiry.as_deref())
    }

    fn build(
        secret_key: String,
        issuer: String,
        access_expiry: Option<&str>,
    ) -> Result<Self, JwtConfigError> {
        if secret_key.len() < 32 {
            return Err(JwtConfigError::SecretTooShort);
        }

        let access_token_expiry = match access_expiry {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| JwtConfigError::InvalidExpiry("JWT_ACCESS_EXPIRY"))?,
            None => 3600,
        };

        // Between one second and one day.
        if !(1..=86_400).contains(&access_token_expiry) {
            return Err(JwtConfigError::InvalidExpiry("JWT_ACCESS_EXPIRY"));
        }

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
