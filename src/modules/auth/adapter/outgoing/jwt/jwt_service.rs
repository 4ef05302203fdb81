use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(
        &self,
        user_id: Uuid,
        is_superuser: bool,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.access_token_expiry);

        let claims = TokenClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            token_type: ACCESS_TOKEN.to_string(),
            is_superuser,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::warn!(error = %e, "Token verification failed: malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }

    fn access_token_ttl(&self) -> i64 {
        self.config.access_token_expiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str, expiry: i64) -> JwtConfig {
        JwtConfig {
            secret_key: secret.to_string(),
            issuer: "portfolio-test".to_string(),
            access_token_expiry: expiry,
        }
    }

    fn service() -> JwtTokenService {
        JwtTokenService::new(config("test_secret_key_for_testing_purposes_only", 3600))
    }

    #[test]
    fn test_generate_and_verify_superuser_token() {
        let svc = service();
        let user_id = Uuid::new_v4();

        let token = svc.generate_access_token(user_id, true).unwrap();
        let claims = svc.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.token_type, ACCESS_TOKEN);
        assert_eq!(claims.iss, "portfolio-test");
        assert!(claims.is_superuser);
    }

    #[test]
    fn test_regular_user_token_keeps_flag_false() {
        let svc = service();
        let token = svc.generate_access_token(Uuid::new_v4(), false).unwrap();
        assert!(!svc.verify_token(&token).unwrap().is_superuser);
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let err = service().verify_token("invalid.jwt.token").unwrap_err();
        assert_eq!(err, TokenError::MalformedToken);
    }

    #[test]
    fn test_expired_token() {
        // Expired beyond the 30s leeway.
        let svc = JwtTokenService::new(config("test_secret_key_for_testing_purposes_only", -35));
        let token = svc.generate_access_token(Uuid::new_v4(), true).unwrap();

        assert_eq!(svc.verify_token(&token).unwrap_err(), TokenError::TokenExpired);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let token = service()
            .generate_access_token(Uuid::new_v4(), true)
            .unwrap();
        let other = JwtTokenService::new(config("a_completely_different_secret_value_123", 3600));

        assert_eq!(other.verify_token(&token).unwrap_err(), TokenError::InvalidSignature);
    }

    #[test]
    fn test_token_from_other_issuer_is_rejected() {
        let mut foreign = config("test_secret_key_for_testing_purposes_only", 3600);
        foreign.issuer = "someone-else".to_string();
        let token = JwtTokenService::new(foreign)
            .generate_access_token(Uuid::new_v4(), true)
            .unwrap();

        assert!(service().verify_token(&token).is_err());
    }
}
