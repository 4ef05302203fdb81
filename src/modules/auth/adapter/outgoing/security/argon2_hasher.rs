use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;
use tracing::warn;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};

const DEFAULT_MEMORY_KIB: u32 = 19 * 1024;
const DEFAULT_ITERATIONS: u32 = 2;
const DEFAULT_PARALLELISM: u32 = 1;

/// Argon2id hasher. Hashing runs on the blocking pool.
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            params: Params::new(DEFAULT_MEMORY_KIB, DEFAULT_ITERATIONS, DEFAULT_PARALLELISM, None)
                .unwrap_or_default(),
        }
    }
}

impl Argon2Hasher {
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, HashError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|_| HashError::HashFailed)?;
        Ok(Self { params })
    }

    /// Reads `ARGON2_MEMORY_KIB`, `ARGON2_ITERATIONS` and `ARGON2_PARALLELISM`,
    /// falling back to the defaults when unset or invalid.
    pub fn from_env() -> Self {
        let read = |key: &str, default: u32| -> u32 {
            std::env::var(key)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        };

        let memory_kib = read("ARGON2_MEMORY_KIB", DEFAULT_MEMORY_KIB);
        let iterations = read("ARGON2_ITERATIONS", DEFAULT_ITERATIONS);
        let parallelism = read("ARGON2_PARALLELISM", DEFAULT_PARALLELISM);

        Self::with_params(memory_kib, iterations, parallelism).unwrap_or_else(|_| {
            warn!("Invalid Argon2 parameters in environment, using defaults");
            Self::default()
        })
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            // Parameters are read back from the PHC string.
            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> Argon2Hasher {
        Argon2Hasher::with_params(1024, 1, 1).unwrap()
    }

    #[tokio::test]
    async fn test_hash_and_verify_password() {
        let hasher = fast_hasher();

        let hash = hasher.hash_password("SecurePassword123").await.unwrap();
        assert!(hash.starts_with("$argon2id$"));

        assert!(hasher.verify_password("SecurePassword123", &hash).await.unwrap());
        assert!(!hasher.verify_password("WrongPassword", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_same_password_gets_distinct_salts() {
        let hasher = fast_hasher();
        let a = hasher.hash_password("pw").await.unwrap();
        let b = hasher.hash_password("pw").await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_verify_rejects_garbage_hash() {
        let result = fast_hasher().verify_password("pw", "invalid-hash").await;
        assert!(matches!(result, Err(HashError::VerifyFailed)));
    }

    #[test]
    fn test_invalid_params_are_rejected() {
        assert!(Argon2Hasher::with_params(1, 0, 0).is_err());
    }
}
