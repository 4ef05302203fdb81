use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::ports::incoming::use_cases::{
    BootstrapOutcome, BootstrapSuperuserCommand, BootstrapSuperuserError,
    BootstrapSuperuserUseCase,
};
use crate::auth::application::ports::outgoing::{
    NewSuperuser, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};
use crate::shared::validation::{required_email, required_text, ValidationErrors};

/// Creates the administrator account, or resets the password of an existing
/// one, then proves the stored hash accepts the supplied password.
pub struct BootstrapSuperuserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> BootstrapSuperuserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

fn validate(
    command: BootstrapSuperuserCommand,
) -> Result<BootstrapSuperuserCommand, BootstrapSuperuserError> {
    let mut errors = ValidationErrors::new();
    let username = required_text(&mut errors, "username", &command.username, Some(150));
    let email = required_email(&mut errors, "email", &command.email);
    if command.password.is_empty() {
        errors.add("password", crate::shared::validation::REQUIRED);
    }

    errors
        .into_result()
        .map_err(BootstrapSuperuserError::Validation)?;

    Ok(BootstrapSuperuserCommand {
        username,
        password: command.password,
        email,
    })
}

fn map_repo_err(e: UserRepositoryError) -> BootstrapSuperuserError {
    BootstrapSuperuserError::RepositoryError(e.to_string())
}

#[async_trait]
impl<Q, R> BootstrapSuperuserUseCase for BootstrapSuperuserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: BootstrapSuperuserCommand,
    ) -> Result<BootstrapOutcome, BootstrapSuperuserError> {
        let command = validate(command)?;

        let password_hash = self
            .password_hasher
            .hash_password(&command.password)
            .await
            .map_err(|e| BootstrapSuperuserError::HashingFailed(e.to_string()))?;

        let existing = self
            .query
            .find_by_username(&command.username)
            .await
            .map_err(|e| BootstrapSuperuserError::RepositoryError(e.to_string()))?;

        let outcome = match existing {
            Some(user) => {
                self.repository
                    .promote_with_password(user.id, &command.email, password_hash)
                    .await
                    .map_err(map_repo_err)?;
                info!(user_id = %user.id, "Superuser password reset");
                BootstrapOutcome::PasswordReset(user.id)
            }
            None => {
                let id = self
                    .repository
                    .create_superuser(NewSuperuser {
                        username: command.username.clone(),
                        email: command.email.clone(),
                        password_hash,
                    })
                    .await
                    .map_err(map_repo_err)?;
                info!(user_id = %id, "Superuser created");
                BootstrapOutcome::Created(id)
            }
        };

        let stored = self
            .query
            .find_by_id(outcome.user_id())
            .await
            .map_err(|e| BootstrapSuperuserError::RepositoryError(e.to_string()))?
            .ok_or_else(|| map_repo_err(UserRepositoryError::NotFound))?;

        let verified = self
            .password_hasher
            .verify_password(&command.password, &stored.password_hash)
            .await
            .map_err(|e| BootstrapSuperuserError::HashingFailed(e.to_string()))?;

        if !verified || !stored.is_superuser {
            return Err(BootstrapSuperuserError::VerificationFailed);
        }

        Ok(outcome)
    }
}
