//! Creates the administrator account, or resets its password when the
//! username already exists.
//!
//! Reads `ADMIN_USERNAME`, `ADMIN_PASSWORD` and `ADMIN_EMAIL` plus
//! `DATABASE_URL` from the environment or `.env`.

use std::env;
use std::sync::Arc;

use anyhow::{bail, Context};
use sea_orm::Database;
use tracing::info;

use portfolio_backend::auth::adapter::outgoing::security::Argon2Hasher;
use portfolio_backend::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use portfolio_backend::auth::application::ports::incoming::use_cases::{
    BootstrapOutcome, BootstrapSuperuserCommand, BootstrapSuperuserError,
    BootstrapSuperuserUseCase,
};
use portfolio_backend::auth::application::service::BootstrapSuperuserService;

fn required(name: &str) -> anyhow::Result<String> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("{name} must be set"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    if dotenvy::from_filename(format!(".env.{rust_env}")).is_err() {
        dotenvy::dotenv().ok();
    }

    let command = BootstrapSuperuserCommand {
        username: required("ADMIN_USERNAME")?,
        password: required("ADMIN_PASSWORD")?,
        email: required("ADMIN_EMAIL")?,
    };

    let db_url = required("DATABASE_URL")?;
    let db = Arc::new(
        Database::connect(db_url)
            .await
            .context("failed to connect to database")?,
    );

    let service = BootstrapSuperuserService::new(
        UserQueryPostgres::new(Arc::clone(&db)),
        UserRepositoryPostgres::new(db),
        Arc::new(Argon2Hasher::from_env()),
    );

    match service.execute(command).await {
        Ok(BootstrapOutcome::Created(id)) => info!(user_id = %id, "Superuser created"),
        Ok(BootstrapOutcome::PasswordReset(id)) => {
            info!(user_id = %id, "Superuser already existed, password reset")
        }
        Err(BootstrapSuperuserError::Validation(errors)) => {
            bail!("invalid admin credentials: {errors}")
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
