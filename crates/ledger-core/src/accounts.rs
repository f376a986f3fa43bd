use tracing::{info, warn};

use crate::error::AppError;
use crate::models::{Credentials, NewUser, UserAccount};
use crate::password;
use crate::traits::UserStore;

/// User account operations: the one place passwords are hashed and
/// name uniqueness is checked.
///
/// Both `POST /register` and `POST /users` go through [`AccountService::register`].
#[derive(Clone)]
pub struct AccountService<S: UserStore> {
    store: S,
}

impl<S: UserStore> AccountService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a user after checking the name is free.
    pub async fn register(&self, credentials: Credentials) -> Result<UserAccount, AppError> {
        credentials.validate()?;

        if self.store.find_by_name(&credentials.name).await?.is_some() {
            return Err(AppError::user_exists());
        }

        let password_hash = hash_blocking(credentials.password).await?;
        let user = self
            .store
            .insert_user(&NewUser {
                name: credentials.name,
                password_hash,
            })
            .await?;

        info!(user_id = user.id, name = %user.name, "User registered");
        Ok(user)
    }

    /// Verify a name/password pair. Unknown name and wrong password are
    /// indistinguishable to the caller.
    pub async fn login(&self, credentials: Credentials) -> Result<UserAccount, AppError> {
        let user = self.store.find_by_name(&credentials.name).await?;
        let name = credentials.name.clone();

        let verified = match user {
            Some(user) => {
                let hash = user.password_hash.clone();
                let ok = verify_blocking(credentials.password, hash).await?;
                ok.then_some(user)
            }
            None => {
                let password = credentials.password;
                tokio::task::spawn_blocking(move || password::verify_dummy(&password))
                    .await
                    .map_err(|e| AppError::Generic(format!("Password task failed: {e}")))?;
                None
            }
        };

        match verified {
            Some(user) => Ok(user),
            None => {
                warn!(name = %name, "Login failed");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    pub async fn list(&self) -> Result<Vec<UserAccount>, AppError> {
        self.store.list_users().await
    }

    pub async fn get(&self, id: i64) -> Result<UserAccount, AppError> {
        self.store
            .get_user(id)
            .await?
            .ok_or_else(AppError::user_not_found)
    }

    /// Overwrite name and password. The new password is hashed like on creation.
    pub async fn update(&self, id: i64, credentials: Credentials) -> Result<UserAccount, AppError> {
        credentials.validate()?;

        // Existence first so an unknown id is a 404 even if the name clashes.
        self.get(id).await?;

        if let Some(other) = self.store.find_by_name(&credentials.name).await?
            && other.id != id
        {
            return Err(AppError::user_exists());
        }

        let password_hash = hash_blocking(credentials.password).await?;
        self.store
            .update_user(
                id,
                &NewUser {
                    name: credentials.name,
                    password_hash,
                },
            )
            .await?
            .ok_or_else(AppError::user_not_found)
    }

    pub async fn delete(&self, id: i64) -> Result<UserAccount, AppError> {
        let user = self
            .store
            .delete_user(id)
            .await?
            .ok_or_else(AppError::user_not_found)?;
        info!(user_id = user.id, "User deleted");
        Ok(user)
    }
}

async fn hash_blocking(plaintext: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || password::hash_password(&plaintext))
        .await
        .map_err(|e| AppError::Generic(format!("Password task failed: {e}")))?
}

async fn verify_blocking(plaintext: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || password::verify_password(&plaintext, &hash))
        .await
        .map_err(|e| AppError::Generic(format!("Password task failed: {e}")))?
}
