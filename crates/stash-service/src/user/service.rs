//! User registration and profile service.

use std::sync::Arc;

use tracing::info;

use stash_auth::PasswordDigest;
use stash_core::error::AppError;
use stash_core::result::AppResult;
use stash_database::UserStore;
use stash_entity::user::{NewUser, User};

/// Handles registration and profile reads.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    hasher: PasswordDigest,
}

impl UserService {
    /// Creates a new user service over the given store.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self {
            users,
            hasher: PasswordDigest::new(),
        }
    }

    /// Register a new user.
    ///
    /// Both fields are required and the email must not already be taken.
    /// The stored record carries only the password digest, never the
    /// plaintext.
    pub async fn register(
        &self,
        email: Option<String>,
        password: Option<String>,
    ) -> AppResult<User> {
        let email = email
            .filter(|e| !e.is_empty())
            .ok_or_else(|| AppError::validation("Missing email"))?;
        let password = password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::validation("Missing password"))?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::validation("Already exists"));
        }

        let user = self
            .users
            .insert(&NewUser {
                email,
                password_digest: self.hasher.digest(&password),
            })
            .await?;

        info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Fetch the profile of an authenticated user.
    ///
    /// A resolved token whose user no longer exists is treated as an
    /// authentication failure.
    pub async fn get_me(&self, user_id: i64) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::authentication("Unauthorized"))
    }
}
