//! Account service implementation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shanyrak_shared::AppError;

/// Contact fields a user may overwrite on their own account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Phone number, free format.
    pub phone: String,
    /// Display name.
    pub name: String,
    /// City.
    pub city: String,
}

/// Account operation errors.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Repository operation failed.
    #[error("repository error: {0}")]
    Repository(String),
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::Repository(msg) => Self::Database(msg),
        }
    }
}

/// Repository trait for user persistence.
pub trait UserRepository: Send + Sync {
    /// Overwrite phone, name, and city of a user. Returns whether a user
    /// document matched.
    fn update_profile(
        &self,
        user_id: &str,
        profile: &UserProfile,
    ) -> impl std::future::Future<Output = Result<bool, AccountError>> + Send;
}

/// Account service.
pub struct AccountService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> AccountService<R> {
    /// Create a new account service.
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Overwrite the caller's profile and echo the submitted values.
    ///
    /// The echo does not depend on whether a user document matched; users
    /// are provisioned by the identity service, not here.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails.
    pub async fn patch_profile(
        &self,
        user_id: &str,
        profile: UserProfile,
    ) -> Result<UserProfile, AccountError> {
        let matched = self.repo.update_profile(user_id, &profile).await?;
        if !matched {
            tracing::debug!(user_id = %user_id, "Profile update matched no user");
        }
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryStore;

    fn profile() -> UserProfile {
        UserProfile {
            phone: "+7 701 000 00 00".to_string(),
            name: "Aigerim".to_string(),
            city: "Almaty".to_string(),
        }
    }

    #[tokio::test]
    async fn test_patch_existing_user() {
        let store = Arc::new(InMemoryStore::new());
        store.insert_user("user-1");
        let service = AccountService::new(store.clone());

        let echoed = service.patch_profile("user-1", profile()).await.unwrap();

        assert_eq!(echoed, profile());
        assert_eq!(store.user_profile("user-1"), Some(profile()));
    }

    #[tokio::test]
    async fn test_patch_unknown_user_still_echoes() {
        let store = Arc::new(InMemoryStore::new());
        let service = AccountService::new(store.clone());

        let echoed = service.patch_profile("ghost", profile()).await.unwrap();

        assert_eq!(echoed, profile());
        assert_eq!(store.user_profile("ghost"), None);
    }
}
