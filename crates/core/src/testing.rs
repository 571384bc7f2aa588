//! In-memory repositories for tests.
//!
//! Mirrors the MongoDB store's matching rules so services and routes can be
//! exercised without a database.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use crate::account::{AccountError, UserProfile, UserRepository};
use crate::ad::{Ad, AdData, AdError, AdRepository, Comment};

/// In-memory ad and user store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    ads: Mutex<HashMap<String, Ad>>,
    users: Mutex<HashMap<String, Option<UserProfile>>>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user without profile fields.
    pub fn insert_user(&self, user_id: &str) {
        self.users.lock().unwrap().insert(user_id.to_string(), None);
    }

    /// Profile fields of a user, if the user exists and has any.
    #[must_use]
    pub fn user_profile(&self, user_id: &str) -> Option<UserProfile> {
        self.users.lock().unwrap().get(user_id).cloned().flatten()
    }

    fn with_ad<T>(&self, id: &str, f: impl FnOnce(&mut Ad) -> T) -> Option<T> {
        self.ads.lock().unwrap().get_mut(id).map(f)
    }
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

impl AdRepository for InMemoryStore {
    async fn create_ad(&self, data: AdData, owner_id: &str) -> Result<String, AdError> {
        let id = new_id();
        let ad = Ad {
            id: id.clone(),
            data,
            media: Vec::new(),
            user_id: owner_id.to_string(),
            created_at: Utc::now(),
            comments: Vec::new(),
        };
        self.ads.lock().unwrap().insert(id.clone(), ad);
        Ok(id)
    }

    async fn get_ad_by_id(&self, id: &str) -> Result<Option<Ad>, AdError> {
        Ok(self.ads.lock().unwrap().get(id).cloned())
    }

    async fn update_ad(&self, id: &str, data: AdData) -> Result<bool, AdError> {
        Ok(self.with_ad(id, |ad| ad.data = data).is_some())
    }

    async fn delete_ad(&self, id: &str) -> Result<bool, AdError> {
        Ok(self.ads.lock().unwrap().remove(id).is_some())
    }

    async fn post_media(&self, id: &str, urls: &[String]) -> Result<bool, AdError> {
        Ok(self.with_ad(id, |ad| ad.media = urls.to_vec()).is_some())
    }

    async fn delete_media(&self, id: &str, urls: &[String]) -> Result<bool, AdError> {
        Ok(self
            .with_ad(id, |ad| ad.media.retain(|url| !urls.contains(url)))
            .is_some())
    }

    async fn add_comment(
        &self,
        ad_id: &str,
        content: &str,
        author_id: &str,
    ) -> Result<Option<String>, AdError> {
        Ok(self.with_ad(ad_id, |ad| {
            let id = new_id();
            ad.comments.push(Comment {
                id: id.clone(),
                content: content.to_string(),
                created_at: Utc::now(),
                author_id: author_id.to_string(),
            });
            id
        }))
    }

    async fn get_comments_by_ad_id(&self, ad_id: &str) -> Result<Option<Vec<Comment>>, AdError> {
        Ok(self.with_ad(ad_id, |ad| ad.comments.clone()))
    }

    async fn update_comment(
        &self,
        ad_id: &str,
        comment_id: &str,
        content: &str,
        author_id: &str,
    ) -> Result<bool, AdError> {
        Ok(self
            .with_ad(ad_id, |ad| {
                ad.comments
                    .iter_mut()
                    .find(|c| c.id == comment_id && c.author_id == author_id)
                    .map(|c| c.content = content.to_string())
                    .is_some()
            })
            .unwrap_or(false))
    }

    async fn delete_comment(
        &self,
        ad_id: &str,
        comment_id: &str,
        author_id: &str,
    ) -> Result<bool, AdError> {
        Ok(self
            .with_ad(ad_id, |ad| {
                let before = ad.comments.len();
                ad.comments
                    .retain(|c| !(c.id == comment_id && c.author_id == author_id));
                ad.comments.len() != before
            })
            .unwrap_or(false))
    }
}

impl UserRepository for InMemoryStore {
    async fn update_profile(
        &self,
        user_id: &str,
        profile: &UserProfile,
    ) -> Result<bool, AccountError> {
        let mut users = self.users.lock().unwrap();
        Ok(users
            .get_mut(user_id)
            .map(|slot| *slot = Some(profile.clone()))
            .is_some())
    }
}
