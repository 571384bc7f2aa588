//! Ad service implementation.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::warn;

use super::error::AdError;
use super::types::{Ad, AdData, Comment};
use crate::storage::{MediaUpload, StorageService};

/// Repository trait for ad persistence.
///
/// Every method is a single-document operation. Mutations report whether a
/// document matched instead of failing, so callers decide what "nothing
/// matched" means.
pub trait AdRepository: Send + Sync {
    /// Insert a new ad owned by `owner_id` and return its ID.
    ///
    /// Stamps the owner and creation time; media and comments start empty.
    fn create_ad(
        &self,
        data: AdData,
        owner_id: &str,
    ) -> impl std::future::Future<Output = Result<String, AdError>> + Send;

    /// Find ad by ID. Malformed IDs are reported as absent.
    fn get_ad_by_id(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Ad>, AdError>> + Send;

    /// Overwrite the client-writable fields.
    fn update_ad(
        &self,
        id: &str,
        data: AdData,
    ) -> impl std::future::Future<Output = Result<bool, AdError>> + Send;

    /// Delete ad by ID.
    fn delete_ad(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<bool, AdError>> + Send;

    /// Replace the media list wholesale.
    fn post_media(
        &self,
        id: &str,
        urls: &[String],
    ) -> impl std::future::Future<Output = Result<bool, AdError>> + Send;

    /// Remove every media entry contained in `urls`.
    fn delete_media(
        &self,
        id: &str,
        urls: &[String],
    ) -> impl std::future::Future<Output = Result<bool, AdError>> + Send;

    /// Append a comment and return its ID, or `None` when no ad matched.
    fn add_comment(
        &self,
        ad_id: &str,
        content: &str,
        author_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, AdError>> + Send;

    /// All comments of an ad, or `None` when the ad does not exist.
    fn get_comments_by_ad_id(
        &self,
        ad_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Vec<Comment>>, AdError>> + Send;

    /// Replace the content of the comment matching both ID and author.
    fn update_comment(
        &self,
        ad_id: &str,
        comment_id: &str,
        content: &str,
        author_id: &str,
    ) -> impl std::future::Future<Output = Result<bool, AdError>> + Send;

    /// Remove the comment matching both ID and author.
    fn delete_comment(
        &self,
        ad_id: &str,
        comment_id: &str,
        author_id: &str,
    ) -> impl std::future::Future<Output = Result<bool, AdError>> + Send;
}

/// Ad service, built per request around shared adapters.
pub struct AdService<R: AdRepository> {
    repo: Arc<R>,
    storage: Option<Arc<StorageService>>,
}

impl<R: AdRepository> AdService<R> {
    /// Create a new ad service without object storage.
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            storage: None,
        }
    }

    /// Attach object storage for media operations.
    #[must_use]
    pub fn with_storage(mut self, storage: Arc<StorageService>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Create an ad owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails.
    pub async fn create_ad(&self, data: AdData, owner_id: &str) -> Result<String, AdError> {
        self.repo.create_ad(data, owner_id).await
    }

    /// Get ad by ID.
    ///
    /// # Errors
    ///
    /// Returns `AdError::NotFound` if no ad has this ID.
    pub async fn get_ad(&self, id: &str) -> Result<Ad, AdError> {
        self.repo
            .get_ad_by_id(id)
            .await?
            .ok_or_else(|| AdError::not_found(id))
    }

    /// Overwrite the client-writable fields of an ad.
    ///
    /// # Errors
    ///
    /// Returns an error if the ad does not exist or `user_id` does not own it.
    pub async fn update_ad(&self, id: &str, data: AdData, user_id: &str) -> Result<(), AdError> {
        self.get_owned(id, user_id).await?;

        if !self.repo.update_ad(id, data).await? {
            return Err(AdError::not_found(id));
        }
        Ok(())
    }

    /// Delete an ad together with its comments.
    ///
    /// # Errors
    ///
    /// Returns an error if the ad does not exist or `user_id` does not own it.
    pub async fn delete_ad(&self, id: &str, user_id: &str) -> Result<(), AdError> {
        self.get_owned(id, user_id).await?;

        if !self.repo.delete_ad(id).await? {
            return Err(AdError::not_found(id));
        }
        Ok(())
    }

    /// Store uploaded files and make them the ad's entire media list.
    ///
    /// All files are validated before anything is written, and two files
    /// may not share a storage key. Previously attached objects stay in
    /// storage.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Ad does not exist or is owned by someone else
    /// - Storage is not configured
    /// - A file is too large or has a disallowed MIME type
    /// - Storage or repository operation fails
    pub async fn upload_media(
        &self,
        id: &str,
        files: Vec<MediaUpload>,
        user_id: &str,
    ) -> Result<Vec<String>, AdError> {
        self.get_owned(id, user_id).await?;
        let storage = self.storage()?;

        let mut keys = HashSet::with_capacity(files.len());
        for file in &files {
            storage.validate_upload(&file.content_type, file.data.len() as u64)?;
            let key = StorageService::generate_storage_key(id, &file.filename)?;
            if !keys.insert(key) {
                return Err(AdError::DuplicateMedia(file.filename.clone()));
            }
        }

        let mut urls = Vec::with_capacity(files.len());
        for file in files {
            urls.push(storage.upload(id, file).await?);
        }

        if !self.repo.post_media(id, &urls).await? {
            return Err(AdError::not_found(id));
        }
        Ok(urls)
    }

    /// Delete media objects and remove their URLs from the ad.
    ///
    /// Only objects listed in this ad's media are deleted from storage. URLs
    /// outside the configured storage are only removed from the ad.
    ///
    /// # Errors
    ///
    /// Returns an error if the ad does not exist or is owned by someone else,
    /// storage is not configured, or the repository fails.
    pub async fn delete_media(
        &self,
        id: &str,
        urls: &[String],
        user_id: &str,
    ) -> Result<(), AdError> {
        let ad = self.get_owned(id, user_id).await?;
        let storage = self.storage()?;

        for url in urls {
            if !ad.media.contains(url) {
                warn!(ad_id = %id, url = %url, "Media URL not attached to this ad");
                continue;
            }
            let Some(key) = storage.key_from_url(url) else {
                warn!(ad_id = %id, url = %url, "Media URL outside object storage");
                continue;
            };
            if let Err(e) = storage.delete(&key).await {
                warn!(ad_id = %id, key = %key, error = %e, "Failed to delete media object");
            }
        }

        if !self.repo.delete_media(id, urls).await? {
            return Err(AdError::not_found(id));
        }
        Ok(())
    }

    /// Add a comment by `author_id` and return the comment ID.
    ///
    /// # Errors
    ///
    /// Returns `AdError::NotFound` if the ad does not exist.
    pub async fn add_comment(
        &self,
        ad_id: &str,
        content: &str,
        author_id: &str,
    ) -> Result<String, AdError> {
        self.repo
            .add_comment(ad_id, content, author_id)
            .await?
            .ok_or_else(|| AdError::not_found(ad_id))
    }

    /// List comments of an ad.
    ///
    /// # Errors
    ///
    /// Returns `AdError::NotFound` if the ad does not exist and
    /// `AdError::NoComments` if it has none.
    pub async fn get_comments(&self, ad_id: &str) -> Result<Vec<Comment>, AdError> {
        let comments = self
            .repo
            .get_comments_by_ad_id(ad_id)
            .await?
            .ok_or_else(|| AdError::not_found(ad_id))?;

        if comments.is_empty() {
            return Err(AdError::NoComments(ad_id.to_string()));
        }
        Ok(comments)
    }

    /// Change the content of one of the author's comments.
    ///
    /// # Errors
    ///
    /// Returns `AdError::CommentNotFound` unless a comment with this ID
    /// written by `author_id` exists on the ad.
    pub async fn update_comment(
        &self,
        ad_id: &str,
        comment_id: &str,
        content: &str,
        author_id: &str,
    ) -> Result<(), AdError> {
        if !self
            .repo
            .update_comment(ad_id, comment_id, content, author_id)
            .await?
        {
            return Err(comment_not_found(ad_id, comment_id));
        }
        Ok(())
    }

    /// Delete one of the author's comments.
    ///
    /// # Errors
    ///
    /// Returns `AdError::CommentNotFound` unless a comment with this ID
    /// written by `author_id` exists on the ad.
    pub async fn delete_comment(
        &self,
        ad_id: &str,
        comment_id: &str,
        author_id: &str,
    ) -> Result<(), AdError> {
        if !self
            .repo
            .delete_comment(ad_id, comment_id, author_id)
            .await?
        {
            return Err(comment_not_found(ad_id, comment_id));
        }
        Ok(())
    }

    fn storage(&self) -> Result<&StorageService, AdError> {
        self.storage.as_deref().ok_or(AdError::StorageNotConfigured)
    }

    async fn get_owned(&self, id: &str, user_id: &str) -> Result<Ad, AdError> {
        let ad = self.get_ad(id).await?;
        if !ad.is_owned_by(user_id) {
            return Err(AdError::NotOwner {
                ad_id: id.to_string(),
                user_id: user_id.to_string(),
            });
        }
        Ok(ad)
    }
}

fn comment_not_found(ad_id: &str, comment_id: &str) -> AdError {
    AdError::CommentNotFound {
        ad_id: ad_id.to_string(),
        comment_id: comment_id.to_string(),
    }
}
