//! Ad repository over the `ads` collection.

use mongodb::bson::{self, doc, oid::ObjectId};
use tracing::debug;

use shanyrak_core::ad::{Ad, AdData, AdError, AdRepository, Comment};

use super::{MongoStore, object_id_filter};
use crate::documents::AdDocument;

fn db_err(e: &mongodb::error::Error) -> AdError {
    AdError::repository(e.to_string())
}

impl AdRepository for MongoStore {
    async fn create_ad(&self, data: AdData, owner_id: &str) -> Result<String, AdError> {
        let result = self
            .ads
            .insert_one(AdDocument::new(data, owner_id))
            .await
            .map_err(|e| db_err(&e))?;

        result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| AdError::repository("inserted id is not an ObjectId"))
    }

    async fn get_ad_by_id(&self, id: &str) -> Result<Option<Ad>, AdError> {
        let Some(filter) = object_id_filter(id) else {
            debug!(ad_id = %id, "Malformed ad id");
            return Ok(None);
        };

        let doc = self.ads.find_one(filter).await.map_err(|e| db_err(&e))?;
        Ok(doc.map(Ad::from))
    }

    async fn update_ad(&self, id: &str, data: AdData) -> Result<bool, AdError> {
        let Some(filter) = object_id_filter(id) else {
            return Ok(false);
        };

        let update = doc! {
            "$set": {
                "type": data.ad_type,
                "price": data.price,
                "address": data.address,
                "area": data.area,
                "rooms_count": data.rooms_count,
                "description": data.description,
            }
        };
        let result = self
            .ads
            .update_one(filter, update)
            .await
            .map_err(|e| db_err(&e))?;
        Ok(result.matched_count > 0)
    }

    async fn delete_ad(&self, id: &str) -> Result<bool, AdError> {
        let Some(filter) = object_id_filter(id) else {
            return Ok(false);
        };

        let result = self.ads.delete_one(filter).await.map_err(|e| db_err(&e))?;
        Ok(result.deleted_count > 0)
    }

    async fn post_media(&self, id: &str, urls: &[String]) -> Result<bool, AdError> {
        let Some(filter) = object_id_filter(id) else {
            return Ok(false);
        };

        let result = self
            .ads
            .update_one(filter, doc! { "$set": { "media": urls.to_vec() } })
            .await
            .map_err(|e| db_err(&e))?;
        Ok(result.matched_count > 0)
    }

    async fn delete_media(&self, id: &str, urls: &[String]) -> Result<bool, AdError> {
        let Some(filter) = object_id_filter(id) else {
            return Ok(false);
        };

        let result = self
            .ads
            .update_one(filter, doc! { "$pull": { "media": { "$in": urls.to_vec() } } })
            .await
            .map_err(|e| db_err(&e))?;
        Ok(result.matched_count > 0)
    }

    async fn add_comment(
        &self,
        ad_id: &str,
        content: &str,
        author_id: &str,
    ) -> Result<Option<String>, AdError> {
        let Some(filter) = object_id_filter(ad_id) else {
            return Ok(None);
        };

        let comment_id = ObjectId::new();
        let update = doc! {
            "$push": {
                "comments": {
                    "_id": comment_id,
                    "content": content,
                    "created_at": bson::DateTime::now(),
                    "author_id": author_id,
                }
            }
        };
        let result = self
            .ads
            .update_one(filter, update)
            .await
            .map_err(|e| db_err(&e))?;

        Ok((result.matched_count > 0).then(|| comment_id.to_hex()))
    }

    async fn get_comments_by_ad_id(&self, ad_id: &str) -> Result<Option<Vec<Comment>>, AdError> {
        Ok(self
            .get_ad_by_id(ad_id)
            .await?
            .map(|ad| ad.comments))
    }

    async fn update_comment(
        &self,
        ad_id: &str,
        comment_id: &str,
        content: &str,
        author_id: &str,
    ) -> Result<bool, AdError> {
        let Some(filter) = comment_filter(ad_id, comment_id, author_id) else {
            return Ok(false);
        };

        let result = self
            .ads
            .update_one(filter, doc! { "$set": { "comments.$.content": content } })
            .await
            .map_err(|e| db_err(&e))?;
        Ok(result.matched_count > 0)
    }

    async fn delete_comment(
        &self,
        ad_id: &str,
        comment_id: &str,
        author_id: &str,
    ) -> Result<bool, AdError> {
        let (Some(filter), Ok(cid)) = (
            comment_filter(ad_id, comment_id, author_id),
            ObjectId::parse_str(comment_id),
        ) else {
            return Ok(false);
        };

        let update = doc! { "$pull": { "comments": { "_id": cid, "author_id": author_id } } };
        let result = self
            .ads
            .update_one(filter, update)
            .await
            .map_err(|e| db_err(&e))?;
        Ok(result.modified_count > 0)
    }
}

/// Matches the ad only if it holds a comment with this ID by this author.
fn comment_filter(ad_id: &str, comment_id: &str, author_id: &str) -> Option<bson::Document> {
    let ad = ObjectId::parse_str(ad_id).ok()?;
    let comment = ObjectId::parse_str(comment_id).ok()?;
    Some(doc! {
        "_id": ad,
        "comments": { "$elemMatch": { "_id": comment, "author_id": author_id } },
    })
}
