//! BSON document shapes.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

use shanyrak_core::ad::{Ad, AdData, Comment};

/// Collection holding ads with their embedded comments.
pub const ADS_COLLECTION: &str = "ads";
/// Collection holding user accounts.
pub const USERS_COLLECTION: &str = "users";

/// An ad as stored in the `ads` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdDocument {
    /// Assigned by the server on insert.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Free-text category.
    #[serde(rename = "type")]
    pub ad_type: String,
    /// Asking price.
    pub price: f64,
    /// Street address.
    pub address: String,
    /// Area in square meters.
    pub area: f64,
    /// Number of rooms.
    pub rooms_count: i64,
    /// Listing description.
    pub description: String,
    /// Public media URLs; older documents may lack the field.
    #[serde(default)]
    pub media: Vec<String>,
    /// Owner identity.
    pub user_id: String,
    /// Creation time.
    pub created_at: bson::DateTime,
    /// Embedded comments.
    #[serde(default)]
    pub comments: Vec<CommentDocument>,
}

/// A comment embedded in an ad document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDocument {
    /// Comment ID, unique within its ad.
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Comment text.
    pub content: String,
    /// Creation time.
    pub created_at: bson::DateTime,
    /// Identity of the commenting user.
    pub author_id: String,
}

impl AdDocument {
    /// New document for `data` owned by `owner_id`, stamped now.
    #[must_use]
    pub fn new(data: AdData, owner_id: &str) -> Self {
        Self {
            id: None,
            ad_type: data.ad_type,
            price: data.price,
            address: data.address,
            area: data.area,
            rooms_count: data.rooms_count,
            description: data.description,
            media: Vec::new(),
            user_id: owner_id.to_string(),
            created_at: bson::DateTime::now(),
            comments: Vec::new(),
        }
    }
}

impl From<AdDocument> for Ad {
    fn from(doc: AdDocument) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            data: AdData {
                ad_type: doc.ad_type,
                price: doc.price,
                address: doc.address,
                area: doc.area,
                rooms_count: doc.rooms_count,
                description: doc.description,
            },
            media: doc.media,
            user_id: doc.user_id,
            created_at: to_chrono(doc.created_at),
            comments: doc.comments.into_iter().map(Comment::from).collect(),
        }
    }
}

impl From<CommentDocument> for Comment {
    fn from(doc: CommentDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            content: doc.content,
            created_at: to_chrono(doc.created_at),
            author_id: doc.author_id,
        }
    }
}

fn to_chrono(dt: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(dt.timestamp_millis()).unwrap_or_default()
}
