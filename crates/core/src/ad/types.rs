//! Ad types and data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client-writable ad fields.
///
/// These are exactly the fields an update overwrites; owner, creation time,
/// media, and comments never come from this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdData {
    /// Free-text category, e.g. "flat" or "house".
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
}

/// A stored ad.
#[derive(Debug, Clone, PartialEq)]
pub struct Ad {
    /// Ad ID.
    pub id: String,
    /// Client-writable fields.
    pub data: AdData,
    /// Public URLs of attached media, in upload order.
    pub media: Vec<String>,
    /// Owner identity, set at creation.
    pub user_id: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Embedded comments, oldest first.
    pub comments: Vec<Comment>,
}

impl Ad {
    /// Whether `user_id` owns this ad.
    #[must_use]
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

/// A comment embedded in an ad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    /// Comment ID, unique within its ad.
    pub id: String,
    /// Comment text.
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Identity of the commenting user.
    pub author_id: String,
}
