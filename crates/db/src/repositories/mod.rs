//! Repository implementations over MongoDB collections.
//!
//! [`MongoStore`] implements both [`shanyrak_core::ad::AdRepository`] and
//! [`shanyrak_core::account::UserRepository`], so one handle backs every
//! route.

mod ad;
mod user;

use mongodb::bson::{Bson, Document, doc, oid::ObjectId};
use mongodb::{Collection, Database};

use crate::documents::{ADS_COLLECTION, AdDocument, USERS_COLLECTION};

/// MongoDB-backed store.
#[derive(Debug, Clone)]
pub struct MongoStore {
    ads: Collection<AdDocument>,
    users: Collection<Document>,
}

impl MongoStore {
    /// Create a store over the `ads` and `users` collections of `db`.
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            ads: db.collection(ADS_COLLECTION),
            users: db.collection(USERS_COLLECTION),
        }
    }
}

/// `_id` filter for a hex ObjectId, or `None` when the ID is malformed.
fn object_id_filter(id: &str) -> Option<Document> {
    ObjectId::parse_str(id).ok().map(|oid| doc! { "_id": oid })
}

/// `_id` value as stored by whoever created the document: an ObjectId when
/// the string parses as one, the raw string otherwise.
fn loose_id(id: &str) -> Bson {
    ObjectId::parse_str(id).map_or_else(|_| Bson::String(id.to_string()), Bson::ObjectId)
}
