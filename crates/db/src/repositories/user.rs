//! User repository over the `users` collection.

use mongodb::bson::doc;

use shanyrak_core::account::{AccountError, UserProfile, UserRepository};

use super::{MongoStore, loose_id};

impl UserRepository for MongoStore {
    async fn update_profile(
        &self,
        user_id: &str,
        profile: &UserProfile,
    ) -> Result<bool, AccountError> {
        let update = doc! {
            "$set": {
                "phone": profile.phone.as_str(),
                "name": profile.name.as_str(),
                "city": profile.city.as_str(),
            }
        };

        let result = self
            .users
            .update_one(doc! { "_id": loose_id(user_id) }, update)
            .await
            .map_err(|e| AccountError::Repository(e.to_string()))?;
        Ok(result.matched_count > 0)
    }
}
