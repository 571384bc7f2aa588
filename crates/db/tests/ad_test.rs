//! Integration tests for the MongoDB store.
//!
//! Require a running MongoDB: `MONGODB_URL=mongodb://localhost:27017
//! cargo test -p shanyrak-db -- --ignored`.

use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Database;
use uuid::Uuid;

use shanyrak_core::account::{UserProfile, UserRepository};
use shanyrak_core::ad::{AdData, AdRepository};
use shanyrak_db::MongoStore;

/// Get database URL from environment or use default.
fn get_database_url() -> String {
    std::env::var("MONGODB_URL").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
}

/// Fresh database per test so runs never see each other's documents.
async fn setup() -> (Database, MongoStore) {
    let name = format!("shanyrak_test_{}", Uuid::new_v4().simple());
    let db = shanyrak_db::connect(&get_database_url(), &name)
        .await
        .expect("Failed to connect to database");
    let store = MongoStore::new(&db);
    (db, store)
}

fn flat() -> AdData {
    AdData {
        ad_type: "flat".to_string(),
        price: 50_000.0,
        address: "1 Main St".to_string(),
        area: 40.0,
        rooms_count: 2,
        description: "cozy".to_string(),
    }
}

#[tokio::test]
#[ignore = "requires MongoDB"]
async fn test_ad_create_and_find_by_id() {
    let (db, store) = setup().await;

    let id = store.create_ad(flat(), "owner").await.unwrap();
    let ad = store.get_ad_by_id(&id).await.unwrap().expect("ad should exist");

    assert_eq!(ad.id, id);
    assert_eq!(ad.data, flat());
    assert_eq!(ad.user_id, "owner");
    assert!(ad.media.is_empty());
    assert!(ad.comments.is_empty());

    db.drop().await.unwrap();
}

#[tokio::test]
#[ignore = "requires MongoDB"]
async fn test_malformed_and_unknown_ids() {
    let (db, store) = setup().await;
    let unknown = ObjectId::new().to_hex();

    assert!(store.get_ad_by_id("not-an-id").await.unwrap().is_none());
    assert!(store.get_ad_by_id(&unknown).await.unwrap().is_none());
    assert!(!store.update_ad(&unknown, flat()).await.unwrap());
    assert!(!store.delete_ad("not-an-id").await.unwrap());
    assert!(store.add_comment(&unknown, "hi", "u").await.unwrap().is_none());
    assert!(store.get_comments_by_ad_id(&unknown).await.unwrap().is_none());

    db.drop().await.unwrap();
}

#[tokio::test]
#[ignore = "requires MongoDB"]
async fn test_update_overwrites_fields_only() {
    let (db, store) = setup().await;
    let id = store.create_ad(flat(), "owner").await.unwrap();
    store
        .post_media(&id, &["http://cdn/a.png".to_string()])
        .await
        .unwrap();

    let mut changed = flat();
    changed.description = "renovated".to_string();
    assert!(store.update_ad(&id, changed.clone()).await.unwrap());

    let ad = store.get_ad_by_id(&id).await.unwrap().unwrap();
    assert_eq!(ad.data, changed);
    assert_eq!(ad.media, vec!["http://cdn/a.png".to_string()]);
    assert_eq!(ad.user_id, "owner");

    db.drop().await.unwrap();
}

#[tokio::test]
#[ignore = "requires MongoDB"]
async fn test_media_replace_and_pull() {
    let (db, store) = setup().await;
    let id = store.create_ad(flat(), "owner").await.unwrap();
    let urls: Vec<String> = (1..=4).map(|i| format!("http://cdn/{i}.png")).collect();

    assert!(store.post_media(&id, &urls).await.unwrap());
    assert!(
        store
            .delete_media(&id, &[urls[0].clone(), urls[2].clone()])
            .await
            .unwrap()
    );

    let ad = store.get_ad_by_id(&id).await.unwrap().unwrap();
    assert_eq!(ad.media, vec![urls[1].clone(), urls[3].clone()]);

    db.drop().await.unwrap();
}

#[tokio::test]
#[ignore = "requires MongoDB"]
async fn test_comment_lifecycle_scoped_to_author() {
    let (db, store) = setup().await;
    let id = store.create_ad(flat(), "owner").await.unwrap();

    let cid = store
        .add_comment(&id, "first", "alice")
        .await
        .unwrap()
        .expect("ad exists");

    assert!(!store.update_comment(&id, &cid, "x", "bob").await.unwrap());
    assert!(store.update_comment(&id, &cid, "edited", "alice").await.unwrap());

    let comments = store.get_comments_by_ad_id(&id).await.unwrap().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].content, "edited");
    assert_eq!(comments[0].author_id, "alice");

    assert!(!store.delete_comment(&id, &cid, "bob").await.unwrap());
    assert!(store.delete_comment(&id, &cid, "alice").await.unwrap());
    assert!(
        store
            .get_comments_by_ad_id(&id)
            .await
            .unwrap()
            .unwrap()
            .is_empty()
    );

    db.drop().await.unwrap();
}

#[tokio::test]
#[ignore = "requires MongoDB"]
async fn test_update_profile() {
    let (db, store) = setup().await;
    let users = db.collection::<Document>("users");
    let user_id = ObjectId::new();
    users
        .insert_one(doc! { "_id": user_id, "email": "a@b.kz" })
        .await
        .unwrap();

    let profile = UserProfile {
        phone: "+77010000000".to_string(),
        name: "Aigerim".to_string(),
        city: "Almaty".to_string(),
    };
    assert!(store.update_profile(&user_id.to_hex(), &profile).await.unwrap());
    assert!(
        !store
            .update_profile(&ObjectId::new().to_hex(), &profile)
            .await
            .unwrap()
    );

    let stored = users
        .find_one(doc! { "_id": user_id })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.get_str("city").unwrap(), "Almaty");
    assert_eq!(stored.get_str("email").unwrap(), "a@b.kz");

    db.drop().await.unwrap();
}
