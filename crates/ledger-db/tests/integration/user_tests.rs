use ledger_core::AppError;
use ledger_core::models::NewUser;
use ledger_core::traits::UserStore;

use crate::integration::common::setup_test_db;

fn new_user(name: &str) -> NewUser {
    NewUser {
        name: name.into(),
        password_hash: format!("$argon2id$fake${name}"),
    }
}

#[tokio::test]
async fn insert_and_find_user() {
    let (db, _dir) = setup_test_db().await;
    let repo = db.user_repo();

    let created = repo.insert_user(&new_user("alice")).await.unwrap();
    assert!(created.id > 0);

    let by_id = repo.get_user(created.id).await.unwrap();
    let by_name = repo.find_by_name("alice").await.unwrap();
    assert_eq!(by_id, Some(created.clone()));
    assert_eq!(by_name, Some(created));
    assert!(repo.find_by_name("bob").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_name_is_conflict() {
    let (db, _dir) = setup_test_db().await;
    let repo = db.user_repo();

    repo.insert_user(&new_user("alice")).await.unwrap();
    let err = repo.insert_user(&new_user("alice")).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(ref m) if m == "User already exists"));
}

#[tokio::test]
async fn rename_onto_existing_name_is_conflict() {
    let (db, _dir) = setup_test_db().await;
    let repo = db.user_repo();

    repo.insert_user(&new_user("alice")).await.unwrap();
    let bob = repo.insert_user(&new_user("bob")).await.unwrap();

    let err = repo
        .update_user(bob.id, &new_user("alice"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn update_and_delete_user() {
    let (db, _dir) = setup_test_db().await;
    let repo = db.user_repo();
    let created = repo.insert_user(&new_user("alice")).await.unwrap();

    let updated = repo
        .update_user(created.id, &new_user("alicia"))
        .await
        .unwrap()
        .expect("user exists");
    assert_eq!(updated.name, "alicia");
    assert_eq!(updated.password_hash, "$argon2id$fake$alicia");

    let deleted = repo.delete_user(created.id).await.unwrap();
    assert_eq!(deleted, Some(updated));
    assert!(repo.list_users().await.unwrap().is_empty());
    assert!(repo.update_user(created.id, &new_user("x")).await.unwrap().is_none());
}
