use super::*;

/// Tests names are returned for known IDs and unknown IDs are skipped.
///
/// Expected: Ok(map) with one entry per existing user
#[tokio::test]
async fn maps_known_ids_to_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::UserFactory::new(db).name("Alice").build().await?;
    let bob = factory::user::UserFactory::new(db).name("Bob").build().await?;

    let names = UserRepository::new(db)
        .names_by_ids(vec![alice.id, bob.id, Uuid::new_v4()])
        .await?;

    assert_eq!(names.len(), 2);
    assert_eq!(names.get(&alice.id).map(String::as_str), Some("Alice"));
    assert_eq!(names.get(&bob.id).map(String::as_str), Some("Bob"));

    Ok(())
}

/// Tests an empty ID list short-circuits.
///
/// Expected: Ok(empty map)
#[tokio::test]
async fn empty_input_returns_empty_map() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let names = UserRepository::new(db).names_by_ids(Vec::new()).await?;

    assert!(names.is_empty());

    Ok(())
}
