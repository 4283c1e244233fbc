use super::*;

/// Tests name and avatar are replaced.
///
/// Expected: Ok(User) with the new name and avatar
#[tokio::test]
async fn updates_name_and_avatar() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update_profile(
            user.id,
            "Renamed".to_string(),
            "https://example.com/a.png".to_string(),
        )
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.avatar_url, "https://example.com/a.png");
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests updating a missing user.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update_profile(Uuid::new_v4(), "Name".to_string(), String::new())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
