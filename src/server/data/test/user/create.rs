use super::*;

/// Tests creating a user stores every field and the role.
///
/// Expected: Ok(User) retrievable by ID with role `public`
#[tokio::test]
async fn creates_user_with_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            email: "visitor@example.com".to_string(),
            name: "Visitor".to_string(),
            role: GlobalRole::Public,
            avatar_url: String::new(),
        })
        .await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.email, "visitor@example.com");
    assert_eq!(stored.name, "Visitor");
    assert_eq!(stored.role, GlobalRole::Public);

    Ok(())
}

/// Tests the unique email constraint.
///
/// Expected: Err(DbErr) on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let result = UserRepository::new(db)
        .create(CreateUserParams {
            email: existing.email,
            name: "Someone Else".to_string(),
            role: GlobalRole::Staff,
            avatar_url: String::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
