use super::*;

/// Tests the share link flag and token are stored.
///
/// Expected: Ok(Some) with the link enabled and the token set
#[tokio::test]
async fn updates_share_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;

    let updated = OrganizationRepository::new(db)
        .update_share_link(organization.id, true, Some("abc".to_string()))
        .await?
        .unwrap();

    assert!(updated.share_link_enabled);
    assert_eq!(updated.share_link_token.as_deref(), Some("abc"));
    assert!(!updated.public_view_enabled);

    Ok(())
}

/// Tests disabling the public view keeps the token when passed back.
///
/// Expected: Ok(Some) with the view disabled and the token unchanged
#[tokio::test]
async fn disables_public_view() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::organization::OrganizationFactory::new(db)
        .public_view("view")
        .build()
        .await?;

    let updated = OrganizationRepository::new(db)
        .update_public_view(organization.id, false, Some("view".to_string()))
        .await?
        .unwrap();

    assert!(!updated.public_view_enabled);
    assert_eq!(updated.public_view_token.as_deref(), Some("view"));

    Ok(())
}

/// Tests updating a missing organization.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_organization() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OrganizationRepository::new(db)
        .update_share_link(Uuid::new_v4(), true, None)
        .await?;

    assert!(result.is_none());

    Ok(())
}
