use super::*;

/// Tests the organization and owner membership are both written.
///
/// Expected: Ok(Organization) with the creator as its only owner
#[tokio::test]
async fn creates_organization_and_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let organization = OrganizationRepository::new(db)
        .create_with_owner(CreateOrganizationParams {
            name: "Acme IT".to_string(),
            slug: "acme-it".to_string(),
            owner_id: user.id,
        })
        .await?;

    assert_eq!(organization.name, "Acme IT");
    assert_eq!(organization.slug, "acme-it");
    assert!(!organization.share_link_enabled);
    assert!(!organization.public_view_enabled);

    let member_repo = OrganizationMemberRepository::new(db);
    assert_eq!(
        member_repo.find_role(organization.id, user.id).await?,
        Some(OrgRole::Owner)
    );
    assert_eq!(member_repo.count_owners(organization.id).await?, 1);

    Ok(())
}

/// Tests a rolled back transaction leaves neither row behind.
///
/// Expected: Organization absent after rollback
#[tokio::test]
async fn rollback_discards_both_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let txn = db.begin().await?;
    let organization = OrganizationRepository::new(&txn)
        .create_with_owner(CreateOrganizationParams {
            name: "Temp".to_string(),
            slug: "temp".to_string(),
            owner_id: user.id,
        })
        .await?;
    txn.rollback().await?;

    let repo = OrganizationRepository::new(db);
    assert!(repo.find_by_id(organization.id).await?.is_none());
    assert!(repo.ids_for_user(user.id).await?.is_empty());

    Ok(())
}

/// Tests the unique slug constraint.
///
/// Expected: Err(DbErr) for a second organization with the same slug
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::organization::OrganizationFactory::new(db)
        .slug("taken")
        .build()
        .await?;

    let result = OrganizationRepository::new(db)
        .create_with_owner(CreateOrganizationParams {
            name: "Taken".to_string(),
            slug: "taken".to_string(),
            owner_id: user.id,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
