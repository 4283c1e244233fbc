use super::*;

/// Tests the stored role is parsed.
///
/// Expected: Ok(Some(OrgRole::Admin))
#[tokio::test]
async fn returns_stored_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    let user = factory::helpers::create_member_with_role(db, organization.id, "admin").await?;

    let role = OrganizationMemberRepository::new(db)
        .find_role(organization.id, user.id)
        .await?;

    assert_eq!(role, Some(OrgRole::Admin));

    Ok(())
}

/// Tests a user outside the organization.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_non_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, organization) = factory::helpers::create_org_with_owner(db).await?;
    let outsider = factory::create_user(db).await?;

    let role = OrganizationMemberRepository::new(db)
        .find_role(organization.id, outsider.id)
        .await?;

    assert!(role.is_none());

    Ok(())
}

/// Tests an unrecognized stored role surfaces as an error.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    let user = factory::helpers::create_member_with_role(db, organization.id, "superuser").await?;

    let result = OrganizationMemberRepository::new(db)
        .find_role(organization.id, user.id)
        .await;

    assert!(result.is_err());

    Ok(())
}
