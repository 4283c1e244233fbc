use super::*;

/// Tests the stored organization role is returned for a member.
///
/// Expected: Ok(Some(OrgRole::Admin))
#[tokio::test]
async fn returns_stored_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, org) = factory::helpers::create_org_with_owner(db).await?;
    let org_admin = factory::helpers::create_member_with_role(db, org.id, "admin").await?;
    let org_admin = User::from_entity(org_admin)?;

    let role = AuthGuard::new(db, &org_admin).member_role(org.id).await?;

    assert_eq!(role, Some(OrgRole::Admin));

    Ok(())
}

/// Tests a non-member has no role.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_non_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let org = factory::create_organization(db).await?;
    let outsider = User::from_entity(factory::create_user(db).await?)?;

    let role = AuthGuard::new(db, &outsider).member_role(org.id).await?;

    assert_eq!(role, None);

    Ok(())
}
