use super::*;

/// Tests adding a user with a role.
///
/// Expected: Ok(()) and the role is readable afterwards
#[tokio::test]
async fn adds_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    let user = factory::create_user(db).await?;

    let repo = OrganizationMemberRepository::new(db);
    repo.add(organization.id, user.id, OrgRole::Member).await?;

    assert_eq!(
        repo.find_role(organization.id, user.id).await?,
        Some(OrgRole::Member)
    );

    Ok(())
}

/// Tests adding the same user twice.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, organization) = factory::helpers::create_org_with_owner(db).await?;

    let result = OrganizationMemberRepository::new(db)
        .add(organization.id, owner.id, OrgRole::Member)
        .await;

    assert!(result.is_err());

    Ok(())
}
