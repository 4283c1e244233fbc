use super::*;

/// Tests removing an existing membership.
///
/// Expected: Ok(true) then the user is no longer a member
#[tokio::test]
async fn removes_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    let user = factory::helpers::create_member_with_role(db, organization.id, "member").await?;

    let repo = OrganizationMemberRepository::new(db);

    assert!(repo.remove(organization.id, user.id).await?);
    assert!(repo.find_role(organization.id, user.id).await?.is_none());

    Ok(())
}

/// Tests removing a user who was never a member.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_non_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;

    let removed = OrganizationMemberRepository::new(db)
        .remove(organization.id, Uuid::new_v4())
        .await?;

    assert!(!removed);

    Ok(())
}
