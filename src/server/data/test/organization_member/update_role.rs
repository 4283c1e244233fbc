use super::*;

/// Tests changing a member's role.
///
/// Expected: Ok(Some(Member)) carrying the new role
#[tokio::test]
async fn changes_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    let user = factory::helpers::create_member_with_role(db, organization.id, "member").await?;

    let repo = OrganizationMemberRepository::new(db);
    let member = repo
        .update_role(organization.id, user.id, OrgRole::Admin)
        .await?
        .unwrap();

    assert_eq!(member.role, OrgRole::Admin);
    assert_eq!(
        repo.find_role(organization.id, user.id).await?,
        Some(OrgRole::Admin)
    );

    Ok(())
}

/// Tests changing the role of a non-member.
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

    let organization = factory::create_organization(db).await?;
    let user = factory::create_user(db).await?;

    let result = OrganizationMemberRepository::new(db)
        .update_role(organization.id, user.id, OrgRole::Owner)
        .await?;

    assert!(result.is_none());

    Ok(())
}
