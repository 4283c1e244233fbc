use super::*;

/// Tests members come back ordered by name with their profile fields.
///
/// Expected: Ok(vec) sorted by name, excluding other organizations
#[tokio::test]
async fn lists_members_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    let other = factory::create_organization(db).await?;

    let zoe = factory::user::UserFactory::new(db).name("Zoe").build().await?;
    let adam = factory::user::UserFactory::new(db).name("Adam").build().await?;
    let stranger = factory::create_user(db).await?;

    factory::organization_member::OrganizationMemberFactory::new(db, organization.id, zoe.id)
        .role("owner")
        .build()
        .await?;
    factory::create_member(db, organization.id, adam.id).await?;
    factory::create_member(db, other.id, stranger.id).await?;

    let members = OrganizationMemberRepository::new(db)
        .list(organization.id)
        .await?;

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].name, "Adam");
    assert_eq!(members[0].role, OrgRole::Member);
    assert_eq!(members[1].name, "Zoe");
    assert_eq!(members[1].email, zoe.email);
    assert_eq!(members[1].role, OrgRole::Owner);

    Ok(())
}

/// Tests a single membership lookup.
///
/// Expected: Ok(Some(Member)) for a member, Ok(None) otherwise
#[tokio::test]
async fn finds_single_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, organization) = factory::helpers::create_org_with_owner(db).await?;

    let repo = OrganizationMemberRepository::new(db);

    let member = repo.find(organization.id, owner.id).await?.unwrap();
    assert_eq!(member.user_id, owner.id);
    assert_eq!(member.role, OrgRole::Owner);

    assert!(repo.find(organization.id, Uuid::new_v4()).await?.is_none());

    Ok(())
}
