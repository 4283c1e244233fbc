use super::*;

/// Tests only owner rows of the organization are counted.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_owners_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, organization) = factory::helpers::create_org_with_owner(db).await?;
    factory::helpers::create_member_with_role(db, organization.id, "owner").await?;
    factory::helpers::create_member_with_role(db, organization.id, "admin").await?;
    factory::helpers::create_member_with_role(db, organization.id, "member").await?;

    let (_, other) = factory::helpers::create_org_with_owner(db).await?;
    factory::helpers::create_member_with_role(db, other.id, "owner").await?;

    let count = OrganizationMemberRepository::new(db)
        .count_owners(organization.id)
        .await?;

    assert_eq!(count, 2);

    Ok(())
}
