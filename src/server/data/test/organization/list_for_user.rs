use super::*;

/// Tests a user's organizations come back by name with their role in each.
///
/// Expected: Ok(vec) ordered by organization name
#[tokio::test]
async fn lists_memberships_with_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let zulu = factory::organization::OrganizationFactory::new(db)
        .name("Zulu")
        .build()
        .await?;
    let alpha = factory::organization::OrganizationFactory::new(db)
        .name("Alpha")
        .build()
        .await?;
    factory::create_organization(db).await?;

    factory::organization_member::OrganizationMemberFactory::new(db, zulu.id, user.id)
        .role("owner")
        .build()
        .await?;
    factory::organization_member::OrganizationMemberFactory::new(db, alpha.id, user.id)
        .role("member")
        .build()
        .await?;

    let organizations = OrganizationRepository::new(db).list_for_user(user.id).await?;

    assert_eq!(organizations.len(), 2);
    assert_eq!(organizations[0].organization.name, "Alpha");
    assert_eq!(organizations[0].role, OrgRole::Member);
    assert_eq!(organizations[1].organization.name, "Zulu");
    assert_eq!(organizations[1].role, OrgRole::Owner);

    let mut ids = OrganizationRepository::new(db).ids_for_user(user.id).await?;
    ids.sort();
    let mut expected = vec![zulu.id, alpha.id];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}
