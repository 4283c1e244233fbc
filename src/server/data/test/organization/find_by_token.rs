use super::*;

/// Tests share and public view tokens resolve independently.
///
/// Expected: Each token finds the organization only through its own lookup
#[tokio::test]
async fn resolves_each_token_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::organization::OrganizationFactory::new(db)
        .share_link("share-token")
        .public_view("view-token")
        .build()
        .await?;

    let repo = OrganizationRepository::new(db);

    let by_share = repo.find_by_share_token("share-token").await?;
    assert_eq!(by_share.map(|o| o.id), Some(organization.id));

    let by_view = repo.find_by_public_view_token("view-token").await?;
    assert_eq!(by_view.map(|o| o.id), Some(organization.id));

    assert!(repo.find_by_share_token("view-token").await?.is_none());
    assert!(repo.find_by_public_view_token("share-token").await?.is_none());

    Ok(())
}

/// Tests an unknown token.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_organization(db).await?;

    let repo = OrganizationRepository::new(db);
    assert!(repo.find_by_share_token("missing").await?.is_none());
    assert!(repo.find_by_id(Uuid::new_v4()).await?.is_none());

    Ok(())
}
