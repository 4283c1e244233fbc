use super::*;

/// Tests comments come back oldest first and only for the given ticket.
///
/// Expected: Ok(vec) in insertion order
#[tokio::test]
async fn lists_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, organization) = factory::helpers::create_org_with_owner(db).await?;
    let ticket = factory::create_ticket(db, organization.id, owner.id).await?;
    let other_ticket = factory::create_ticket(db, organization.id, owner.id).await?;

    let first = factory::comment::CommentFactory::new(db, ticket.id, owner.id)
        .body("first")
        .build()
        .await?;
    let second = factory::comment::CommentFactory::new(db, ticket.id, owner.id)
        .body("second")
        .build()
        .await?;
    factory::create_comment(db, other_ticket.id, owner.id).await?;

    let comments = CommentRepository::new(db)
        .list_for_ticket(ticket.id, true)
        .await?;

    let ids: Vec<_> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests sensitive comments are left out when not requested.
///
/// Expected: Ok(vec) with only the non-sensitive comment
#[tokio::test]
async fn excludes_sensitive_when_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, organization) = factory::helpers::create_org_with_owner(db).await?;
    let ticket = factory::create_ticket(db, organization.id, owner.id).await?;

    let visible = factory::create_comment(db, ticket.id, owner.id).await?;
    factory::comment::CommentFactory::new(db, ticket.id, owner.id)
        .sensitive(true)
        .build()
        .await?;

    let repo = CommentRepository::new(db);

    let public = repo.list_for_ticket(ticket.id, false).await?;
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].id, visible.id);

    let all = repo.list_for_ticket(ticket.id, true).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}
