use super::*;

/// Tests a comment is stored with its author's summary.
///
/// Expected: Ok(Comment) carrying the author's name
#[tokio::test]
async fn creates_comment_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, organization) = factory::helpers::create_org_with_owner(db).await?;
    let ticket = factory::create_ticket(db, organization.id, owner.id).await?;

    let comment = CommentRepository::new(db)
        .create(CreateCommentParams {
            ticket_id: ticket.id,
            user_id: owner.id,
            body: "Replaced the toner".to_string(),
            sensitive: true,
        })
        .await?;

    assert_eq!(comment.ticket_id, ticket.id);
    assert_eq!(comment.body, "Replaced the toner");
    assert!(comment.sensitive);

    let author = comment.author.unwrap();
    assert_eq!(author.id, owner.id);
    assert_eq!(author.name, owner.name);

    Ok(())
}
