use super::*;

/// Tests attachments are stored with their byte size and listed without payloads.
///
/// Expected: Ok(vec) of metadata in upload order
#[tokio::test]
async fn stores_and_lists_files() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, organization) = factory::helpers::create_org_with_owner(db).await?;
    let ticket = factory::create_ticket(db, organization.id, owner.id).await?;

    let repo = TicketFileRepository::new(db);
    let file_id = repo
        .create(
            ticket.id,
            NewTicketFile {
                filename: "screenshot.png".to_string(),
                content_type: "image/png".to_string(),
                data: vec![1, 2, 3, 4],
            },
        )
        .await?;

    let files = repo.list_meta(ticket.id).await?;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].id, file_id);
    assert_eq!(files[0].filename, "screenshot.png");
    assert_eq!(files[0].size, 4);

    let content = repo.find_by_id(file_id).await?.unwrap();
    assert_eq!(content.ticket_id, ticket.id);
    assert_eq!(content.data, vec![1, 2, 3, 4]);

    Ok(())
}

/// Tests a ticket without attachments.
///
/// Expected: Ok(empty vec) and Ok(None) for an unknown file
#[tokio::test]
async fn empty_for_ticket_without_files() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, organization) = factory::helpers::create_org_with_owner(db).await?;
    let ticket = factory::create_ticket(db, organization.id, owner.id).await?;

    let repo = TicketFileRepository::new(db);
    assert!(repo.list_meta(ticket.id).await?.is_empty());
    assert!(repo.find_by_id(Uuid::new_v4()).await?.is_none());

    Ok(())
}
