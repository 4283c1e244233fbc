use super::*;

/// Tests resolved changes are written in full.
///
/// Expected: Ok(Ticket) reflecting every changed field
#[tokio::test]
async fn writes_changes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, organization) = factory::helpers::create_org_with_owner(db).await?;
    let ticket = factory::create_ticket(db, organization.id, owner.id).await?;
    let now = Utc::now();

    let updated = TicketRepository::new(db)
        .update(
            ticket.id,
            TicketChanges {
                title: "Renamed".to_string(),
                description: ticket.description.clone(),
                location: "Warehouse".to_string(),
                status: TicketStatus::Done,
                priority: TicketPriority::Critical,
                assignee_user_id: Some(owner.id),
                sensitive: true,
                updated_at: now,
                completed_at: Some(now),
            },
        )
        .await?;

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.location, "Warehouse");
    assert_eq!(updated.status, TicketStatus::Done);
    assert_eq!(updated.priority, TicketPriority::Critical);
    assert_eq!(updated.assignee_user_id, Some(owner.id));
    assert!(updated.sensitive);
    assert!(updated.completed_at.is_some());

    Ok(())
}

/// Tests updating a ticket that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TicketRepository::new(db)
        .update(
            Uuid::new_v4(),
            TicketChanges {
                title: "x".to_string(),
                description: "y".to_string(),
                location: String::new(),
                status: TicketStatus::New,
                priority: TicketPriority::Low,
                assignee_user_id: None,
                sensitive: false,
                updated_at: Utc::now(),
                completed_at: None,
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
