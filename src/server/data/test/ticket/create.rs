use super::*;

/// Tests a new ticket starts in `new` with no completion time.
///
/// Expected: Ok(Ticket) with the given fields and status New
#[tokio::test]
async fn creates_ticket_with_new_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, organization) = factory::helpers::create_org_with_owner(db).await?;

    let ticket = TicketRepository::new(db)
        .create(
            &create_params(organization.id, owner.id),
            TicketPriority::High,
        )
        .await?;

    assert_eq!(ticket.title, "Printer jammed");
    assert_eq!(ticket.location, "Main Office");
    assert_eq!(ticket.status, TicketStatus::New);
    assert_eq!(ticket.priority, TicketPriority::High);
    assert_eq!(ticket.reporter_id, owner.id);
    assert!(ticket.completed_at.is_none());
    assert_eq!(ticket.created_at, ticket.updated_at);

    Ok(())
}

/// Tests names are resolved for the reporter and assignee.
///
/// Expected: Ok(Some(TicketWithNames)) with both names present
#[tokio::test]
async fn find_with_names_resolves_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    let reporter = factory::user::UserFactory::new(db)
        .name("Rita Reporter")
        .build()
        .await?;
    let tech = factory::user::UserFactory::new(db)
        .name("Tom Tech")
        .build()
        .await?;
    let ticket = factory::ticket::TicketFactory::new(db, organization.id, reporter.id)
        .assignee(Some(tech.id))
        .build()
        .await?;

    let repo = TicketRepository::new(db);
    let found = repo.find_with_names(ticket.id).await?.unwrap();

    assert_eq!(found.ticket.id, ticket.id);
    assert_eq!(found.reporter_name.as_deref(), Some("Rita Reporter"));
    assert_eq!(found.assignee_name.as_deref(), Some("Tom Tech"));

    assert!(repo.find_with_names(Uuid::new_v4()).await?.is_none());

    Ok(())
}
