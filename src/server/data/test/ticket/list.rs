use super::*;

/// Tests the default order is newest first within the organization.
///
/// Expected: Ok(vec) ordered by created_at descending, other orgs excluded
#[tokio::test]
async fn lists_newest_first_within_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, organization) = factory::helpers::create_org_with_owner(db).await?;
    let (other_owner, other) = factory::helpers::create_org_with_owner(db).await?;
    let now = Utc::now();

    let older = factory::ticket::TicketFactory::new(db, organization.id, owner.id)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::ticket::TicketFactory::new(db, organization.id, owner.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    factory::create_ticket(db, other.id, other_owner.id).await?;

    let tickets = TicketRepository::new(db)
        .list(&TicketFilter::new(TicketScope::Organization(organization.id)))
        .await?;

    let ids: Vec<Uuid> = tickets.iter().map(|t| t.ticket.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests status and priority filters combine.
///
/// Expected: Ok(vec) with only tickets matching both filters
#[tokio::test]
async fn filters_by_status_and_priority() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, organization) = factory::helpers::create_org_with_owner(db).await?;

    let matching = factory::ticket::TicketFactory::new(db, organization.id, owner.id)
        .status("in_progress")
        .priority("high")
        .build()
        .await?;
    factory::ticket::TicketFactory::new(db, organization.id, owner.id)
        .status("done")
        .priority("high")
        .build()
        .await?;
    factory::ticket::TicketFactory::new(db, organization.id, owner.id)
        .status("new")
        .priority("low")
        .build()
        .await?;

    let mut filter = TicketFilter::new(TicketScope::Organization(organization.id));
    filter.statuses = TicketStatus::ACTIVE.to_vec();
    filter.priorities = vec![TicketPriority::High, TicketPriority::Critical];

    let tickets = TicketRepository::new(db).list(&filter).await?;

    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].ticket.id, matching.id);

    Ok(())
}

/// Tests the keyword matches title or description regardless of case.
///
/// Expected: Ok(vec) with both keyword matches
#[tokio::test]
async fn keyword_is_case_insensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, organization) = factory::helpers::create_org_with_owner(db).await?;

    let by_title = factory::ticket::TicketFactory::new(db, organization.id, owner.id)
        .title("VPN drops every hour")
        .build()
        .await?;
    let by_description = factory::ticket::TicketFactory::new(db, organization.id, owner.id)
        .title("Laptop issue")
        .description("Cannot reach the vpn from home")
        .build()
        .await?;
    factory::ticket::TicketFactory::new(db, organization.id, owner.id)
        .title("Printer jammed")
        .build()
        .await?;

    let mut filter = TicketFilter::new(TicketScope::Organization(organization.id));
    filter.keyword = Some("Vpn".to_string());

    let tickets = TicketRepository::new(db).list(&filter).await?;

    let mut ids: Vec<Uuid> = tickets.iter().map(|t| t.ticket.id).collect();
    ids.sort();
    let mut expected = vec![by_title.id, by_description.id];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests priority sorting uses severity rather than the stored string.
///
/// Expected: Ok(vec) ordered critical, high, medium, low
#[tokio::test]
async fn sorts_priority_by_severity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, organization) = factory::helpers::create_org_with_owner(db).await?;

    for priority in ["medium", "low", "critical", "high"] {
        factory::ticket::TicketFactory::new(db, organization.id, owner.id)
            .priority(priority)
            .build()
            .await?;
    }

    let mut filter = TicketFilter::new(TicketScope::Organization(organization.id));
    filter.sort_key = SortKey::Priority;
    filter.sort_order = SortOrder::Desc;

    let tickets = TicketRepository::new(db).list(&filter).await?;

    let priorities: Vec<TicketPriority> = tickets.iter().map(|t| t.ticket.priority).collect();
    assert_eq!(
        priorities,
        vec![
            TicketPriority::Critical,
            TicketPriority::High,
            TicketPriority::Medium,
            TicketPriority::Low,
        ]
    );

    Ok(())
}

/// Tests the multi-organization scope and the sensitive filter.
///
/// Expected: Ok(vec) with non-sensitive tickets from the listed organizations only
#[tokio::test]
async fn scopes_to_organizations_and_hides_sensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, first) = factory::helpers::create_org_with_owner(db).await?;
    let second = factory::create_organization(db).await?;
    let third = factory::create_organization(db).await?;

    let visible_first = factory::create_ticket(db, first.id, owner.id).await?;
    let visible_second = factory::create_ticket(db, second.id, owner.id).await?;
    factory::ticket::TicketFactory::new(db, first.id, owner.id)
        .sensitive(true)
        .build()
        .await?;
    factory::create_ticket(db, third.id, owner.id).await?;

    let mut filter = TicketFilter::new(TicketScope::Organizations(vec![first.id, second.id]));
    filter.sensitive = Some(false);

    let tickets = TicketRepository::new(db).list(&filter).await?;

    let mut ids: Vec<Uuid> = tickets.iter().map(|t| t.ticket.id).collect();
    ids.sort();
    let mut expected = vec![visible_first.id, visible_second.id];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}
