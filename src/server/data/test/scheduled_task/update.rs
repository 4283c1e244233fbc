use super::*;

/// Tests the mutable columns are overwritten and ownership is kept.
///
/// Expected: Ok(ScheduledTask) with new values and the original creator
#[tokio::test]
async fn overwrites_mutable_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, organization) = factory::helpers::create_org_with_owner(db).await?;
    let other = factory::create_user(db).await?;
    let task = factory::create_scheduled_task(db, organization.id, owner.id).await?;

    let mut changes = record(Uuid::new_v4(), other.id);
    changes.frequency = Frequency::Monthly;
    changes.priority = TicketPriority::Critical;
    changes.assignee_user_id = Some(owner.id);
    changes.enabled = false;

    let updated = ScheduledTaskRepository::new(db)
        .update(task.id, changes)
        .await?;

    assert_eq!(updated.organization_id, organization.id);
    assert_eq!(updated.created_by, owner.id);
    assert_eq!(updated.frequency, Frequency::Monthly);
    assert_eq!(updated.priority, TicketPriority::Critical);
    assert_eq!(updated.assignee_user_id, Some(owner.id));
    assert!(!updated.enabled);

    Ok(())
}

/// Tests updating a missing task.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, organization) = factory::helpers::create_org_with_owner(db).await?;

    let result = ScheduledTaskRepository::new(db)
        .update(Uuid::new_v4(), record(organization.id, owner.id))
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
