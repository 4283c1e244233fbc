use super::*;

/// Tests tasks are ordered by their next run, soonest first.
///
/// Expected: Ok(vec) ordered by next_run_at ascending, other orgs excluded
#[tokio::test]
async fn lists_soonest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, organization) = factory::helpers::create_org_with_owner(db).await?;
    let (other_owner, other) = factory::helpers::create_org_with_owner(db).await?;
    let now = Utc::now();

    let later = factory::scheduled_task::ScheduledTaskFactory::new(db, organization.id, owner.id)
        .next_run_at(now + Duration::days(7))
        .build()
        .await?;
    let sooner = factory::scheduled_task::ScheduledTaskFactory::new(db, organization.id, owner.id)
        .next_run_at(now + Duration::days(1))
        .build()
        .await?;
    factory::create_scheduled_task(db, other.id, other_owner.id).await?;

    let tasks = ScheduledTaskRepository::new(db)
        .list_for_organization(organization.id)
        .await?;

    let ids: Vec<Uuid> = tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![sooner.id, later.id]);

    Ok(())
}
