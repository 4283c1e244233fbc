use super::*;
use crate::server::{model::user::User, service::export::ExportService};

const HEADER: &str =
    "ID,Organization ID,Title,Status,Priority,Reporter ID,Created At,Description\n";

/// Tests export only covers organizations the admin belongs to.
///
/// Expected: CSV with the member organization's tickets only
#[tokio::test]
async fn scopes_to_admin_memberships() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let organization = factory::create_organization(db).await?;
    factory::create_member(db, organization.id, admin.id).await?;
    let (other_owner, other) = factory::helpers::create_org_with_owner(db).await?;

    let own = factory::ticket::TicketFactory::new(db, organization.id, admin.id)
        .title("Own ticket")
        .build()
        .await?;
    let foreign = factory::ticket::TicketFactory::new(db, other.id, other_owner.id)
        .title("Foreign ticket")
        .build()
        .await?;

    let csv = ExportService::new(db)
        .tickets_csv(&User::from_entity(admin)?, None)
        .await?;

    assert!(csv.starts_with(HEADER));
    assert!(csv.contains(&own.id.to_string()));
    assert!(!csv.contains(&foreign.id.to_string()));
    assert_eq!(csv.lines().count(), 2);

    Ok(())
}

/// Tests formula-like cells are neutralized and separators quoted.
///
/// Expected: Title prefixed with a quote, description quoted
#[tokio::test]
async fn sanitizes_cells() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let organization = factory::create_organization(db).await?;
    factory::create_member(db, organization.id, admin.id).await?;

    factory::ticket::TicketFactory::new(db, organization.id, admin.id)
        .title("=HYPERLINK(\"x\")")
        .description("one, two")
        .status("done")
        .build()
        .await?;

    let csv = ExportService::new(db)
        .tickets_csv(&User::from_entity(admin)?, Some(organization.id))
        .await?;

    assert!(csv.contains("\"'=HYPERLINK(\"\"x\"\")\""));
    assert!(csv.contains(",done,"));
    assert!(csv.ends_with("\"one, two\"\n"));

    Ok(())
}

/// Tests an admin without memberships receives only the header.
///
/// Expected: Ok(header line)
#[tokio::test]
async fn header_only_without_memberships() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let (owner, organization) = factory::helpers::create_org_with_owner(db).await?;
    factory::create_ticket(db, organization.id, owner.id).await?;

    let csv = ExportService::new(db)
        .tickets_csv(&User::from_entity(admin)?, None)
        .await?;

    assert_eq!(csv, HEADER);

    Ok(())
}

/// Tests non-admins and foreign organization requests are refused.
///
/// Expected: Err(AppError::Forbidden) for both
#[tokio::test]
async fn rejects_non_admin_and_foreign_organization() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, organization) = factory::helpers::create_org_with_owner(db).await?;
    let admin = factory::user::create_admin(db).await?;

    let service = ExportService::new(db);

    let as_owner = service
        .tickets_csv(&User::from_entity(owner)?, Some(organization.id))
        .await;
    assert!(matches!(as_owner, Err(AppError::Forbidden(_))));

    let foreign = service
        .tickets_csv(&User::from_entity(admin)?, Some(organization.id))
        .await;
    assert!(matches!(foreign, Err(AppError::Forbidden(_))));

    Ok(())
}
