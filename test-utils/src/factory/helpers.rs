//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used by factories to derive unique emails, slugs and names.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user, an organization and an `owner` membership linking them.
///
/// # Returns
/// - `Ok((user, organization))` - The created owner and organization
/// - `Err(DbErr)` - Database error during creation
pub async fn create_org_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::organization::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let org = crate::factory::organization::create_organization(db).await?;
    crate::factory::organization_member::OrganizationMemberFactory::new(db, org.id, user.id)
        .role("owner")
        .build()
        .await?;

    Ok((user, org))
}

/// Creates a user and adds them to an existing organization with the given role.
pub async fn create_member_with_role(
    db: &DatabaseConnection,
    organization_id: uuid::Uuid,
    role: &str,
) -> Result<entity::user::Model, DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    crate::factory::organization_member::OrganizationMemberFactory::new(
        db,
        organization_id,
        user.id,
    )
    .role(role)
    .build()
    .await?;

    Ok(user)
}
