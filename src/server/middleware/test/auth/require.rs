use super::*;

/// Tests a global admin passes the admin check.
///
/// Expected: Ok(())
#[tokio::test]
async fn grants_admin_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db).role("admin").build().await?;
    let admin = User::from_entity(admin)?;

    let result = AuthGuard::new(db, &admin).require(&[Permission::Admin]).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a manager is denied the admin check.
///
/// Expected: Err(AuthError::AccessDenied) naming the user
#[tokio::test]
async fn denies_admin_to_manager() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::user::UserFactory::new(db)
        .role("manager")
        .build()
        .await?;
    let manager = User::from_entity(manager)?;

    let result = AuthGuard::new(db, &manager)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, manager.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}

/// Tests a plain member passes the membership check.
///
/// Expected: Ok(())
#[tokio::test]
async fn grants_membership_to_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, org) = factory::helpers::create_org_with_owner(db).await?;
    let member = factory::helpers::create_member_with_role(db, org.id, "member").await?;
    let member = User::from_entity(member)?;

    let result = AuthGuard::new(db, &member)
        .require(&[Permission::OrgMember(org.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests membership in one organization does not grant access to another.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_membership_across_organizations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _org) = factory::helpers::create_org_with_owner(db).await?;
    let (_other_owner, other_org) = factory::helpers::create_org_with_owner(db).await?;
    let owner = User::from_entity(owner)?;

    let result = AuthGuard::new(db, &owner)
        .require(&[Permission::OrgMember(other_org.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a global admin without membership is still denied organization access.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn global_admin_is_not_implicit_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, org) = factory::helpers::create_org_with_owner(db).await?;
    let admin = factory::user::UserFactory::new(db).role("admin").build().await?;
    let admin = User::from_entity(admin)?;

    let result = AuthGuard::new(db, &admin)
        .require(&[Permission::OrgMember(org.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests owners and admins pass the manager check while members do not.
///
/// Expected: Ok for owner and admin, Err(AccessDenied) for member
#[tokio::test]
async fn manager_check_follows_org_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, org) = factory::helpers::create_org_with_owner(db).await?;
    let org_admin = factory::helpers::create_member_with_role(db, org.id, "admin").await?;
    let member = factory::helpers::create_member_with_role(db, org.id, "member").await?;

    for (user, allowed) in [(owner, true), (org_admin, true), (member, false)] {
        let user = User::from_entity(user)?;
        let result = AuthGuard::new(db, &user)
            .require(&[Permission::OrgManager(org.id)])
            .await;

        assert_eq!(result.is_ok(), allowed, "role check for {}", user.email);
    }

    Ok(())
}

/// Tests an empty permission list grants access.
///
/// Expected: Ok(())
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?)?;

    assert!(AuthGuard::new(db, &user).require(&[]).await.is_ok());

    Ok(())
}
