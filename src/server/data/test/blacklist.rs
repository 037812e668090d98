use crate::server::data::blacklist::BlacklistRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests reading blacklisted users and roles.
///
/// Expected: Ok with both sets of the guild only
#[tokio::test]
async fn returns_users_and_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild_id = "123456789012345678";

    factory::blacklist::add_user(db, guild_id, "623456789012345678").await?;
    factory::blacklist::add_role(db, guild_id, "723456789012345678").await?;
    factory::blacklist::add_user(db, "223456789012345678", "823456789012345678").await?;

    let repo = BlacklistRepository::new(db);

    assert_eq!(
        repo.get_users(123456789012345678, 100_000).await?,
        vec![623456789012345678]
    );
    assert_eq!(
        repo.get_roles(123456789012345678).await?,
        vec![723456789012345678]
    );

    Ok(())
}

/// Tests that the user list is bounded by the limit.
///
/// Expected: Ok(Vec) with `limit` entries
#[tokio::test]
async fn limits_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild_id = "123456789012345678";

    for user_id in ["1001", "1002", "1003"] {
        factory::blacklist::add_user(db, guild_id, user_id).await?;
    }

    let users = BlacklistRepository::new(db)
        .get_users(123456789012345678, 2)
        .await?;

    assert_eq!(users, vec![1001, 1002]);

    Ok(())
}

/// Tests that IDs of different lengths come back in numeric order.
///
/// Expected: Ok(Vec) sorted as numbers rather than as text
#[tokio::test]
async fn orders_ids_numerically() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild_id = "123456789012345678";

    for role_id in ["811111111111111111", "3001", "100000000000000000"] {
        factory::blacklist::add_role(db, guild_id, role_id).await?;
    }

    let roles = BlacklistRepository::new(db)
        .get_roles(123456789012345678)
        .await?;

    assert_eq!(roles, vec![3001, 100000000000000000, 811111111111111111]);

    Ok(())
}
