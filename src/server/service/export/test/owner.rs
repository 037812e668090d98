use super::*;
use crate::server::error::auth::AuthError;

/// Tests that a user other than the owner is rejected.
///
/// The database has no tables, so any lookup made before the ownership check would fail
/// with a database error instead.
///
/// Expected: Err(AuthError::NotGuildOwner)
#[tokio::test]
async fn rejects_non_owner_before_reading_data() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guilds = StaticGuildContext { owner_id: OWNER_ID };

    let result = ExportService::new(
        db.clone(),
        Arc::new(MemoryArchive::default()),
        Arc::new(guilds),
        4,
    )
        .export(GUILD_ID_U64, 111111111111111111)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotGuildOwner {
            guild_id: GUILD_ID_U64,
            user_id: 111111111111111111,
        }))
    ));
}

/// Tests that the owner gets an export carrying the guild ID.
///
/// Expected: Ok(GuildExport) with the stringified guild ID
#[tokio::test]
async fn owner_can_export() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let export = export_as_owner(db, &MemoryArchive::default()).await?;

    assert_eq!(export.guild_id, GUILD_ID_U64);
    assert_eq!(export.into_dto().guild_id, GUILD_ID);

    Ok(())
}
