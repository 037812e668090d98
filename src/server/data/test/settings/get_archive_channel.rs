use super::*;

/// Tests that an archive channel row with no channel set reads as `None`.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unset_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::settings::set_archive_channel(db, "123456789012345678", None).await?;

    let channel = SettingsRepository::new(db)
        .get_archive_channel(123456789012345678)
        .await?;

    assert_eq!(channel, None);

    Ok(())
}

/// Tests that a stored archive channel is parsed.
///
/// Expected: Ok(Some(channel_id))
#[tokio::test]
async fn parses_stored_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::settings::set_archive_channel(db, "123456789012345678", Some("323456789012345678"))
        .await?;

    let channel = SettingsRepository::new(db)
        .get_archive_channel(123456789012345678)
        .await?;

    assert_eq!(channel, Some(323456789012345678));

    Ok(())
}

/// Tests that a malformed stored channel ID surfaces as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_malformed_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::settings::set_archive_channel(db, "123456789012345678", Some("not-a-channel"))
        .await?;

    let result = SettingsRepository::new(db)
        .get_archive_channel(123456789012345678)
        .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
