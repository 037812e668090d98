use super::*;

/// Tests that stored settings rows are returned as stored.
///
/// Expected: Ok with stored values
#[tokio::test]
async fn returns_stored_values() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild_id = "123456789012345678";

    factory::settings::set_settings(db, guild_id, true, 2).await?;
    factory::settings::set_claim_settings(db, guild_id, true, false).await?;
    factory::settings::set_ticket_permissions(db, guild_id, true, false, true).await?;
    factory::settings::set_welcome_message(db, guild_id, "Hello!").await?;
    factory::settings::set_ticket_limit(db, guild_id, 3).await?;
    factory::settings::set_category(db, guild_id, "223456789012345678").await?;
    factory::settings::set_users_can_close(db, guild_id, true).await?;
    factory::settings::set_close_confirmation(db, guild_id, true).await?;
    factory::settings::set_feedback_enabled(db, guild_id, true).await?;
    factory::settings::set_naming_scheme(db, guild_id, "username").await?;
    factory::settings::set_language(db, guild_id, "de").await?;

    let repo = SettingsRepository::new(db);
    let id = guild_id.parse::<u64>().unwrap();

    let settings = repo.get_settings(id).await?;
    assert!(settings.hide_claim_button);
    assert!(settings.store_transcripts);
    assert_eq!(settings.context_menu_permission_level, 2);

    let claim = repo.get_claim_settings(id).await?;
    assert!(claim.support_can_view);
    assert!(!claim.support_can_type);

    let permissions = repo.get_ticket_permissions(id).await?;
    assert!(permissions.attach_files);
    assert!(!permissions.embed_links);
    assert!(permissions.add_reactions);

    assert_eq!(repo.get_welcome_message(id).await?, "Hello!");
    assert_eq!(repo.get_ticket_limit(id).await?, 3);
    assert_eq!(repo.get_category(id).await?, 223456789012345678);
    assert!(repo.get_users_can_close(id).await?);
    assert!(repo.get_close_confirmation(id).await?);
    assert!(repo.get_feedback_enabled(id).await?);
    assert_eq!(repo.get_naming_scheme(id).await?, NamingScheme::Username);
    assert_eq!(repo.get_active_language(id).await?, "de");

    Ok(())
}

/// Tests that auto-close durations are read from nanoseconds.
///
/// Expected: Ok with durations in whole seconds
#[tokio::test]
async fn reads_auto_close_durations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::settings::set_auto_close(
        db,
        "123456789012345678",
        Some(3_600_000_000_000),
        Some(86_400_000_000_000),
        Some(true),
    )
    .await?;

    let auto_close = SettingsRepository::new(db)
        .get_auto_close(123456789012345678)
        .await?;

    assert!(auto_close.enabled);
    assert_eq!(
        auto_close.since_open_with_no_response.map(|d| d.num_seconds()),
        Some(3600)
    );
    assert_eq!(
        auto_close.since_last_message.map(|d| d.num_seconds()),
        Some(86400)
    );
    assert_eq!(auto_close.on_user_leave, Some(true));

    Ok(())
}

/// Tests that settings of another guild are not returned.
///
/// Expected: Ok with zero values
#[tokio::test]
async fn ignores_other_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::settings::set_welcome_message(db, "111111111111111111", "Other guild").await?;
    factory::settings::set_ticket_limit(db, "111111111111111111", 10).await?;

    let repo = SettingsRepository::new(db);

    assert_eq!(repo.get_welcome_message(222222222222222222).await?, "");
    assert_eq!(repo.get_ticket_limit(222222222222222222).await?, 0);

    Ok(())
}

/// Tests that a stored ticket limit outside the u8 range is reported as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn rejects_out_of_range_ticket_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::settings::set_ticket_limit(db, "123456789012345678", 300).await?;

    let result = SettingsRepository::new(db)
        .get_ticket_limit(123456789012345678)
        .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
