use super::*;

/// Tests reading settings for a guild with no rows in any settings table.
///
/// Every lookup returns its type's zero value rather than an error. Defaulting rules
/// (welcome message, ticket limit, language) are applied later, so the raw zero values
/// must come through unchanged here.
///
/// Expected: Ok with zero values
#[tokio::test]
async fn returns_zero_values_without_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = SettingsRepository::new(db);
    let guild_id = 123456789012345678;

    let settings = repo.get_settings(guild_id).await?;
    assert!(!settings.hide_claim_button);
    assert!(!settings.use_threads);
    assert_eq!(settings.context_menu_permission_level, 0);

    let claim = repo.get_claim_settings(guild_id).await?;
    assert!(!claim.support_can_view);
    assert!(!claim.support_can_type);

    let auto_close = repo.get_auto_close(guild_id).await?;
    assert!(!auto_close.enabled);
    assert!(auto_close.since_open_with_no_response.is_none());
    assert!(auto_close.on_user_leave.is_none());

    assert!(!repo.get_ticket_permissions(guild_id).await?.attach_files);
    assert_eq!(repo.get_welcome_message(guild_id).await?, "");
    assert_eq!(repo.get_ticket_limit(guild_id).await?, 0);
    assert_eq!(repo.get_category(guild_id).await?, 0);
    assert_eq!(repo.get_archive_channel(guild_id).await?, None);
    assert!(!repo.get_users_can_close(guild_id).await?);
    assert!(!repo.get_close_confirmation(guild_id).await?);
    assert!(!repo.get_feedback_enabled(guild_id).await?);
    assert_eq!(repo.get_naming_scheme(guild_id).await?, NamingScheme::Id);
    assert_eq!(repo.get_active_language(guild_id).await?, "");

    Ok(())
}
