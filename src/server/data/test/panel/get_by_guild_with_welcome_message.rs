use super::*;

/// Tests fetching guild panels joined with their welcome message.
///
/// Verifies that a panel with a welcome message carries the embed, a panel without one
/// carries `None`, and panels are returned in ID order.
///
/// Expected: Ok(Vec) with two panels
#[tokio::test]
async fn joins_welcome_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild_id = "123456789012345678";

    let embed = factory::embed::EmbedFactory::new(db, guild_id)
        .title("Welcome")
        .build()
        .await?;
    let with_welcome = factory::panel::PanelFactory::new(db, guild_id)
        .welcome_message_id(Some(embed.id))
        .build()
        .await?;
    let without_welcome = factory::create_panel(db, guild_id).await?;

    let panels = PanelRepository::new(db)
        .get_by_guild_with_welcome_message(123456789012345678)
        .await?;

    assert_eq!(panels.len(), 2);
    assert_eq!(panels[0].panel.panel_id, with_welcome.panel_id);
    assert_eq!(
        panels[0]
            .welcome_message
            .as_ref()
            .and_then(|e| e.title.as_deref()),
        Some("Welcome")
    );
    assert_eq!(panels[1].panel.panel_id, without_welcome.panel_id);
    assert!(panels[1].welcome_message.is_none());

    Ok(())
}

/// Tests that panels of other guilds are excluded.
///
/// Expected: Ok(Vec) with only the requested guild's panel
#[tokio::test]
async fn excludes_other_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let panel = factory::create_panel(db, "123456789012345678").await?;
    factory::create_panel(db, "223456789012345678").await?;

    let panels = PanelRepository::new(db)
        .get_by_guild_with_welcome_message(123456789012345678)
        .await?;

    assert_eq!(panels.len(), 1);
    assert_eq!(panels[0].panel.panel_id, panel.panel_id);
    assert_eq!(panels[0].panel.guild_id, 123456789012345678);

    Ok(())
}

/// Tests fetching a guild with no panels.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_guild_without_panels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let panels = PanelRepository::new(db)
        .get_by_guild_with_welcome_message(123456789012345678)
        .await?;

    assert!(panels.is_empty());

    Ok(())
}
