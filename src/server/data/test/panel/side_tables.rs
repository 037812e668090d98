use super::*;

/// Tests per-panel mention and team lookups for a panel with rows in every table.
///
/// Expected: Ok with the stored mention flag, role IDs and team IDs
#[tokio::test]
async fn reads_mentions_and_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let panel = factory::create_panel(db, "123456789012345678").await?;
    factory::panel::set_user_mention(db, panel.panel_id, true).await?;
    factory::panel::add_role_mention(db, panel.panel_id, "3002").await?;
    factory::panel::add_role_mention(db, panel.panel_id, "3001").await?;
    factory::panel::add_team(db, panel.panel_id, 9).await?;
    factory::panel::add_team(db, panel.panel_id, 4).await?;

    let repo = PanelRepository::new(db);

    assert!(repo.should_mention_user(panel.panel_id).await?);
    assert_eq!(repo.get_role_mentions(panel.panel_id).await?, vec![3001, 3002]);
    assert_eq!(repo.get_team_ids(panel.panel_id).await?, vec![4, 9]);

    Ok(())
}

/// Tests per-panel lookups for a panel without side-table rows.
///
/// Expected: Ok with false and empty collections
#[tokio::test]
async fn defaults_when_rows_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let panel = factory::create_panel(db, "123456789012345678").await?;
    let repo = PanelRepository::new(db);

    assert!(!repo.should_mention_user(panel.panel_id).await?);
    assert!(repo.get_role_mentions(panel.panel_id).await?.is_empty());
    assert!(repo.get_team_ids(panel.panel_id).await?.is_empty());

    Ok(())
}

/// Tests fetching a single panel by ID.
///
/// Expected: Ok(Some) for an existing panel, Ok(None) otherwise
#[tokio::test]
async fn gets_panel_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let panel = factory::panel::PanelFactory::new(db, "123456789012345678")
        .emoji(Some("ticket"), Some("555666777888999000"))
        .build()
        .await?;
    let repo = PanelRepository::new(db);

    let found = repo.get_by_id(panel.panel_id).await?.unwrap();
    assert_eq!(found.emoji_id, Some(555666777888999000));
    assert_eq!(found.emoji_name.as_deref(), Some("ticket"));

    assert!(repo.get_by_id(panel.panel_id + 100).await?.is_none());

    Ok(())
}
