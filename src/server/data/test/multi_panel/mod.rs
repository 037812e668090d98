use crate::server::data::multi_panel::MultiPanelRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests fetching multi-panels and their members.
///
/// Expected: Ok with the multi-panel and its panel IDs in order
#[tokio::test]
async fn gets_multi_panels_with_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild_id = "123456789012345678";

    let first = factory::create_panel(db, guild_id).await?;
    let second = factory::create_panel(db, guild_id).await?;
    let multi_panel = factory::create_multi_panel(db, guild_id).await?;
    factory::multi_panel::add_target(db, multi_panel.id, second.panel_id).await?;
    factory::multi_panel::add_target(db, multi_panel.id, first.panel_id).await?;
    let empty = factory::create_multi_panel(db, guild_id).await?;

    let repo = MultiPanelRepository::new(db);

    let multi_panels = repo.get_by_guild(123456789012345678).await?;
    assert_eq!(multi_panels.len(), 2);
    assert_eq!(multi_panels[0].id, multi_panel.id);

    assert_eq!(
        repo.get_panel_ids(multi_panel.id).await?,
        vec![first.panel_id, second.panel_id]
    );
    assert!(repo.get_panel_ids(empty.id).await?.is_empty());

    let members = repo.get_panels(multi_panel.id).await?;
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].panel_id, first.panel_id);

    Ok(())
}

/// Tests finding the multi-panels a panel belongs to.
///
/// Expected: Ok with only the multi-panel containing the panel
#[tokio::test]
async fn gets_multi_panels_containing_panel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild_id = "123456789012345678";

    let panel = factory::create_panel(db, guild_id).await?;
    let other = factory::create_panel(db, guild_id).await?;
    let containing = factory::create_multi_panel(db, guild_id).await?;
    let unrelated = factory::create_multi_panel(db, guild_id).await?;
    factory::multi_panel::add_target(db, containing.id, panel.panel_id).await?;
    factory::multi_panel::add_target(db, unrelated.id, other.panel_id).await?;

    let result = MultiPanelRepository::new(db)
        .get_containing_panel(panel.panel_id)
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, containing.id);

    Ok(())
}
