use super::*;

/// Tests that rules are grouped by panel and ordered by position.
///
/// Expected: Ok(HashMap) with one entry holding both rules in position order
#[tokio::test]
async fn groups_rules_by_panel_in_position_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild_id = "123456789012345678";

    let panel = factory::create_panel(db, guild_id).await?;
    let bare_panel = factory::create_panel(db, guild_id).await?;
    factory::panel::add_access_control_rule(db, panel.panel_id, "2001", "allow", 1).await?;
    factory::panel::add_access_control_rule(db, panel.panel_id, "2002", "deny", 0).await?;

    let rules = PanelRepository::new(db)
        .get_access_control_rules_by_guild(123456789012345678)
        .await?;

    let panel_rules = rules.get(&panel.panel_id).unwrap();
    assert_eq!(panel_rules.len(), 2);
    assert_eq!(panel_rules[0].role_id, 2002);
    assert_eq!(panel_rules[0].action, AccessControlAction::Deny);
    assert_eq!(panel_rules[1].role_id, 2001);
    assert_eq!(panel_rules[1].action, AccessControlAction::Allow);
    assert!(!rules.contains_key(&bare_panel.panel_id));

    Ok(())
}

/// Tests that rules of another guild's panels are excluded.
///
/// Expected: Ok(empty HashMap)
#[tokio::test]
async fn excludes_rules_of_other_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let other = factory::create_panel(db, "223456789012345678").await?;
    factory::panel::add_access_control_rule(db, other.panel_id, "2001", "allow", 0).await?;

    let rules = PanelRepository::new(db)
        .get_access_control_rules_by_guild(123456789012345678)
        .await?;

    assert!(rules.is_empty());

    Ok(())
}
