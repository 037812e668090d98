use super::*;

/// Tests a panel with rows in every side table.
///
/// Expected: opener token before role mentions, teams, welcome embed with fields and
/// the access-control list in position order
#[tokio::test]
async fn resolves_panel_side_tables() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let embed = factory::embed::EmbedFactory::new(db, GUILD_ID)
        .title("Welcome")
        .build()
        .await?;
    factory::embed::add_field(db, embed.id, "Hours", "9-5", true).await?;

    let panel = factory::panel::PanelFactory::new(db, GUILD_ID)
        .welcome_message_id(Some(embed.id))
        .emoji(Some("ticket"), Some("555666777888999000"))
        .naming_scheme(Some("username"))
        .build()
        .await?;
    factory::panel::set_user_mention(db, panel.panel_id, true).await?;
    factory::panel::add_role_mention(db, panel.panel_id, "3001").await?;
    factory::panel::add_team(db, panel.panel_id, 9).await?;
    factory::panel::add_access_control_rule(db, panel.panel_id, "4002", "deny", 1).await?;
    factory::panel::add_access_control_rule(db, panel.panel_id, "4001", "allow", 0).await?;

    let export = export_as_owner(db, &MemoryArchive::default()).await?;
    assert_eq!(export.panels.len(), 1);

    let dto = export.panels.into_iter().next().unwrap().into_dto();

    assert_eq!(dto.mentions, vec!["user".to_string(), "3001".to_string()]);
    assert_eq!(dto.teams, vec![9]);
    assert!(dto.use_custom_emoji);
    assert_eq!(dto.emote.id.as_deref(), Some("555666777888999000"));
    assert!(!dto.use_server_default_naming_scheme);

    let welcome = dto.welcome_message.unwrap();
    assert_eq!(welcome.title.as_deref(), Some("Welcome"));
    assert_eq!(welcome.fields.len(), 1);
    assert_eq!(welcome.fields[0].name, "Hours");

    let acl: Vec<_> = dto
        .access_control_list
        .iter()
        .map(|rule| (rule.role_id.as_str(), rule.action.as_str()))
        .collect();
    assert_eq!(acl, vec![("4001", "allow"), ("4002", "deny")]);

    Ok(())
}

/// Tests a bare panel.
///
/// Expected: no welcome message and empty mention, team and access-control lists
#[tokio::test]
async fn bare_panel_has_empty_collections() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_panel(db, GUILD_ID).await?;
    factory::create_panel(db, "223456789012345678").await?;

    let export = export_as_owner(db, &MemoryArchive::default()).await?;
    assert_eq!(export.panels.len(), 1);

    let dto = export.panels.into_iter().next().unwrap().into_dto();

    assert!(dto.welcome_message.is_none());
    assert!(dto.mentions.is_empty());
    assert!(dto.teams.is_empty());
    assert!(dto.access_control_list.is_empty());
    assert!(!dto.use_custom_emoji);
    assert!(dto.use_server_default_naming_scheme);

    Ok(())
}

/// Tests multi-panels with their member panels.
///
/// Expected: member panel IDs in ascending order, empty list for a multi-panel without
/// members
#[tokio::test]
async fn attaches_member_panels_to_multi_panels() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_panel(db, GUILD_ID).await?;
    let second = factory::create_panel(db, GUILD_ID).await?;
    let multi_panel = factory::create_multi_panel(db, GUILD_ID).await?;
    let empty = factory::create_multi_panel(db, GUILD_ID).await?;
    factory::multi_panel::add_target(db, multi_panel.id, second.panel_id).await?;
    factory::multi_panel::add_target(db, multi_panel.id, first.panel_id).await?;

    let export = export_as_owner(db, &MemoryArchive::default()).await?;

    assert_eq!(export.multi_panels.len(), 2);
    let with_members = export
        .multi_panels
        .iter()
        .find(|m| m.id == multi_panel.id)
        .unwrap();
    assert_eq!(with_members.panels, vec![first.panel_id, second.panel_id]);
    let without_members = export.multi_panels.iter().find(|m| m.id == empty.id).unwrap();
    assert!(without_members.panels.is_empty());

    Ok(())
}
