use super::*;

/// Tests that a guild without custom colours gets the default scheme.
///
/// Expected: Ok with exactly the active colours at their defaults
#[tokio::test]
async fn returns_defaults_without_overrides() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let colours = SettingsRepository::new(db)
        .get_colours(123456789012345678)
        .await?;

    assert_eq!(colours.len(), ACTIVE_COLOURS.len());
    for colour in ACTIVE_COLOURS {
        assert_eq!(colours.get(colour), Some(colour.default_rgb()));
    }

    Ok(())
}

/// Tests that stored overrides replace defaults and inactive colours are dropped.
///
/// Expected: Ok with the override for red, the default for green, no orange
#[tokio::test]
async fn applies_overrides_for_active_colours_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild_id = "123456789012345678";

    factory::settings::set_colour(db, guild_id, Colour::Red.id(), 0xabcdef).await?;
    factory::settings::set_colour(db, guild_id, Colour::Orange.id(), 0x123456).await?;

    let colours = SettingsRepository::new(db)
        .get_colours(123456789012345678)
        .await?;

    assert_eq!(colours.len(), ACTIVE_COLOURS.len());
    assert_eq!(colours.get(Colour::Red).map(|c| c.to_hex()).as_deref(), Some("abcdef"));
    assert_eq!(colours.get(Colour::Green), Some(Colour::Green.default_rgb()));
    assert_eq!(colours.get(Colour::Orange), None);

    Ok(())
}
