use super::*;

/// Tests reading close reasons with and without a recorded closer.
///
/// Expected: Ok(HashMap) with both entries parsed
#[tokio::test]
async fn returns_close_metadata_by_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for id in [1, 2] {
        factory::ticket::TicketFactory::new(db, GUILD_ID).id(id).build().await?;
    }
    factory::ticket::set_close_reason(db, GUILD_ID, 1, Some("Resolved"), Some("523456789012345678"))
        .await?;
    factory::ticket::set_close_reason(db, GUILD_ID, 2, None, None).await?;

    let metadata = TicketRepository::new(db)
        .get_close_metadata(GUILD_ID_U64, &[1, 2])
        .await?;

    let first = metadata.get(&1).unwrap();
    assert_eq!(first.reason.as_deref(), Some("Resolved"));
    assert_eq!(first.closed_by, Some(523456789012345678));

    let second = metadata.get(&2).unwrap();
    assert!(second.reason.is_none());
    assert!(second.closed_by.is_none());

    Ok(())
}

/// Tests that close reasons of tickets missing from the guild are skipped.
///
/// Expected: Ok(empty HashMap)
#[tokio::test]
async fn skips_reasons_without_guild_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ticket::TicketFactory::new(db, "223456789012345678")
        .id(3)
        .build()
        .await?;
    factory::ticket::set_close_reason(db, GUILD_ID, 3, Some("Spam"), None).await?;

    let metadata = TicketRepository::new(db)
        .get_close_metadata(GUILD_ID_U64, &[3])
        .await?;

    assert!(metadata.is_empty());

    Ok(())
}
