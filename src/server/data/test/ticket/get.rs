use super::*;

/// Tests looking up a ticket by guild and ID.
///
/// Expected: Ok(Some) for the guild's ticket, Ok(None) for the same ID in another guild
#[tokio::test]
async fn finds_ticket_within_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ticket::TicketFactory::new(db, GUILD_ID)
        .id(4)
        .open(true)
        .channel_id(Some("523456789012345678"))
        .build()
        .await?;

    let repo = TicketRepository::new(db);

    let ticket = repo.get(GUILD_ID_U64, 4).await?.unwrap();
    assert_eq!(ticket.id, 4);
    assert!(ticket.open);
    assert_eq!(ticket.channel_id, Some(523456789012345678));

    assert!(repo.get(223456789012345678, 4).await?.is_none());
    assert!(repo.get(GUILD_ID_U64, 5).await?.is_none());

    Ok(())
}
