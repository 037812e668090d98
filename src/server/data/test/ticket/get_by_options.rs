use super::*;

/// Tests that the guild-only filter returns every ticket of the guild in ID order.
///
/// Expected: Ok(Vec) with open and closed tickets of the guild only
#[tokio::test]
async fn returns_all_guild_tickets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ticket::TicketFactory::new(db, GUILD_ID).id(2).open(true).build().await?;
    factory::ticket::TicketFactory::new(db, GUILD_ID).id(1).build().await?;
    factory::ticket::TicketFactory::new(db, "223456789012345678").id(3).build().await?;

    let tickets = TicketRepository::new(db)
        .get_by_options(TicketQueryOptions::for_guild(GUILD_ID_U64))
        .await?;

    let ids: Vec<i32> = tickets.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);

    Ok(())
}

/// Tests filtering by opener and open state.
///
/// Expected: Ok(Vec) with only the matching ticket
#[tokio::test]
async fn filters_by_user_and_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user_id = "423456789012345678";

    factory::ticket::TicketFactory::new(db, GUILD_ID)
        .id(1)
        .user_id(user_id)
        .open(true)
        .build()
        .await?;
    factory::ticket::TicketFactory::new(db, GUILD_ID)
        .id(2)
        .user_id(user_id)
        .build()
        .await?;
    factory::ticket::TicketFactory::new(db, GUILD_ID)
        .id(3)
        .open(true)
        .build()
        .await?;

    let tickets = TicketRepository::new(db)
        .get_by_options(TicketQueryOptions {
            guild_id: GUILD_ID_U64,
            user_id: Some(423456789012345678),
            open: Some(true),
        })
        .await?;

    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].id, 1);
    assert!(tickets[0].open);

    Ok(())
}
