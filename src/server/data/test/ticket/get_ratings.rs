use super::*;

/// Tests that ratings are keyed by ticket and limited to the requested IDs.
///
/// Expected: Ok(HashMap) with the rated, requested ticket only
#[tokio::test]
async fn returns_ratings_for_requested_tickets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for id in [1, 5] {
        factory::ticket::TicketFactory::new(db, GUILD_ID).id(id).build().await?;
    }
    factory::ticket::TicketFactory::new(db, "223456789012345678")
        .id(2)
        .build()
        .await?;
    factory::ticket::set_rating(db, GUILD_ID, 1, 4).await?;
    factory::ticket::set_rating(db, GUILD_ID, 5, 2).await?;
    factory::ticket::set_rating(db, "223456789012345678", 2, 1).await?;

    let ratings = TicketRepository::new(db)
        .get_ratings(GUILD_ID_U64, &[1, 2, 3])
        .await?;

    assert_eq!(ratings.len(), 1);
    assert_eq!(ratings.get(&1), Some(&4));

    Ok(())
}

/// Tests that an empty ID list short-circuits to an empty map.
///
/// Expected: Ok(empty HashMap)
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ticket::set_rating(db, GUILD_ID, 1, 4).await?;

    let ratings = TicketRepository::new(db).get_ratings(GUILD_ID_U64, &[]).await?;

    assert!(ratings.is_empty());

    Ok(())
}

/// Tests a ticket list longer than SQLite's bound-parameter limit.
///
/// Expected: Ok(HashMap) with the rated ticket
#[tokio::test]
async fn handles_more_ids_than_bound_parameters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ticket::TicketFactory::new(db, GUILD_ID).id(7).build().await?;
    factory::ticket::set_rating(db, GUILD_ID, 7, 3).await?;

    let ticket_ids: Vec<i32> = (1..=40_000).collect();
    let ratings = TicketRepository::new(db)
        .get_ratings(GUILD_ID_U64, &ticket_ids)
        .await?;

    assert_eq!(ratings.len(), 1);
    assert_eq!(ratings.get(&7), Some(&3));

    Ok(())
}
