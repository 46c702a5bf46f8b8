use super::*;

/// Tests that events dated before the reference time are excluded.
///
/// Expected: Ok with only the future event
#[tokio::test]
async fn excludes_past_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = utc(2024, 6, 1);
    factory::event::EventFactory::new(db)
        .date(now - Duration::days(1))
        .build()
        .await?;
    let future = factory::event::EventFactory::new(db)
        .date(now + Duration::days(1))
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let result = repo.find_upcoming(now, 0, 10).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].0.id, future.id);

    Ok(())
}

/// Tests that an event dated exactly at the reference time is included.
///
/// Expected: Ok with the event
#[tokio::test]
async fn includes_event_at_reference_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = utc(2024, 6, 1);
    let event = factory::event::EventFactory::new(db).date(now).build().await?;

    let repo = EventRepository::new(db);
    let result = repo.find_upcoming(now, 0, 10).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].0.id, event.id);

    Ok(())
}

/// Tests date ordering and zero-based pagination.
///
/// Creates three events out of order and reads them back two per page.
///
/// Expected: Ok with pages [first, second] and [third]
#[tokio::test]
async fn paginates_in_date_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = utc(2024, 6, 1);
    let third = factory::event::EventFactory::new(db)
        .date(now + Duration::days(3))
        .build()
        .await?;
    let first = factory::event::EventFactory::new(db)
        .date(now + Duration::days(1))
        .build()
        .await?;
    let second = factory::event::EventFactory::new(db)
        .date(now + Duration::days(2))
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let page_0 = repo.find_upcoming(now, 0, 2).await?;
    let page_1 = repo.find_upcoming(now, 1, 2).await?;
    let page_2 = repo.find_upcoming(now, 2, 2).await?;

    let ids: Vec<_> = page_0.iter().map(|(event, _)| event.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(page_1.len(), 1);
    assert_eq!(page_1[0].0.id, third.id);
    assert!(page_2.is_empty());

    Ok(())
}

/// Tests that the address is left-joined.
///
/// Expected: Ok with Some(address) for the non-remote event and None for the remote one
#[tokio::test]
async fn joins_optional_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = utc(2024, 6, 1);
    let remote = factory::event::EventFactory::new(db)
        .date(now + Duration::days(1))
        .build()
        .await?;
    let local = factory::event::EventFactory::new(db)
        .date(now + Duration::days(2))
        .remote(false)
        .build()
        .await?;
    factory::create_address(db, local.id, "Lisbon", "PT").await?;

    let repo = EventRepository::new(db);
    let result = repo.find_upcoming(now, 0, 10).await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].0.id, remote.id);
    assert!(result[0].1.is_none());
    assert_eq!(result[1].0.id, local.id);
    assert_eq!(result[1].1.as_ref().unwrap().city, "Lisbon");

    Ok(())
}
