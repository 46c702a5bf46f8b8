use super::*;

/// Tests creating an address for an event.
///
/// Expected: Ok with the address linked to the event
#[tokio::test]
async fn creates_address_for_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::EventFactory::new(db)
        .remote(false)
        .build()
        .await?;

    let repo = AddressRepository::new(db);
    let address = repo.create(event.id, "Porto", "PT").await?;

    assert_eq!(address.event_id, event.id);
    assert_eq!(address.city, "Porto");
    assert_eq!(address.uf, "PT");

    Ok(())
}

/// Tests that empty city and uf are accepted.
///
/// Expected: Ok with empty strings stored
#[tokio::test]
async fn accepts_empty_values() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;

    let repo = AddressRepository::new(db);
    let address = repo.create(event.id, "", "").await?;

    assert_eq!(address.city, "");
    assert_eq!(address.uf, "");

    Ok(())
}

/// Tests that the address row is persisted.
///
/// Expected: Ok with the row found by its id
#[tokio::test]
async fn persists_address_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;

    let repo = AddressRepository::new(db);
    let address = repo.create(event.id, "Lisbon", "PT").await?;

    let stored = entity::prelude::Address::find_by_id(address.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.event_id, event.id);
    assert_eq!(stored.city, "Lisbon");

    Ok(())
}
