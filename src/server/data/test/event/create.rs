use super::*;

fn params(remote: bool) -> CreateEventParams {
    CreateEventParams {
        title: "Launch".to_string(),
        description: Some("Product launch".to_string()),
        date: DateTime::from_timestamp_millis(1_700_000_000_000).unwrap(),
        city: String::new(),
        state: String::new(),
        remote,
        event_url: "https://launch.example.com".to_string(),
        image: None,
    }
}

/// Tests inserting an event with an image URL.
///
/// Expected: Ok with every field persisted and a generated id
#[tokio::test]
async fn creates_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let event = repo
        .create(&params(true), Some("https://cdn.example.com/a.png".to_string()))
        .await?;

    let stored = entity::prelude::Event::find_by_id(event.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.title, "Launch");
    assert_eq!(stored.description.as_deref(), Some("Product launch"));
    assert_eq!(stored.date.timestamp_millis(), 1_700_000_000_000);
    assert!(stored.remote);
    assert_eq!(stored.event_url, "https://launch.example.com");
    assert_eq!(stored.img_url.as_deref(), Some("https://cdn.example.com/a.png"));

    Ok(())
}

/// Tests that the store never creates an address itself.
///
/// Expected: Ok with the address table untouched even for a non-remote event
#[tokio::test]
async fn does_not_create_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    repo.create(&params(false), None).await?;

    let count = entity::prelude::Address::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests that each insert gets a distinct id.
///
/// Expected: Ok with two different ids
#[tokio::test]
async fn generates_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let first = repo.create(&params(true), None).await?;
    let second = repo.create(&params(true), None).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(entity::prelude::Event::find().count(db).await?, 2);

    Ok(())
}
