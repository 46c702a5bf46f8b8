use super::*;
use sea_orm::DatabaseConnection;

fn whole_year() -> EventFilter {
    EventFilter {
        city: None,
        uf: None,
        start: utc(2024, 1, 1),
        end: utc(2024, 12, 31),
    }
}

async fn create_event_at(
    db: &DatabaseConnection,
    date: DateTime<Utc>,
    location: Option<(&str, &str)>,
) -> Result<entity::event::Model, DbErr> {
    let event = factory::event::EventFactory::new(db)
        .date(date)
        .remote(location.is_none())
        .build()
        .await?;

    if let Some((city, uf)) = location {
        factory::create_address(db, event.id, city, uf).await?;
    }

    Ok(event)
}

/// Tests that without city or uf every event in range is returned, with or without
/// an address.
///
/// Expected: Ok with both events
#[tokio::test]
async fn returns_all_events_in_range_without_location_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let remote = create_event_at(db, utc(2024, 3, 1), None).await?;
    let local = create_event_at(db, utc(2024, 4, 1), Some(("Porto", "PT"))).await?;

    let repo = EventRepository::new(db);
    let result = repo.find_filtered(&whole_year(), 0, 10).await?;

    let ids: Vec<_> = result.iter().map(|(event, _)| event.id).collect();
    assert_eq!(ids, vec![remote.id, local.id]);

    Ok(())
}

/// Tests city substring matching.
///
/// Expected: Ok with only the events whose city contains "Lisbon"
#[tokio::test]
async fn filters_by_city_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lisbon = create_event_at(db, utc(2024, 3, 1), Some(("Lisbon", "PT"))).await?;
    let greater = create_event_at(db, utc(2024, 3, 2), Some(("Greater Lisbon", "PT"))).await?;
    create_event_at(db, utc(2024, 3, 3), Some(("Porto", "PT"))).await?;
    create_event_at(db, utc(2024, 3, 4), None).await?;

    let filter = EventFilter {
        city: Some("Lisbon".to_string()),
        ..whole_year()
    };
    let repo = EventRepository::new(db);
    let result = repo.find_filtered(&filter, 0, 10).await?;

    let ids: Vec<_> = result.iter().map(|(event, _)| event.id).collect();
    assert_eq!(ids, vec![lisbon.id, greater.id]);
    assert!(result
        .iter()
        .all(|(_, address)| address.as_ref().unwrap().city.contains("Lisbon")));

    Ok(())
}

/// Tests combining city and uf filters.
///
/// Expected: Ok with only the event matching both
#[tokio::test]
async fn filters_by_city_and_uf() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let matching = create_event_at(db, utc(2024, 5, 1), Some(("Springfield", "IL"))).await?;
    create_event_at(db, utc(2024, 5, 2), Some(("Springfield", "MA"))).await?;

    let filter = EventFilter {
        city: Some("Springfield".to_string()),
        uf: Some("IL".to_string()),
        ..whole_year()
    };
    let repo = EventRepository::new(db);
    let result = repo.find_filtered(&filter, 0, 10).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].0.id, matching.id);

    Ok(())
}

/// Tests that the date range is inclusive on both ends.
///
/// Expected: Ok with the events at start and end, without those just outside
#[tokio::test]
async fn date_range_is_inclusive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let start = utc(2024, 2, 1);
    let end = utc(2024, 2, 29);
    create_event_at(db, start - Duration::seconds(1), None).await?;
    let at_start = create_event_at(db, start, None).await?;
    let at_end = create_event_at(db, end, None).await?;
    create_event_at(db, end + Duration::seconds(1), None).await?;

    let filter = EventFilter {
        city: None,
        uf: None,
        start,
        end,
    };
    let repo = EventRepository::new(db);
    let result = repo.find_filtered(&filter, 0, 10).await?;

    let ids: Vec<_> = result.iter().map(|(event, _)| event.id).collect();
    assert_eq!(ids, vec![at_start.id, at_end.id]);

    Ok(())
}

/// Tests pagination of filtered results.
///
/// Expected: Ok with the second page holding the last match
#[tokio::test]
async fn paginates_filtered_results() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_event_at(db, utc(2024, 7, 1), Some(("Porto", "PT"))).await?;
    create_event_at(db, utc(2024, 7, 2), Some(("Porto", "PT"))).await?;
    let last = create_event_at(db, utc(2024, 7, 3), Some(("Porto", "PT"))).await?;

    let filter = EventFilter {
        city: Some("Porto".to_string()),
        ..whole_year()
    };
    let repo = EventRepository::new(db);
    let result = repo.find_filtered(&filter, 1, 2).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].0.id, last.id);

    Ok(())
}

/// Tests that the city filter is case-sensitive.
///
/// Expected: Ok with no events for "lisbon" and one for "Lisbon"
#[tokio::test]
async fn city_filter_is_case_sensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lisbon = create_event_at(db, utc(2024, 3, 1), Some(("Lisbon", "PT"))).await?;

    let repo = EventRepository::new(db);
    let lowercase = repo
        .find_filtered(
            &EventFilter {
                city: Some("lisbon".to_string()),
                ..whole_year()
            },
            0,
            10,
        )
        .await?;
    let exact = repo
        .find_filtered(
            &EventFilter {
                city: Some("Lisbon".to_string()),
                ..whole_year()
            },
            0,
            10,
        )
        .await?;

    assert!(lowercase.is_empty());
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].0.id, lisbon.id);

    Ok(())
}

/// Tests that the uf filter is case-sensitive.
///
/// Expected: Ok with no events for "pt"
#[tokio::test]
async fn uf_filter_is_case_sensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_event_at(db, utc(2024, 3, 1), Some(("Porto", "PT"))).await?;

    let filter = EventFilter {
        uf: Some("pt".to_string()),
        ..whole_year()
    };
    let repo = EventRepository::new(db);
    let result = repo.find_filtered(&filter, 0, 10).await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests that `%` and `_` in a filter match only themselves.
///
/// Expected: Ok with no events for "%" and "_"
#[tokio::test]
async fn wildcards_match_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_event_at(db, utc(2024, 3, 1), Some(("Porto", "PT"))).await?;

    let repo = EventRepository::new(db);
    for pattern in ["%", "_"] {
        let filter = EventFilter {
            city: Some(pattern.to_string()),
            ..whole_year()
        };
        let result = repo.find_filtered(&filter, 0, 10).await?;

        assert!(result.is_empty(), "{} matched an event", pattern);
    }

    Ok(())
}
