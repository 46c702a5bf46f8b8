//! Event factory for creating test event entities.
//!
//! This module provides factory methods for creating event entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::event::EventFactory;
///
/// let event = EventFactory::new(&db)
///     .title("RustConf")
///     .remote(false)
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    date: DateTime<Utc>,
    remote: bool,
    event_url: String,
    img_url: Option<String>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Event {id}"` where id is auto-incremented
    /// - description: `Some("Test event description")`
    /// - date: 1 day from now
    /// - remote: `true`
    /// - event_url: `"https://events.example.com/{id}"`
    /// - img_url: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `EventFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Event {}", id),
            description: Some("Test event description".to_string()),
            date: Utc::now() + Duration::days(1),
            remote: true,
            event_url: format!("https://events.example.com/{}", id),
            img_url: None,
        }
    }

    /// Sets the event title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the event description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the event date.
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Sets whether the event is remote.
    pub fn remote(mut self, remote: bool) -> Self {
        self.remote = remote;
        self
    }

    /// Sets the event URL.
    pub fn event_url(mut self, event_url: impl Into<String>) -> Self {
        self.event_url = event_url.into();
        self
    }

    /// Sets the image URL.
    pub fn img_url(mut self, img_url: Option<String>) -> Self {
        self.img_url = img_url;
        self
    }

    /// Builds and inserts the event entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            date: ActiveValue::Set(self.date),
            remote: ActiveValue::Set(self.remote),
            event_url: ActiveValue::Set(self.event_url),
            img_url: ActiveValue::Set(self.img_url),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a remote event one day in the future with default values.
///
/// Shorthand for `EventFactory::new(db).build().await`.
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}
