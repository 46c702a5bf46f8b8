//! Address factory for creating test address entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test addresses linked to an event.
///
/// # Example
///
/// ```rust,ignore
/// let address = AddressFactory::new(&db, event.id)
///     .city("Lisbon")
///     .uf("LX")
///     .build()
///     .await?;
/// ```
pub struct AddressFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: Uuid,
    city: String,
    uf: String,
}

impl<'a> AddressFactory<'a> {
    /// Creates a new AddressFactory for `event_id`.
    ///
    /// Defaults: city `"Porto"`, uf `"PT"`.
    pub fn new(db: &'a DatabaseConnection, event_id: Uuid) -> Self {
        Self {
            db,
            event_id,
            city: "Porto".to_string(),
            uf: "PT".to_string(),
        }
    }

    /// Sets the city.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets the state/region code.
    pub fn uf(mut self, uf: impl Into<String>) -> Self {
        self.uf = uf.into();
        self
    }

    /// Builds and inserts the address entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::address::Model)` - Created address entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::address::Model, DbErr> {
        entity::address::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            city: ActiveValue::Set(self.city),
            uf: ActiveValue::Set(self.uf),
            event_id: ActiveValue::Set(self.event_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an address in the given city and state for `event_id`.
pub async fn create_address(
    db: &DatabaseConnection,
    event_id: Uuid,
    city: &str,
    uf: &str,
) -> Result<entity::address::Model, DbErr> {
    AddressFactory::new(db, event_id).city(city).uf(uf).build().await
}
