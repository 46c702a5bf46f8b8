use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Addresses are read only through the event join in `EventStore`.
#[async_trait]
pub trait AddressStore: Send + Sync {
    async fn create(
        &self,
        event_id: Uuid,
        city: &str,
        uf: &str,
    ) -> Result<entity::address::Model, DbErr>;
}

pub struct AddressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AddressRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a> AddressStore for AddressRepository<'a> {
    /// Inserts an address for the event. No uniqueness check is made.
    async fn create(
        &self,
        event_id: Uuid,
        city: &str,
        uf: &str,
    ) -> Result<entity::address::Model, DbErr> {
        entity::address::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            city: ActiveValue::Set(city.to_string()),
            uf: ActiveValue::Set(uf.to_string()),
            event_id: ActiveValue::Set(event_id),
        }
        .insert(self.db)
        .await
    }
}
