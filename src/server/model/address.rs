use uuid::Uuid;

/// Physical address of a non-remote event.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: Uuid,
    pub city: String,
    /// State or region code.
    pub uf: String,
    pub event_id: Uuid,
}

impl Address {
    pub fn from_entity(entity: entity::address::Model) -> Self {
        Self {
            id: entity.id,
            city: entity.city,
            uf: entity.uf,
            event_id: entity.event_id,
        }
    }
}
