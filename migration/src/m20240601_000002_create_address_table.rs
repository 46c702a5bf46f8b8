use sea_orm_migration::{prelude::*, schema::*};

use super::m20240601_000001_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No unique index on event_id; one address per event is enforced by the service layer.
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(pk_uuid(Address::Id))
                    .col(string(Address::City))
                    .col(string(Address::Uf))
                    .col(uuid(Address::EventId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_event_id")
                            .from(Address::Table, Address::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Address::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Address {
    Table,
    Id,
    City,
    Uf,
    EventId,
}
