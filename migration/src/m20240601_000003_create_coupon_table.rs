use sea_orm_migration::{prelude::*, schema::*};

use super::m20240601_000001_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Coupon::Table)
                    .if_not_exists()
                    .col(pk_uuid(Coupon::Id))
                    .col(string(Coupon::Code))
                    .col(integer(Coupon::Discount))
                    .col(timestamp_with_time_zone(Coupon::Valid))
                    .col(uuid(Coupon::EventId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_coupon_event_id")
                            .from(Coupon::Table, Coupon::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_coupon_event_id_valid")
                    .table(Coupon::Table)
                    .col(Coupon::EventId)
                    .col(Coupon::Valid)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Coupon::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Coupon {
    Table,
    Id,
    Code,
    Discount,
    Valid,
    EventId,
}
