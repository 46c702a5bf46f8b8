pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_event_table;
mod m20240601_000002_create_address_table;
mod m20240601_000003_create_coupon_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_event_table::Migration),
            Box::new(m20240601_000002_create_address_table::Migration),
            Box::new(m20240601_000003_create_coupon_table::Migration),
        ]
    }
}
