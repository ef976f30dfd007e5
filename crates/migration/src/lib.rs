//! Migrator registering the hotel schema in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_guest;
mod m20240101_000002_create_room;
mod m20240101_000003_create_reservation;
mod m20240101_000004_create_service_tables;
mod m20240101_000005_create_catalog;
mod m20240101_000006_create_check_in_out;
mod m20240101_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_guest::Migration),
            Box::new(m20240101_000002_create_room::Migration),
            Box::new(m20240101_000003_create_reservation::Migration),
            Box::new(m20240101_000004_create_service_tables::Migration),
            Box::new(m20240101_000005_create_catalog::Migration),
            Box::new(m20240101_000006_create_check_in_out::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000010_add_indexes::Migration),
        ]
    }
}
