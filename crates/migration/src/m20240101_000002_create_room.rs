//! Create `room` inventory table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(string_uniq(Room::RoomNumber))
                    .col(string(Room::RoomType))
                    .col(integer(Room::Floor))
                    .col(integer(Room::Capacity))
                    .col(double(Room::PricePerNight))
                    .col(string_len(Room::Status, 32))
                    .col(timestamp_with_time_zone(Room::CreatedAt))
                    .col(timestamp_with_time_zone(Room::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Room::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Room {
    Table,
    Id,
    RoomNumber,
    RoomType,
    Floor,
    Capacity,
    PricePerNight,
    Status,
    CreatedAt,
    UpdatedAt,
}
