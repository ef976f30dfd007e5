//! Create `reservation` with FKs to `guest` and `room`.
use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240101_000001_create_guest::Guest;
use crate::m20240101_000002_create_room::Room;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(string_len_uniq(Reservation::BookingId, 32))
                    .col(integer(Reservation::GuestId))
                    .col(integer(Reservation::RoomId))
                    .col(timestamp_with_time_zone(Reservation::CheckInDate))
                    .col(timestamp_with_time_zone(Reservation::CheckOutDate))
                    .col(integer(Reservation::Nights))
                    .col(double(Reservation::TotalPrice))
                    .col(double(Reservation::PaidAmount))
                    .col(string_len(Reservation::Status, 32))
                    .col(timestamp_with_time_zone(Reservation::CreatedAt))
                    .col(timestamp_with_time_zone(Reservation::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_guest")
                            .from(Reservation::Table, Reservation::GuestId)
                            .to(Guest::Table, Guest::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_room")
                            .from(Reservation::Table, Reservation::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Reservation::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Reservation {
    Table,
    Id,
    BookingId,
    GuestId,
    RoomId,
    CheckInDate,
    CheckOutDate,
    Nights,
    TotalPrice,
    PaidAmount,
    Status,
    CreatedAt,
    UpdatedAt,
}
