//! Create `check_in` and `check_out`: at most one of each per reservation.
use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240101_000001_create_guest::Guest;
use crate::m20240101_000002_create_room::Room;
use crate::m20240101_000003_create_reservation::Reservation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CheckIn::Table)
                    .if_not_exists()
                    .col(pk_auto(CheckIn::Id))
                    .col(integer_uniq(CheckIn::ReservationId))
                    .col(integer(CheckIn::GuestId))
                    .col(integer(CheckIn::RoomId))
                    .col(timestamp_with_time_zone(CheckIn::CheckInTime))
                    .col(boolean(CheckIn::IdVerified))
                    .col(boolean(CheckIn::KeyIssued))
                    .col(boolean(CheckIn::DocumentsSigned))
                    .col(text(CheckIn::Notes))
                    .col(timestamp_with_time_zone(CheckIn::CreatedAt))
                    .col(timestamp_with_time_zone(CheckIn::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_check_in_reservation")
                            .from(CheckIn::Table, CheckIn::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_check_in_guest")
                            .from(CheckIn::Table, CheckIn::GuestId)
                            .to(Guest::Table, Guest::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_check_in_room")
                            .from(CheckIn::Table, CheckIn::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CheckOut::Table)
                    .if_not_exists()
                    .col(pk_auto(CheckOut::Id))
                    .col(integer_uniq(CheckOut::ReservationId))
                    .col(integer(CheckOut::GuestId))
                    .col(integer(CheckOut::RoomId))
                    .col(timestamp_with_time_zone(CheckOut::CheckOutTime))
                    .col(string(CheckOut::RoomCondition))
                    .col(double(CheckOut::Charges))
                    .col(text(CheckOut::Notes))
                    .col(timestamp_with_time_zone(CheckOut::CreatedAt))
                    .col(timestamp_with_time_zone(CheckOut::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_check_out_reservation")
                            .from(CheckOut::Table, CheckOut::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_check_out_guest")
                            .from(CheckOut::Table, CheckOut::GuestId)
                            .to(Guest::Table, Guest::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_check_out_room")
                            .from(CheckOut::Table, CheckOut::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CheckOut::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(CheckIn::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CheckIn {
    Table,
    Id,
    ReservationId,
    GuestId,
    RoomId,
    CheckInTime,
    IdVerified,
    KeyIssued,
    DocumentsSigned,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CheckOut {
    Table,
    Id,
    ReservationId,
    GuestId,
    RoomId,
    CheckOutTime,
    RoomCondition,
    Charges,
    Notes,
    CreatedAt,
    UpdatedAt,
}
