//! Create the in-stay service tables: `service_request`, `room_service_order`,
//! `housekeeping_request` and `maintenance_issue`. Every row belongs to a
//! reservation and its guest; deleting either removes the row.
use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240101_000001_create_guest::Guest;
use crate::m20240101_000003_create_reservation::Reservation;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn belongs_to_stay<T>(table: T, name: &str, reservation_col: T, guest_col: T) -> [ForeignKeyCreateStatement; 2]
where
    T: IntoIden + Copy + 'static,
{
    [
        ForeignKey::create()
            .name(format!("fk_{name}_reservation"))
            .from(table, reservation_col)
            .to(Reservation::Table, Reservation::Id)
            .on_delete(ForeignKeyAction::Cascade)
            .on_update(ForeignKeyAction::Cascade)
            .to_owned(),
        ForeignKey::create()
            .name(format!("fk_{name}_guest"))
            .from(table, guest_col)
            .to(Guest::Table, Guest::Id)
            .on_delete(ForeignKeyAction::Cascade)
            .on_update(ForeignKeyAction::Cascade)
            .to_owned(),
    ]
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let [mut res_fk, mut guest_fk] = belongs_to_stay(
            ServiceRequest::Table,
            "service_request",
            ServiceRequest::ReservationId,
            ServiceRequest::GuestId,
        );
        manager
            .create_table(
                Table::create()
                    .table(ServiceRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceRequest::Id))
                    .col(integer(ServiceRequest::ReservationId))
                    .col(integer(ServiceRequest::GuestId))
                    .col(string(ServiceRequest::ServiceType))
                    .col(string_len(ServiceRequest::Status, 32))
                    .col(string_len(ServiceRequest::Priority, 32))
                    .col(text(ServiceRequest::Description))
                    .col(text(ServiceRequest::Notes))
                    .col(string(ServiceRequest::AssignedTo))
                    .col(timestamp_with_time_zone(ServiceRequest::RequestedAt))
                    .col(timestamp_with_time_zone_null(ServiceRequest::CompletedAt))
                    .col(timestamp_with_time_zone(ServiceRequest::CreatedAt))
                    .col(timestamp_with_time_zone(ServiceRequest::UpdatedAt))
                    .foreign_key(&mut res_fk)
                    .foreign_key(&mut guest_fk)
                    .to_owned(),
            )
            .await?;

        let [mut res_fk, mut guest_fk] = belongs_to_stay(
            RoomServiceOrder::Table,
            "room_service_order",
            RoomServiceOrder::ReservationId,
            RoomServiceOrder::GuestId,
        );
        manager
            .create_table(
                Table::create()
                    .table(RoomServiceOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomServiceOrder::Id))
                    .col(string_len_uniq(RoomServiceOrder::OrderId, 32))
                    .col(integer(RoomServiceOrder::ReservationId))
                    .col(integer(RoomServiceOrder::GuestId))
                    .col(json_binary(RoomServiceOrder::Items))
                    .col(double(RoomServiceOrder::Subtotal))
                    .col(double(RoomServiceOrder::DeliveryFee))
                    .col(double(RoomServiceOrder::Total))
                    .col(string_len(RoomServiceOrder::Status, 32))
                    .col(text(RoomServiceOrder::SpecialNotes))
                    .col(timestamp_with_time_zone(RoomServiceOrder::OrderedAt))
                    .col(timestamp_with_time_zone_null(RoomServiceOrder::DeliveredAt))
                    .col(timestamp_with_time_zone(RoomServiceOrder::CreatedAt))
                    .col(timestamp_with_time_zone(RoomServiceOrder::UpdatedAt))
                    .foreign_key(&mut res_fk)
                    .foreign_key(&mut guest_fk)
                    .to_owned(),
            )
            .await?;

        let [mut res_fk, mut guest_fk] = belongs_to_stay(
            HousekeepingRequest::Table,
            "housekeeping_request",
            HousekeepingRequest::ReservationId,
            HousekeepingRequest::GuestId,
        );
        manager
            .create_table(
                Table::create()
                    .table(HousekeepingRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(HousekeepingRequest::Id))
                    .col(integer(HousekeepingRequest::ReservationId))
                    .col(integer(HousekeepingRequest::GuestId))
                    .col(string(HousekeepingRequest::RequestType))
                    .col(text(HousekeepingRequest::Description))
                    .col(string(HousekeepingRequest::ScheduleTime))
                    .col(string_len(HousekeepingRequest::Status, 32))
                    .col(string(HousekeepingRequest::AssignedTo))
                    .col(timestamp_with_time_zone(HousekeepingRequest::RequestedAt))
                    .col(timestamp_with_time_zone_null(HousekeepingRequest::CompletedAt))
                    .col(timestamp_with_time_zone(HousekeepingRequest::CreatedAt))
                    .col(timestamp_with_time_zone(HousekeepingRequest::UpdatedAt))
                    .foreign_key(&mut res_fk)
                    .foreign_key(&mut guest_fk)
                    .to_owned(),
            )
            .await?;

        let [mut res_fk, mut guest_fk] = belongs_to_stay(
            MaintenanceIssue::Table,
            "maintenance_issue",
            MaintenanceIssue::ReservationId,
            MaintenanceIssue::GuestId,
        );
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceIssue::Table)
                    .if_not_exists()
                    .col(pk_auto(MaintenanceIssue::Id))
                    .col(integer(MaintenanceIssue::ReservationId))
                    .col(integer(MaintenanceIssue::GuestId))
                    .col(string(MaintenanceIssue::IssueType))
                    .col(text(MaintenanceIssue::Description))
                    .col(string_len(MaintenanceIssue::Status, 32))
                    .col(string_len(MaintenanceIssue::Priority, 32))
                    .col(string(MaintenanceIssue::AssignedTo))
                    .col(text(MaintenanceIssue::Notes))
                    .col(timestamp_with_time_zone(MaintenanceIssue::ReportedAt))
                    .col(timestamp_with_time_zone_null(MaintenanceIssue::ResolvedAt))
                    .col(timestamp_with_time_zone(MaintenanceIssue::CreatedAt))
                    .col(timestamp_with_time_zone(MaintenanceIssue::UpdatedAt))
                    .foreign_key(&mut res_fk)
                    .foreign_key(&mut guest_fk)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MaintenanceIssue::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(HousekeepingRequest::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(RoomServiceOrder::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(ServiceRequest::Table).to_owned()).await
    }
}

#[derive(DeriveIden, Clone, Copy)]
pub(crate) enum ServiceRequest {
    Table,
    Id,
    ReservationId,
    GuestId,
    ServiceType,
    Status,
    Priority,
    Description,
    Notes,
    AssignedTo,
    RequestedAt,
    CompletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
pub(crate) enum RoomServiceOrder {
    Table,
    Id,
    OrderId,
    ReservationId,
    GuestId,
    Items,
    Subtotal,
    DeliveryFee,
    Total,
    Status,
    SpecialNotes,
    OrderedAt,
    DeliveredAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
pub(crate) enum HousekeepingRequest {
    Table,
    Id,
    ReservationId,
    GuestId,
    RequestType,
    Description,
    ScheduleTime,
    Status,
    AssignedTo,
    RequestedAt,
    CompletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
pub(crate) enum MaintenanceIssue {
    Table,
    Id,
    ReservationId,
    GuestId,
    IssueType,
    Description,
    Status,
    Priority,
    AssignedTo,
    Notes,
    ReportedAt,
    ResolvedAt,
    CreatedAt,
    UpdatedAt,
}
