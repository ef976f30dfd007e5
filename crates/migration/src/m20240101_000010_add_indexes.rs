use sea_orm_migration::prelude::*;

use crate::m20240101_000002_create_room::Room;
use crate::m20240101_000003_create_reservation::Reservation;
use crate::m20240101_000004_create_service_tables::{
    HousekeepingRequest, MaintenanceIssue, RoomServiceOrder, ServiceRequest,
};
use crate::m20240101_000005_create_catalog::{MenuItem, Staff};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Lookup indexes backing the list filters.
fn indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create().name("idx_room_status").table(Room::Table).col(Room::Status).to_owned(),
        Index::create().name("idx_reservation_guest").table(Reservation::Table).col(Reservation::GuestId).to_owned(),
        Index::create().name("idx_reservation_room").table(Reservation::Table).col(Reservation::RoomId).to_owned(),
        Index::create().name("idx_reservation_status").table(Reservation::Table).col(Reservation::Status).to_owned(),
        Index::create()
            .name("idx_service_request_reservation")
            .table(ServiceRequest::Table)
            .col(ServiceRequest::ReservationId)
            .to_owned(),
        Index::create()
            .name("idx_service_request_status")
            .table(ServiceRequest::Table)
            .col(ServiceRequest::Status)
            .to_owned(),
        Index::create()
            .name("idx_room_service_order_reservation")
            .table(RoomServiceOrder::Table)
            .col(RoomServiceOrder::ReservationId)
            .to_owned(),
        Index::create()
            .name("idx_housekeeping_request_reservation")
            .table(HousekeepingRequest::Table)
            .col(HousekeepingRequest::ReservationId)
            .to_owned(),
        Index::create()
            .name("idx_maintenance_issue_reservation")
            .table(MaintenanceIssue::Table)
            .col(MaintenanceIssue::ReservationId)
            .to_owned(),
        Index::create().name("idx_menu_item_category").table(MenuItem::Table).col(MenuItem::Category).to_owned(),
        Index::create().name("idx_staff_role").table(Staff::Table).col(Staff::Role).to_owned(),
    ]
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for idx in indexes() {
            manager.create_index(idx).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let drops = vec![
            Index::drop().name("idx_room_status").table(Room::Table).to_owned(),
            Index::drop().name("idx_reservation_guest").table(Reservation::Table).to_owned(),
            Index::drop().name("idx_reservation_room").table(Reservation::Table).to_owned(),
            Index::drop().name("idx_reservation_status").table(Reservation::Table).to_owned(),
            Index::drop().name("idx_service_request_reservation").table(ServiceRequest::Table).to_owned(),
            Index::drop().name("idx_service_request_status").table(ServiceRequest::Table).to_owned(),
            Index::drop().name("idx_room_service_order_reservation").table(RoomServiceOrder::Table).to_owned(),
            Index::drop().name("idx_housekeeping_request_reservation").table(HousekeepingRequest::Table).to_owned(),
            Index::drop().name("idx_maintenance_issue_reservation").table(MaintenanceIssue::Table).to_owned(),
            Index::drop().name("idx_menu_item_category").table(MenuItem::Table).to_owned(),
            Index::drop().name("idx_staff_role").table(Staff::Table).to_owned(),
        ];
        for idx in drops {
            manager.drop_index(idx).await?;
        }
        Ok(())
    }
}
