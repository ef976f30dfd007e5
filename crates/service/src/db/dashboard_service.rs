//! Aggregates for the front-desk dashboard.
//!
//! Every `*_at` function takes the reference instant explicitly; the plain
//! variants use the current time. Windows are computed in UTC:
//! today starts at midnight, the week covers the last seven days including
//! today, and the month starts on the first.

use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Utc};
use sea_orm::{
    prelude::DateTimeWithTimeZone, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};
use serde::Serialize;
use utoipa::ToSchema;

use models::{guest, housekeeping_request, maintenance_issue, reservation, room, room_service_order, service_request, status};

use crate::errors::ServiceError;

pub const TOP_SERVICE_RESERVATIONS: &str = "reservations";
pub const TOP_SERVICE_ROOM_SERVICE: &str = "room-service";

#[derive(Clone, Debug, Default, PartialEq, Serialize, ToSchema)]
pub struct DashboardStatsResponse {
    pub total_guests: u64,
    pub total_rooms: u64,
    pub occupied_rooms: u64,
    pub available_rooms: u64,
    pub maintenance_rooms: u64,
    pub cleaning_rooms: u64,
    pub pending_check_ins: u64,
    pub pending_check_outs: u64,
    pub pending_service_requests: u64,
    pub pending_housekeeping: u64,
    pub open_maintenance_issues: u64,
    pub today_revenue: f64,
    pub month_revenue: f64,
    /// Occupied rooms over total rooms, 0 when there are no rooms.
    pub occupancy_rate: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, ToSchema)]
pub struct RoomStatusSummaryResponse {
    pub available: u64,
    pub occupied: u64,
    pub maintenance: u64,
    pub cleaning: u64,
    pub total: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, ToSchema)]
pub struct ServiceRequestSummaryResponse {
    pub pending: u64,
    pub in_progress: u64,
    pub completed: u64,
    pub cancelled: u64,
    pub total: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, ToSchema)]
pub struct RevenueResponse {
    pub today_revenue: f64,
    pub today_orders: u64,
    pub week_revenue: f64,
    pub month_revenue: f64,
    pub average_daily_revenue: f64,
    pub top_service: String,
    pub top_service_revenue: f64,
}

/// Revenue earned inside one window, split by source.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct WindowRevenue {
    reservations: f64,
    room_service: f64,
    orders: u64,
}

impl WindowRevenue {
    fn total(&self) -> f64 { self.reservations + self.room_service }
}

fn day_start(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.from_utc_datetime(&now.date_naive().and_time(NaiveTime::MIN))
}

fn month_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let today = day_start(now);
    today - Duration::days(i64::from(now.day0()))
}

fn week_start(now: DateTime<Utc>) -> DateTime<Utc> {
    day_start(now) - Duration::days(6)
}

pub fn occupancy_rate(occupied: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    occupied as f64 / total as f64
}

async fn rooms_with_status(db: &DatabaseConnection, s: &str) -> Result<u64, ServiceError> {
    Ok(room::Entity::find().filter(room::Column::Status.eq(s)).count(db).await?)
}

async fn requests_with_status(db: &DatabaseConnection, s: &str) -> Result<u64, ServiceError> {
    Ok(service_request::Entity::find()
        .filter(service_request::Column::Status.eq(s))
        .count(db)
        .await?)
}

/// Paid reservation amounts and room-service order totals created in
/// `[since, now]`. Cancelled rows never count.
async fn revenue_between(db: &DatabaseConnection, since: DateTime<Utc>, now: DateTime<Utc>) -> Result<WindowRevenue, ServiceError> {
    let since: DateTimeWithTimeZone = since.into();
    let until: DateTimeWithTimeZone = now.into();

    let reservations = reservation::Entity::find()
        .filter(reservation::Column::Status.ne(status::reservation::CANCELLED))
        .filter(reservation::Column::CreatedAt.gte(since))
        .filter(reservation::Column::CreatedAt.lte(until))
        .all(db)
        .await?;
    let orders = room_service_order::Entity::find()
        .filter(room_service_order::Column::Status.ne(status::order::CANCELLED))
        .filter(room_service_order::Column::OrderedAt.gte(since))
        .filter(room_service_order::Column::OrderedAt.lte(until))
        .all(db)
        .await?;

    Ok(WindowRevenue {
        reservations: reservations.iter().map(|r| r.paid_amount).sum(),
        room_service: orders.iter().map(|o| o.total).sum(),
        orders: orders.len() as u64,
    })
}

pub async fn get_stats(db: &DatabaseConnection) -> Result<DashboardStatsResponse, ServiceError> {
    get_stats_at(db, Utc::now()).await
}

pub async fn get_stats_at(db: &DatabaseConnection, now: DateTime<Utc>) -> Result<DashboardStatsResponse, ServiceError> {
    let rooms = get_room_status(db).await?;
    let tomorrow: DateTimeWithTimeZone = (day_start(now) + Duration::days(1)).into();

    let pending_check_ins = reservation::Entity::find()
        .filter(reservation::Column::Status.eq(status::reservation::CONFIRMED))
        .filter(reservation::Column::CheckInDate.lt(tomorrow))
        .count(db)
        .await?;
    let pending_check_outs = reservation::Entity::find()
        .filter(reservation::Column::Status.eq(status::reservation::CHECKED_IN))
        .filter(reservation::Column::CheckOutDate.lt(tomorrow))
        .count(db)
        .await?;
    let pending_housekeeping = housekeeping_request::Entity::find()
        .filter(housekeeping_request::Column::Status.eq(status::request::PENDING))
        .count(db)
        .await?;
    let open_maintenance_issues = maintenance_issue::Entity::find()
        .filter(maintenance_issue::Column::Status.ne(status::maintenance::RESOLVED))
        .count(db)
        .await?;

    let today = revenue_between(db, day_start(now), now).await?;
    let month = revenue_between(db, month_start(now), now).await?;

    Ok(DashboardStatsResponse {
        total_guests: guest::Entity::find().count(db).await?,
        total_rooms: rooms.total,
        occupied_rooms: rooms.occupied,
        available_rooms: rooms.available,
        maintenance_rooms: rooms.maintenance,
        cleaning_rooms: rooms.cleaning,
        pending_check_ins,
        pending_check_outs,
        pending_service_requests: requests_with_status(db, status::request::PENDING).await?,
        pending_housekeeping,
        open_maintenance_issues,
        today_revenue: today.total(),
        month_revenue: month.total(),
        occupancy_rate: occupancy_rate(rooms.occupied, rooms.total),
    })
}

pub async fn get_room_status(db: &DatabaseConnection) -> Result<RoomStatusSummaryResponse, ServiceError> {
    Ok(RoomStatusSummaryResponse {
        available: rooms_with_status(db, status::room::AVAILABLE).await?,
        occupied: rooms_with_status(db, status::room::OCCUPIED).await?,
        maintenance: rooms_with_status(db, status::room::MAINTENANCE).await?,
        cleaning: rooms_with_status(db, status::room::CLEANING).await?,
        total: room::Entity::find().count(db).await?,
    })
}

pub async fn get_service_request_summary(db: &DatabaseConnection) -> Result<ServiceRequestSummaryResponse, ServiceError> {
    Ok(ServiceRequestSummaryResponse {
        pending: requests_with_status(db, status::request::PENDING).await?,
        in_progress: requests_with_status(db, status::request::IN_PROGRESS).await?,
        completed: requests_with_status(db, status::request::COMPLETED).await?,
        cancelled: requests_with_status(db, status::request::CANCELLED).await?,
        total: service_request::Entity::find().count(db).await?,
    })
}

pub async fn get_revenue(db: &DatabaseConnection) -> Result<RevenueResponse, ServiceError> {
    get_revenue_at(db, Utc::now()).await
}

pub async fn get_revenue_at(db: &DatabaseConnection, now: DateTime<Utc>) -> Result<RevenueResponse, ServiceError> {
    let today = revenue_between(db, day_start(now), now).await?;
    let week = revenue_between(db, week_start(now), now).await?;
    let month = revenue_between(db, month_start(now), now).await?;

    // Ties go to reservations.
    let (top_service, top_service_revenue) = if month.room_service > month.reservations {
        (TOP_SERVICE_ROOM_SERVICE, month.room_service)
    } else {
        (TOP_SERVICE_RESERVATIONS, month.reservations)
    };

    Ok(RevenueResponse {
        today_revenue: today.total(),
        today_orders: today.orders,
        week_revenue: week.total(),
        month_revenue: month.total(),
        average_daily_revenue: month.total() / f64::from(now.day()),
        top_service: top_service.to_string(),
        top_service_revenue,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{reservation_service, room_service, room_service_order_service as orders, service_request_service};
    use crate::test_support::{get_db, seed_menu_item, seed_room, seed_stay};

    #[test]
    fn windows_are_utc_boundaries() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 13, 45, 0).unwrap();
        assert_eq!(day_start(now), Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());
        assert_eq!(week_start(now), Utc.with_ymd_and_hms(2024, 3, 9, 0, 0, 0).unwrap());
        assert_eq!(month_start(now), Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn occupancy_handles_empty_hotel() {
        assert_eq!(occupancy_rate(0, 0), 0.0);
        assert_eq!(occupancy_rate(1, 4), 0.25);
    }

    #[tokio::test]
    async fn empty_database_reports_zeroes() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let stats = get_stats(&db).await?;
        assert_eq!(stats, DashboardStatsResponse::default());
        let revenue = get_revenue(&db).await?;
        assert_eq!(revenue.top_service, TOP_SERVICE_RESERVATIONS);
        assert_eq!(revenue.month_revenue, 0.0);
        Ok(())
    }

    #[tokio::test]
    async fn stats_count_rooms_and_pending_work() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (g, r, res) = seed_stay(&db).await?;
        let spare = seed_room(&db, "202", "Standard").await?;
        room_service::update_room_status(&db, r.id, "occupied").await?;
        room_service::update_room_status(&db, spare.id, "maintenance").await?;
        seed_room(&db, "203", "Standard").await?;

        let now = Utc::now();
        reservation_service::update_reservation(
            &db,
            res.id,
            &reservation_service::UpdateReservation {
                check_in_date: Some((now - Duration::hours(1)).into()),
                check_out_date: Some((now + Duration::days(2)).into()),
                status: Some("confirmed".into()),
                ..Default::default()
            },
        )
        .await?;
        service_request_service::create_service_request(
            &db,
            &service_request_service::CreateServiceRequest {
                reservation_id: res.id,
                guest_id: g.id,
                service_type: "towels".into(),
                description: "Two extra towels".into(),
                ..Default::default()
            },
        )
        .await?;

        let stats = get_stats_at(&db, Utc::now()).await?;
        assert_eq!(stats.total_guests, 1);
        assert_eq!(stats.total_rooms, 3);
        assert_eq!(stats.occupied_rooms, 1);
        assert_eq!(stats.available_rooms, 1);
        assert_eq!(stats.maintenance_rooms, 1);
        assert_eq!(stats.pending_check_ins, 1);
        assert_eq!(stats.pending_check_outs, 0);
        assert_eq!(stats.pending_service_requests, 1);
        assert!((stats.occupancy_rate - 1.0 / 3.0).abs() < 1e-9);

        let summary = get_service_request_summary(&db).await?;
        assert_eq!((summary.pending, summary.total), (1, 1));
        Ok(())
    }

    #[tokio::test]
    async fn revenue_sums_payments_and_orders() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (g, _, res) = seed_stay(&db).await?;
        reservation_service::update_reservation(
            &db,
            res.id,
            &reservation_service::UpdateReservation { paid_amount: Some(100.0), ..Default::default() },
        )
        .await?;
        let burger = seed_menu_item(&db, "Burger", 12.0, true).await?;
        let order = orders::create_order(
            &db,
            &orders::CreateRoomServiceOrder {
                reservation_id: res.id,
                guest_id: g.id,
                items: vec![orders::OrderItemInput { menu_item_id: burger.id, quantity: 2 }],
                special_notes: None,
            },
        )
        .await?;
        assert_eq!(order.total, 29.0);

        let revenue = get_revenue_at(&db, Utc::now()).await?;
        assert_eq!(revenue.today_revenue, 129.0);
        assert_eq!(revenue.today_orders, 1);
        assert_eq!(revenue.week_revenue, 129.0);
        assert_eq!(revenue.month_revenue, 129.0);
        assert_eq!(revenue.top_service, TOP_SERVICE_RESERVATIONS);
        assert_eq!(revenue.top_service_revenue, 100.0);

        orders::update_order_status(&db, order.id, "cancelled").await?;
        let revenue = get_revenue_at(&db, Utc::now()).await?;
        assert_eq!(revenue.today_revenue, 100.0);
        assert_eq!(revenue.today_orders, 0);
        Ok(())
    }
}
