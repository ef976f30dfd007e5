use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use models::errors::ModelError;
use models::{
    check_in, check_out, guest, guest_preferences, reservation, room, service_request, status, validation,
};

use crate::crud::{self, now, patch_text};
use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};
use crate::views::{stay_times, GuestPreferencesResponse, ReservationDetailResponse};

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CreateReservation {
    #[serde(default)]
    pub guest_id: i32,
    #[serde(default)]
    pub room_id: i32,
    pub check_in_date: Option<DateTime<FixedOffset>>,
    pub check_out_date: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub total_price: f64,
    /// Defaults to 0.
    pub paid_amount: Option<f64>,
    /// Defaults to `pending`.
    pub status: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateReservation {
    pub room_id: Option<i32>,
    pub check_in_date: Option<DateTime<FixedOffset>>,
    pub check_out_date: Option<DateTime<FixedOffset>>,
    pub total_price: Option<f64>,
    pub paid_amount: Option<f64>,
    pub status: Option<String>,
}

fn required_date(field: &str, v: Option<DateTime<FixedOffset>>) -> Result<DateTime<FixedOffset>, ModelError> {
    v.ok_or_else(|| ModelError::invalid(field, "is required"))
}

async fn ensure_room(db: &DatabaseConnection, room_id: i32) -> Result<(), ServiceError> {
    room::Entity::find_by_id(room_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::Validation(format!("room_id: room {room_id} does not exist")))?;
    Ok(())
}

pub async fn list_reservations(db: &DatabaseConnection, status_filter: Option<&str>, opts: Pagination) -> Result<Page<reservation::Model>, ServiceError> {
    let mut q = reservation::Entity::find().order_by_desc(reservation::Column::CheckInDate).order_by_asc(reservation::Column::Id);
    if let Some(s) = status_filter {
        q = q.filter(reservation::Column::Status.eq(s));
    }
    crud::paginate(db, q, opts).await
}

pub async fn list_by_guest(db: &DatabaseConnection, guest_id: i32) -> Result<Vec<reservation::Model>, ServiceError> {
    Ok(reservation::Entity::find()
        .filter(reservation::Column::GuestId.eq(guest_id))
        .order_by_desc(reservation::Column::CheckInDate)
        .all(db)
        .await?)
}

pub async fn list_by_room(db: &DatabaseConnection, room_id: i32) -> Result<Vec<reservation::Model>, ServiceError> {
    Ok(reservation::Entity::find()
        .filter(reservation::Column::RoomId.eq(room_id))
        .order_by_desc(reservation::Column::CheckInDate)
        .all(db)
        .await?)
}

pub async fn get_reservation(db: &DatabaseConnection, id: i32) -> Result<reservation::Model, ServiceError> {
    crud::find_or_not_found::<reservation::Entity, _>(db, id, "reservation").await
}

/// Book a room. Nights are derived from the dates and a booking id is
/// issued; room availability over the dates is not checked.
pub async fn create_reservation(db: &DatabaseConnection, input: &CreateReservation) -> Result<reservation::Model, ServiceError> {
    let guest_id = validation::id_ref("guest_id", input.guest_id)?;
    let room_id = validation::id_ref("room_id", input.room_id)?;
    let check_in = required_date("check_in_date", input.check_in_date)?;
    let check_out = required_date("check_out_date", input.check_out_date)?;
    let nights = reservation::compute_nights(check_in, check_out)?;
    let total_price = validation::non_negative("total_price", input.total_price)?;
    let paid_amount = validation::non_negative("paid_amount", input.paid_amount.unwrap_or(0.0))?;
    let status = validation::or_default(input.status.as_deref(), status::reservation::PENDING);

    crud::ensure_guest(db, guest_id).await?;
    ensure_room(db, room_id).await?;

    let ts = now();
    let created = reservation::ActiveModel {
        booking_id: Set(reservation::generate_booking_id()),
        guest_id: Set(guest_id),
        room_id: Set(room_id),
        check_in_date: Set(check_in.with_timezone(&Utc).into()),
        check_out_date: Set(check_out.with_timezone(&Utc).into()),
        nights: Set(nights),
        total_price: Set(total_price),
        paid_amount: Set(paid_amount),
        status: Set(status),
        created_at: Set(ts),
        updated_at: Set(ts),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!(reservation_id = created.id, booking_id = %created.booking_id, nights, "reservation created");
    Ok(created)
}

pub async fn update_reservation(db: &DatabaseConnection, id: i32, input: &UpdateReservation) -> Result<reservation::Model, ServiceError> {
    let current = get_reservation(db, id).await?;
    let check_in = input.check_in_date.unwrap_or(current.check_in_date);
    let check_out = input.check_out_date.unwrap_or(current.check_out_date);
    let nights = reservation::compute_nights(check_in, check_out)?;

    let mut am: reservation::ActiveModel = current.into();
    if let Some(room_id) = input.room_id {
        ensure_room(db, validation::id_ref("room_id", room_id)?).await?;
        am.room_id = Set(room_id);
    }
    if input.check_in_date.is_some() || input.check_out_date.is_some() {
        am.check_in_date = Set(check_in.with_timezone(&Utc).into());
        am.check_out_date = Set(check_out.with_timezone(&Utc).into());
        am.nights = Set(nights);
    }
    if let Some(p) = input.total_price { am.total_price = Set(validation::non_negative("total_price", p)?); }
    if let Some(p) = input.paid_amount { am.paid_amount = Set(validation::non_negative("paid_amount", p)?); }
    if let Some(v) = patch_text("status", input.status.as_deref())? { am.status = Set(v); }
    am.updated_at = Set(now());

    let updated = am.update(db).await?;
    info!(reservation_id = id, status = %updated.status, "reservation updated");
    Ok(updated)
}

pub async fn delete_reservation(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    crud::delete_or_not_found::<reservation::Entity, _>(db, id, "reservation").await?;
    info!(reservation_id = id, "reservation deleted");
    Ok(())
}

/// Reservation with guest and room, clock times, preferences and requests.
pub async fn get_reservation_detail(db: &DatabaseConnection, id: i32) -> Result<ReservationDetailResponse, ServiceError> {
    let r = get_reservation(db, id).await?;
    let g = guest::Entity::find_by_id(r.guest_id).one(db).await?;
    let rm = room::Entity::find_by_id(r.room_id).one(db).await?;
    let ci = check_in::Entity::find().filter(check_in::Column::ReservationId.eq(id)).one(db).await?;
    let co = check_out::Entity::find().filter(check_out::Column::ReservationId.eq(id)).one(db).await?;
    let prefs = guest_preferences::Entity::find()
        .filter(guest_preferences::Column::GuestId.eq(r.guest_id))
        .one(db)
        .await?;
    let requests = service_request::Entity::find()
        .filter(service_request::Column::ReservationId.eq(id))
        .order_by_desc(service_request::Column::RequestedAt)
        .all(db)
        .await?;
    let (check_in_time, check_out_time) = stay_times(ci.as_ref(), co.as_ref());

    Ok(ReservationDetailResponse {
        id: r.id,
        booking_id: r.booking_id,
        guest: g.map(Into::into),
        room: rm.map(Into::into),
        check_in_date: r.check_in_date,
        check_out_date: r.check_out_date,
        check_in_time,
        check_out_time,
        nights: r.nights,
        total_price: r.total_price,
        paid_amount: r.paid_amount,
        status: r.status,
        preferences: GuestPreferencesResponse::from(prefs).flattened(),
        service_requests: requests.into_iter().map(Into::into).collect(),
        created_at: r.created_at,
        updated_at: r.updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use crate::test_support::{get_db, seed_guest, seed_room, seed_stay};

    fn dates(days: i64, extra_hours: i64) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
        let ci = Utc.with_ymd_and_hms(2026, 6, 1, 15, 0, 0).unwrap();
        (ci.into(), (ci + Duration::days(days) + Duration::hours(extra_hours)).into())
    }

    #[tokio::test]
    async fn nights_and_booking_id_are_derived() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let g = seed_guest(&db, "nights@example.com").await?;
        let r = seed_room(&db, "401", "Suite").await?;
        let (ci, co) = dates(3, 2);
        let input = CreateReservation {
            guest_id: g.id,
            room_id: r.id,
            check_in_date: Some(ci),
            check_out_date: Some(co),
            total_price: 480.0,
            ..Default::default()
        };
        let res = create_reservation(&db, &input).await?;
        assert!(res.check_out_date > res.check_in_date);
        assert_eq!(res.nights, 4);
        assert!(res.booking_id.starts_with("BK-"));
        assert_eq!(res.status, status::reservation::PENDING);
        assert_eq!(res.paid_amount, 0.0);
        Ok(())
    }

    #[tokio::test]
    async fn bad_dates_and_refs_are_validation_errors() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let g = seed_guest(&db, "bad@example.com").await?;
        let r = seed_room(&db, "402", "Suite").await?;
        let (ci, co) = dates(2, 0);

        let inverted = CreateReservation { guest_id: g.id, room_id: r.id, check_in_date: Some(co), check_out_date: Some(ci), ..Default::default() };
        assert!(create_reservation(&db, &inverted).await.unwrap_err().is_validation());

        let missing = CreateReservation { guest_id: g.id, room_id: r.id, check_in_date: Some(ci), ..Default::default() };
        assert!(create_reservation(&db, &missing).await.unwrap_err().is_validation());

        let ghost = CreateReservation { guest_id: 999, room_id: r.id, check_in_date: Some(ci), check_out_date: Some(co), ..Default::default() };
        assert!(create_reservation(&db, &ghost).await.unwrap_err().is_validation());
        Ok(())
    }

    #[tokio::test]
    async fn moving_dates_recomputes_nights() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (_, _, res) = seed_stay(&db).await?;
        let upd = UpdateReservation {
            check_out_date: Some(res.check_in_date + Duration::days(5)),
            status: Some("confirmed".into()),
            ..Default::default()
        };
        let updated = update_reservation(&db, res.id, &upd).await?;
        assert_eq!(updated.nights, 5);
        assert_eq!(updated.status, "confirmed");

        let inverted = UpdateReservation { check_out_date: Some(res.check_in_date), ..Default::default() };
        assert!(update_reservation(&db, res.id, &inverted).await.unwrap_err().is_validation());
        Ok(())
    }

    #[tokio::test]
    async fn detail_uses_default_clock_times() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (g, r, res) = seed_stay(&db).await?;
        let d = get_reservation_detail(&db, res.id).await?;
        assert_eq!(d.check_in_time, "15:00");
        assert_eq!(d.check_out_time, "11:00");
        assert_eq!(d.guest.map(|x| x.id), Some(g.id));
        assert_eq!(d.room.map(|x| x.id), Some(r.id));

        assert_eq!(list_by_guest(&db, g.id).await?.len(), 1);
        assert_eq!(list_by_room(&db, r.id).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn deleting_room_cascades() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (_, r, res) = seed_stay(&db).await?;
        crate::db::room_service::delete_room(&db, r.id).await?;
        assert!(matches!(get_reservation(&db, res.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
