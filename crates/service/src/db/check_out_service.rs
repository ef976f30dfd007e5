use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use models::{check_out, reservation, status, validation};

use super::check_in_service::set_stay_status;
use crate::crud::{self, now, patch_text};
use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};

pub const DEFAULT_ROOM_CONDITION: &str = "good";

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CreateCheckOut {
    #[serde(default)]
    pub reservation_id: i32,
    /// Defaults to the reservation's guest.
    pub guest_id: Option<i32>,
    /// Defaults to the reservation's room.
    pub room_id: Option<i32>,
    /// Defaults to now.
    pub check_out_time: Option<DateTime<FixedOffset>>,
    /// Defaults to `good`.
    pub room_condition: Option<String>,
    /// Extra charges raised at departure; defaults to 0.
    pub charges: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCheckOut {
    pub check_out_time: Option<DateTime<FixedOffset>>,
    pub room_condition: Option<String>,
    pub charges: Option<f64>,
    pub notes: Option<String>,
}

pub async fn list_check_outs(db: &DatabaseConnection, opts: Pagination) -> Result<Page<check_out::Model>, ServiceError> {
    let q = check_out::Entity::find()
        .order_by_desc(check_out::Column::CheckOutTime)
        .order_by_desc(check_out::Column::Id);
    crud::paginate(db, q, opts).await
}

pub async fn get_check_out(db: &DatabaseConnection, id: i32) -> Result<check_out::Model, ServiceError> {
    crud::find_or_not_found::<check_out::Entity, _>(db, id, "check-out").await
}

pub async fn get_by_reservation(db: &DatabaseConnection, reservation_id: i32) -> Result<check_out::Model, ServiceError> {
    check_out::Entity::find()
        .filter(check_out::Column::ReservationId.eq(reservation_id))
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("check-out"))
}

/// Record a departure. In one transaction the reservation becomes
/// `checked-out` and the room goes to `cleaning`.
pub async fn create_check_out(db: &DatabaseConnection, input: &CreateCheckOut) -> Result<check_out::Model, ServiceError> {
    let reservation_id = validation::id_ref("reservation_id", input.reservation_id)?;
    let charges = validation::non_negative("charges", input.charges.unwrap_or(0.0))?;
    let txn = db.begin().await?;

    let res = reservation::Entity::find_by_id(reservation_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::Validation(format!("reservation_id: reservation {reservation_id} does not exist")))?;
    let existing = check_out::Entity::find()
        .filter(check_out::Column::ReservationId.eq(reservation_id))
        .one(&txn)
        .await?;
    if existing.is_some() {
        return Err(ServiceError::conflict("check-out", "reservation_id", &reservation_id.to_string()));
    }
    let guest_id = input.guest_id.unwrap_or(res.guest_id);
    let room_id = input.room_id.unwrap_or(res.room_id);
    crud::ensure_guest(&txn, guest_id).await?;

    let ts = now();
    let created = check_out::ActiveModel {
        reservation_id: Set(reservation_id),
        guest_id: Set(guest_id),
        room_id: Set(room_id),
        check_out_time: Set(input.check_out_time.map(|t| t.with_timezone(&Utc).into()).unwrap_or(ts)),
        room_condition: Set(validation::or_default(input.room_condition.as_deref(), DEFAULT_ROOM_CONDITION)),
        charges: Set(charges),
        notes: Set(input.notes.clone().unwrap_or_default()),
        created_at: Set(ts),
        updated_at: Set(ts),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    set_stay_status(&txn, res, room_id, status::reservation::CHECKED_OUT, status::room::CLEANING).await?;
    txn.commit().await?;

    info!(check_out_id = created.id, reservation_id, room_id, charges, "guest checked out");
    Ok(created)
}

pub async fn update_check_out(db: &DatabaseConnection, id: i32, input: &UpdateCheckOut) -> Result<check_out::Model, ServiceError> {
    let mut am: check_out::ActiveModel = get_check_out(db, id).await?.into();
    if let Some(t) = input.check_out_time { am.check_out_time = Set(t.with_timezone(&Utc).into()); }
    if let Some(v) = patch_text("room_condition", input.room_condition.as_deref())? { am.room_condition = Set(v); }
    if let Some(c) = input.charges { am.charges = Set(validation::non_negative("charges", c)?); }
    if let Some(v) = input.notes.as_deref() { am.notes = Set(v.to_string()); }
    am.updated_at = Set(now());
    let updated = am.update(db).await?;
    info!(check_out_id = id, "check-out updated");
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{check_in_service, reservation_service, room_service};
    use crate::test_support::{get_db, seed_stay};

    #[tokio::test]
    async fn check_out_frees_room_for_cleaning() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (_, r, res) = seed_stay(&db).await?;
        check_in_service::create_check_in(&db, &check_in_service::CreateCheckIn { reservation_id: res.id, ..Default::default() }).await?;

        let co = create_check_out(&db, &CreateCheckOut { reservation_id: res.id, charges: Some(18.5), ..Default::default() }).await?;
        assert_eq!(co.room_condition, "good");
        assert_eq!(co.charges, 18.5);
        assert_eq!(reservation_service::get_reservation(&db, res.id).await?.status, "checked-out");
        assert_eq!(room_service::get_room(&db, r.id).await?.status, "cleaning");

        let d = reservation_service::get_reservation_detail(&db, res.id).await?;
        assert_eq!(d.check_out_time, co.check_out_time.format("%H:%M").to_string());

        let again = create_check_out(&db, &CreateCheckOut { reservation_id: res.id, ..Default::default() }).await;
        assert!(matches!(again, Err(ServiceError::Conflict(_))));
        assert_eq!(get_by_reservation(&db, res.id).await?.id, co.id);
        Ok(())
    }

    #[tokio::test]
    async fn negative_charges_rejected() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (_, _, res) = seed_stay(&db).await?;
        let bad = CreateCheckOut { reservation_id: res.id, charges: Some(-1.0), ..Default::default() };
        assert!(create_check_out(&db, &bad).await.unwrap_err().is_validation());
        let co = create_check_out(&db, &CreateCheckOut { reservation_id: res.id, ..Default::default() }).await?;
        let upd = update_check_out(&db, co.id, &UpdateCheckOut { room_condition: Some("damaged".into()), ..Default::default() }).await?;
        assert_eq!(upd.room_condition, "damaged");
        assert_eq!(list_check_outs(&db, Pagination::default()).await?.total, 1);
        Ok(())
    }
}
