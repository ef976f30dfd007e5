use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use models::{check_in, reservation, room, status, validation};

use crate::crud::{self, now};
use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CreateCheckIn {
    #[serde(default)]
    pub reservation_id: i32,
    /// Defaults to the reservation's guest.
    pub guest_id: Option<i32>,
    /// Defaults to the reservation's room.
    pub room_id: Option<i32>,
    /// Defaults to now.
    pub check_in_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub id_verified: bool,
    #[serde(default)]
    pub key_issued: bool,
    #[serde(default)]
    pub documents_signed: bool,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCheckIn {
    pub check_in_time: Option<DateTime<FixedOffset>>,
    pub id_verified: Option<bool>,
    pub key_issued: Option<bool>,
    pub documents_signed: Option<bool>,
    pub notes: Option<String>,
}

/// Move a reservation and its room to the given statuses.
pub(crate) async fn set_stay_status<C: ConnectionTrait>(
    db: &C,
    res: reservation::Model,
    room_id: i32,
    reservation_status: &str,
    room_status: &str,
) -> Result<(), ServiceError> {
    let ts = now();
    let mut am: reservation::ActiveModel = res.into();
    am.status = Set(reservation_status.to_string());
    am.updated_at = Set(ts);
    am.update(db).await?;

    let rm = room::Entity::find_by_id(room_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::Validation(format!("room_id: room {room_id} does not exist")))?;
    let mut am: room::ActiveModel = rm.into();
    am.status = Set(room_status.to_string());
    am.updated_at = Set(ts);
    am.update(db).await?;
    Ok(())
}

pub async fn list_check_ins(db: &DatabaseConnection, opts: Pagination) -> Result<Page<check_in::Model>, ServiceError> {
    let q = check_in::Entity::find()
        .order_by_desc(check_in::Column::CheckInTime)
        .order_by_desc(check_in::Column::Id);
    crud::paginate(db, q, opts).await
}

pub async fn get_check_in(db: &DatabaseConnection, id: i32) -> Result<check_in::Model, ServiceError> {
    crud::find_or_not_found::<check_in::Entity, _>(db, id, "check-in").await
}

pub async fn get_by_reservation(db: &DatabaseConnection, reservation_id: i32) -> Result<check_in::Model, ServiceError> {
    check_in::Entity::find()
        .filter(check_in::Column::ReservationId.eq(reservation_id))
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("check-in"))
}

/// Record an arrival. In one transaction the reservation becomes
/// `checked-in` and the room `occupied`.
pub async fn create_check_in(db: &DatabaseConnection, input: &CreateCheckIn) -> Result<check_in::Model, ServiceError> {
    let reservation_id = validation::id_ref("reservation_id", input.reservation_id)?;
    let txn = db.begin().await?;

    let res = reservation::Entity::find_by_id(reservation_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::Validation(format!("reservation_id: reservation {reservation_id} does not exist")))?;
    let existing = check_in::Entity::find()
        .filter(check_in::Column::ReservationId.eq(reservation_id))
        .one(&txn)
        .await?;
    if existing.is_some() {
        return Err(ServiceError::conflict("check-in", "reservation_id", &reservation_id.to_string()));
    }
    let guest_id = input.guest_id.unwrap_or(res.guest_id);
    let room_id = input.room_id.unwrap_or(res.room_id);
    crud::ensure_guest(&txn, guest_id).await?;

    let ts = now();
    let created = check_in::ActiveModel {
        reservation_id: Set(reservation_id),
        guest_id: Set(guest_id),
        room_id: Set(room_id),
        check_in_time: Set(input.check_in_time.map(|t| t.with_timezone(&Utc).into()).unwrap_or(ts)),
        id_verified: Set(input.id_verified),
        key_issued: Set(input.key_issued),
        documents_signed: Set(input.documents_signed),
        notes: Set(input.notes.clone().unwrap_or_default()),
        created_at: Set(ts),
        updated_at: Set(ts),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    set_stay_status(&txn, res, room_id, status::reservation::CHECKED_IN, status::room::OCCUPIED).await?;
    txn.commit().await?;

    info!(check_in_id = created.id, reservation_id, room_id, "guest checked in");
    Ok(created)
}

pub async fn update_check_in(db: &DatabaseConnection, id: i32, input: &UpdateCheckIn) -> Result<check_in::Model, ServiceError> {
    let mut am: check_in::ActiveModel = get_check_in(db, id).await?.into();
    if let Some(t) = input.check_in_time { am.check_in_time = Set(t.with_timezone(&Utc).into()); }
    if let Some(v) = input.id_verified { am.id_verified = Set(v); }
    if let Some(v) = input.key_issued { am.key_issued = Set(v); }
    if let Some(v) = input.documents_signed { am.documents_signed = Set(v); }
    if let Some(v) = input.notes.as_deref() { am.notes = Set(v.to_string()); }
    am.updated_at = Set(now());
    let updated = am.update(db).await?;
    info!(check_in_id = id, "check-in updated");
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{reservation_service, room_service};
    use crate::test_support::{get_db, seed_stay};

    #[tokio::test]
    async fn check_in_moves_reservation_and_room() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (g, r, res) = seed_stay(&db).await?;
        let ci = create_check_in(&db, &CreateCheckIn { reservation_id: res.id, id_verified: true, ..Default::default() }).await?;
        assert_eq!(ci.guest_id, g.id);
        assert_eq!(ci.room_id, r.id);
        assert!(ci.id_verified);

        assert_eq!(reservation_service::get_reservation(&db, res.id).await?.status, "checked-in");
        assert_eq!(room_service::get_room(&db, r.id).await?.status, "occupied");
        assert_eq!(get_by_reservation(&db, res.id).await?.id, ci.id);

        let again = create_check_in(&db, &CreateCheckIn { reservation_id: res.id, ..Default::default() }).await;
        assert!(matches!(again, Err(ServiceError::Conflict(_))));
        Ok(())
    }

    #[tokio::test]
    async fn failed_check_in_leaves_state_alone() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (_, r, res) = seed_stay(&db).await?;
        let bad = CreateCheckIn { reservation_id: res.id, guest_id: Some(999), ..Default::default() };
        assert!(create_check_in(&db, &bad).await.unwrap_err().is_validation());
        assert_eq!(reservation_service::get_reservation(&db, res.id).await?.status, "pending");
        assert_eq!(room_service::get_room(&db, r.id).await?.status, "available");
        assert_eq!(list_check_ins(&db, Pagination::default()).await?.total, 0);
        Ok(())
    }

    #[tokio::test]
    async fn update_and_missing_lookups() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (_, _, res) = seed_stay(&db).await?;
        assert!(matches!(get_by_reservation(&db, res.id).await, Err(ServiceError::NotFound(_))));
        let ci = create_check_in(&db, &CreateCheckIn { reservation_id: res.id, ..Default::default() }).await?;
        let upd = update_check_in(&db, ci.id, &UpdateCheckIn { key_issued: Some(true), notes: Some("late arrival".into()), ..Default::default() }).await?;
        assert!(upd.key_issued);
        assert_eq!(upd.notes, "late arrival");
        Ok(())
    }
}
