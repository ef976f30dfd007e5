use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use models::{housekeeping_request, status, validation};

use crate::crud::{self, now, patch_text};
use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CreateHousekeepingRequest {
    #[serde(default)]
    pub reservation_id: i32,
    #[serde(default)]
    pub guest_id: i32,
    #[serde(default)]
    pub request_type: String,
    #[serde(default)]
    pub description: String,
    /// Defaults to `immediate`.
    pub schedule_time: Option<String>,
    pub assigned_to: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateHousekeepingRequest {
    pub status: Option<String>,
    pub description: Option<String>,
    pub schedule_time: Option<String>,
    pub assigned_to: Option<String>,
}

pub async fn list_housekeeping(db: &DatabaseConnection, status_filter: Option<&str>, opts: Pagination) -> Result<Page<housekeeping_request::Model>, ServiceError> {
    let mut q = housekeeping_request::Entity::find()
        .order_by_desc(housekeeping_request::Column::RequestedAt)
        .order_by_desc(housekeeping_request::Column::Id);
    if let Some(s) = status_filter {
        q = q.filter(housekeeping_request::Column::Status.eq(s));
    }
    crud::paginate(db, q, opts).await
}

pub async fn list_by_reservation(db: &DatabaseConnection, reservation_id: i32) -> Result<Vec<housekeeping_request::Model>, ServiceError> {
    Ok(housekeeping_request::Entity::find()
        .filter(housekeeping_request::Column::ReservationId.eq(reservation_id))
        .order_by_desc(housekeeping_request::Column::RequestedAt)
        .all(db)
        .await?)
}

pub async fn list_by_status(db: &DatabaseConnection, status: &str) -> Result<Vec<housekeeping_request::Model>, ServiceError> {
    Ok(housekeeping_request::Entity::find()
        .filter(housekeeping_request::Column::Status.eq(status))
        .order_by_desc(housekeeping_request::Column::RequestedAt)
        .all(db)
        .await?)
}

pub async fn get_housekeeping(db: &DatabaseConnection, id: i32) -> Result<housekeeping_request::Model, ServiceError> {
    crud::find_or_not_found::<housekeeping_request::Entity, _>(db, id, "housekeeping request").await
}

pub async fn create_housekeeping(db: &DatabaseConnection, input: &CreateHousekeepingRequest) -> Result<housekeeping_request::Model, ServiceError> {
    let reservation_id = validation::id_ref("reservation_id", input.reservation_id)?;
    let guest_id = validation::id_ref("guest_id", input.guest_id)?;
    let request_type = validation::required("request_type", &input.request_type)?;
    let description = validation::required("description", &input.description)?;
    crud::ensure_stay(db, reservation_id, guest_id).await?;

    let ts = now();
    let created = housekeeping_request::ActiveModel {
        reservation_id: Set(reservation_id),
        guest_id: Set(guest_id),
        request_type: Set(request_type),
        description: Set(description),
        schedule_time: Set(validation::or_default(input.schedule_time.as_deref(), housekeeping_request::DEFAULT_SCHEDULE)),
        status: Set(status::request::PENDING.to_string()),
        assigned_to: Set(input.assigned_to.clone().unwrap_or_default()),
        requested_at: Set(ts),
        completed_at: Set(None),
        created_at: Set(ts),
        updated_at: Set(ts),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!(housekeeping_id = created.id, request_type = %created.request_type, "housekeeping request created");
    Ok(created)
}

pub async fn update_housekeeping(db: &DatabaseConnection, id: i32, input: &UpdateHousekeepingRequest) -> Result<housekeeping_request::Model, ServiceError> {
    let current = get_housekeeping(db, id).await?;
    let completed_at = current.completed_at;
    let mut am: housekeeping_request::ActiveModel = current.into();
    if let Some(s) = patch_text("status", input.status.as_deref())? {
        am.completed_at = Set(status::stamp_on(&s, status::request::COMPLETED, completed_at, now()));
        am.status = Set(s);
    }
    if let Some(v) = patch_text("description", input.description.as_deref())? { am.description = Set(v); }
    if let Some(v) = patch_text("schedule_time", input.schedule_time.as_deref())? { am.schedule_time = Set(v); }
    if let Some(v) = input.assigned_to.as_deref() { am.assigned_to = Set(v.trim().to_string()); }
    am.updated_at = Set(now());

    let updated = am.update(db).await?;
    info!(housekeeping_id = id, status = %updated.status, "housekeeping request updated");
    Ok(updated)
}

pub async fn delete_housekeeping(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    crud::delete_or_not_found::<housekeeping_request::Entity, _>(db, id, "housekeeping request").await?;
    info!(housekeeping_id = id, "housekeeping request deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_stay};

    #[tokio::test]
    async fn lifecycle() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (g, _, res) = seed_stay(&db).await?;
        let hk = create_housekeeping(&db, &CreateHousekeepingRequest {
            reservation_id: res.id,
            guest_id: g.id,
            request_type: "towels".into(),
            description: "Two extra towels".into(),
            ..Default::default()
        })
        .await?;
        assert_eq!(hk.schedule_time, "immediate");
        assert_eq!(hk.status, "pending");

        let done = UpdateHousekeepingRequest { status: Some("completed".into()), assigned_to: Some("Maria".into()), ..Default::default() };
        let first = update_housekeeping(&db, hk.id, &done).await?;
        let second = update_housekeeping(&db, hk.id, &done).await?;
        assert!(first.completed_at.is_some());
        assert_eq!(first.completed_at, second.completed_at);
        assert_eq!(second.assigned_to, "Maria");

        assert_eq!(list_by_status(&db, "completed").await?.len(), 1);
        assert_eq!(list_by_reservation(&db, res.id).await?.len(), 1);
        assert_eq!(list_housekeeping(&db, Some("pending"), Pagination::default()).await?.total, 0);

        delete_housekeeping(&db, hk.id).await?;
        assert!(matches!(get_housekeeping(&db, hk.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
