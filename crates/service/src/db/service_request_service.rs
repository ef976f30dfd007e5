use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use models::{guest, room, service_request, status, validation};

use crate::crud::{self, now, patch_text};
use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};
use crate::views::ServiceRequestDetailResponse;

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CreateServiceRequest {
    #[serde(default)]
    pub reservation_id: i32,
    #[serde(default)]
    pub guest_id: i32,
    #[serde(default)]
    pub service_type: String,
    /// Defaults to `medium`.
    pub priority: Option<String>,
    #[serde(default)]
    pub description: String,
    pub notes: Option<String>,
    pub assigned_to: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateServiceRequest {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub description: Option<String>,
    pub assigned_to: Option<String>,
    pub notes: Option<String>,
}

pub async fn list_service_requests(db: &DatabaseConnection, status_filter: Option<&str>, opts: Pagination) -> Result<Page<service_request::Model>, ServiceError> {
    let mut q = service_request::Entity::find()
        .order_by_desc(service_request::Column::RequestedAt)
        .order_by_desc(service_request::Column::Id);
    if let Some(s) = status_filter {
        q = q.filter(service_request::Column::Status.eq(s));
    }
    crud::paginate(db, q, opts).await
}

async fn list_where(db: &DatabaseConnection, cond: sea_orm::sea_query::SimpleExpr) -> Result<Vec<service_request::Model>, ServiceError> {
    Ok(service_request::Entity::find()
        .filter(cond)
        .order_by_desc(service_request::Column::RequestedAt)
        .order_by_desc(service_request::Column::Id)
        .all(db)
        .await?)
}

pub async fn list_by_reservation(db: &DatabaseConnection, reservation_id: i32) -> Result<Vec<service_request::Model>, ServiceError> {
    list_where(db, service_request::Column::ReservationId.eq(reservation_id)).await
}

pub async fn list_by_guest(db: &DatabaseConnection, guest_id: i32) -> Result<Vec<service_request::Model>, ServiceError> {
    list_where(db, service_request::Column::GuestId.eq(guest_id)).await
}

pub async fn list_by_status(db: &DatabaseConnection, status: &str) -> Result<Vec<service_request::Model>, ServiceError> {
    list_where(db, service_request::Column::Status.eq(status)).await
}

pub async fn get_service_request(db: &DatabaseConnection, id: i32) -> Result<service_request::Model, ServiceError> {
    crud::find_or_not_found::<service_request::Entity, _>(db, id, "service request").await
}

pub async fn create_service_request(db: &DatabaseConnection, input: &CreateServiceRequest) -> Result<service_request::Model, ServiceError> {
    let reservation_id = validation::id_ref("reservation_id", input.reservation_id)?;
    let guest_id = validation::id_ref("guest_id", input.guest_id)?;
    let service_type = validation::required("service_type", &input.service_type)?;
    let description = validation::required("description", &input.description)?;
    crud::ensure_stay(db, reservation_id, guest_id).await?;

    let ts = now();
    let created = service_request::ActiveModel {
        reservation_id: Set(reservation_id),
        guest_id: Set(guest_id),
        service_type: Set(service_type),
        status: Set(status::request::PENDING.to_string()),
        priority: Set(validation::or_default(input.priority.as_deref(), service_request::DEFAULT_PRIORITY)),
        description: Set(description),
        notes: Set(input.notes.clone().unwrap_or_default()),
        assigned_to: Set(input.assigned_to.clone().unwrap_or_default()),
        requested_at: Set(ts),
        completed_at: Set(None),
        created_at: Set(ts),
        updated_at: Set(ts),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!(service_request_id = created.id, service_type = %created.service_type, "service request created");
    Ok(created)
}

/// Partial update. Reaching `completed` stamps `completed_at` the first time only.
pub async fn update_service_request(db: &DatabaseConnection, id: i32, input: &UpdateServiceRequest) -> Result<service_request::Model, ServiceError> {
    let current = get_service_request(db, id).await?;
    let completed_at = current.completed_at;
    let mut am: service_request::ActiveModel = current.into();

    if let Some(s) = patch_text("status", input.status.as_deref())? {
        let ts = now();
        am.completed_at = Set(status::stamp_on(&s, status::request::COMPLETED, completed_at, ts));
        am.status = Set(s);
    }
    if let Some(v) = patch_text("priority", input.priority.as_deref())? { am.priority = Set(v); }
    if let Some(v) = patch_text("description", input.description.as_deref())? { am.description = Set(v); }
    if let Some(v) = input.assigned_to.as_deref() { am.assigned_to = Set(v.trim().to_string()); }
    if let Some(v) = input.notes.as_deref() { am.notes = Set(v.to_string()); }
    am.updated_at = Set(now());

    let updated = am.update(db).await?;
    info!(service_request_id = id, status = %updated.status, "service request updated");
    Ok(updated)
}

pub async fn delete_service_request(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    crud::delete_or_not_found::<service_request::Entity, _>(db, id, "service request").await?;
    info!(service_request_id = id, "service request deleted");
    Ok(())
}

/// Request joined with its guest and the room of its reservation.
pub async fn get_service_request_detail(db: &DatabaseConnection, id: i32) -> Result<ServiceRequestDetailResponse, ServiceError> {
    let r = get_service_request(db, id).await?;
    let g = guest::Entity::find_by_id(r.guest_id).one(db).await?;
    let rm = match models::reservation::Entity::find_by_id(r.reservation_id).one(db).await? {
        Some(res) => room::Entity::find_by_id(res.room_id).one(db).await?,
        None => None,
    };
    Ok(ServiceRequestDetailResponse {
        id: r.id,
        reservation_id: r.reservation_id,
        guest: g.map(Into::into),
        room: rm.map(Into::into),
        service_type: r.service_type,
        status: r.status,
        priority: r.priority,
        description: r.description,
        notes: r.notes,
        assigned_to: r.assigned_to,
        requested_at: r.requested_at,
        completed_at: r.completed_at,
        created_at: r.created_at,
        updated_at: r.updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_stay};

    fn request(reservation_id: i32, guest_id: i32) -> CreateServiceRequest {
        CreateServiceRequest {
            reservation_id,
            guest_id,
            service_type: "concierge".into(),
            description: "Book a taxi".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn completion_is_stamped_once() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (g, _, res) = seed_stay(&db).await?;
        let sr = create_service_request(&db, &request(res.id, g.id)).await?;
        assert_eq!(sr.status, "pending");
        assert_eq!(sr.priority, "medium");
        assert!(sr.completed_at.is_none());

        let done = UpdateServiceRequest { status: Some("completed".into()), ..Default::default() };
        let first = update_service_request(&db, sr.id, &done).await?;
        let stamp = first.completed_at.expect("stamped");

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = update_service_request(&db, sr.id, &done).await?;
        assert_eq!(second.completed_at, Some(stamp));

        let reopened = update_service_request(&db, sr.id, &UpdateServiceRequest { status: Some("in-progress".into()), ..Default::default() }).await?;
        assert_eq!(reopened.completed_at, Some(stamp));
        Ok(())
    }

    #[tokio::test]
    async fn dangling_references_rejected() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (g, _, res) = seed_stay(&db).await?;
        assert!(create_service_request(&db, &request(999, g.id)).await.unwrap_err().is_validation());
        assert!(create_service_request(&db, &request(res.id, 999)).await.unwrap_err().is_validation());
        let mut blank = request(res.id, g.id);
        blank.description = String::new();
        assert!(create_service_request(&db, &blank).await.unwrap_err().is_validation());
        Ok(())
    }

    #[tokio::test]
    async fn lookups_and_detail() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (g, r, res) = seed_stay(&db).await?;
        let sr = create_service_request(&db, &request(res.id, g.id)).await?;
        create_service_request(&db, &request(res.id, g.id)).await?;
        update_service_request(&db, sr.id, &UpdateServiceRequest { status: Some("in-progress".into()), ..Default::default() }).await?;

        assert_eq!(list_by_reservation(&db, res.id).await?.len(), 2);
        assert_eq!(list_by_guest(&db, g.id).await?.len(), 2);
        assert_eq!(list_by_status(&db, "in-progress").await?.len(), 1);
        assert_eq!(list_service_requests(&db, Some("pending"), Pagination::default()).await?.total, 1);

        let d = get_service_request_detail(&db, sr.id).await?;
        assert_eq!(d.room.map(|x| x.room_number), Some(r.room_number));

        delete_service_request(&db, sr.id).await?;
        assert!(matches!(delete_service_request(&db, sr.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
