use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use models::{maintenance_issue, service_request, status, validation};

use crate::crud::{self, now, patch_text};
use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CreateMaintenanceIssue {
    #[serde(default)]
    pub reservation_id: i32,
    #[serde(default)]
    pub guest_id: i32,
    #[serde(default)]
    pub issue_type: String,
    #[serde(default)]
    pub description: String,
    /// Defaults to `medium`.
    pub priority: Option<String>,
    pub assigned_to: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateMaintenanceIssue {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assigned_to: Option<String>,
    pub notes: Option<String>,
}

pub async fn list_issues(db: &DatabaseConnection, status_filter: Option<&str>, opts: Pagination) -> Result<Page<maintenance_issue::Model>, ServiceError> {
    let mut q = maintenance_issue::Entity::find()
        .order_by_desc(maintenance_issue::Column::ReportedAt)
        .order_by_desc(maintenance_issue::Column::Id);
    if let Some(s) = status_filter {
        q = q.filter(maintenance_issue::Column::Status.eq(s));
    }
    crud::paginate(db, q, opts).await
}

pub async fn list_by_reservation(db: &DatabaseConnection, reservation_id: i32) -> Result<Vec<maintenance_issue::Model>, ServiceError> {
    Ok(maintenance_issue::Entity::find()
        .filter(maintenance_issue::Column::ReservationId.eq(reservation_id))
        .order_by_desc(maintenance_issue::Column::ReportedAt)
        .all(db)
        .await?)
}

pub async fn list_by_status(db: &DatabaseConnection, status: &str) -> Result<Vec<maintenance_issue::Model>, ServiceError> {
    Ok(maintenance_issue::Entity::find()
        .filter(maintenance_issue::Column::Status.eq(status))
        .order_by_desc(maintenance_issue::Column::ReportedAt)
        .all(db)
        .await?)
}

pub async fn get_issue(db: &DatabaseConnection, id: i32) -> Result<maintenance_issue::Model, ServiceError> {
    crud::find_or_not_found::<maintenance_issue::Entity, _>(db, id, "maintenance issue").await
}

pub async fn create_issue(db: &DatabaseConnection, input: &CreateMaintenanceIssue) -> Result<maintenance_issue::Model, ServiceError> {
    let reservation_id = validation::id_ref("reservation_id", input.reservation_id)?;
    let guest_id = validation::id_ref("guest_id", input.guest_id)?;
    let issue_type = validation::required("issue_type", &input.issue_type)?;
    let description = validation::required("description", &input.description)?;
    crud::ensure_stay(db, reservation_id, guest_id).await?;

    let ts = now();
    let created = maintenance_issue::ActiveModel {
        reservation_id: Set(reservation_id),
        guest_id: Set(guest_id),
        issue_type: Set(issue_type),
        description: Set(description),
        status: Set(status::maintenance::REPORTED.to_string()),
        priority: Set(validation::or_default(input.priority.as_deref(), service_request::DEFAULT_PRIORITY)),
        assigned_to: Set(input.assigned_to.clone().unwrap_or_default()),
        notes: Set(input.notes.clone().unwrap_or_default()),
        reported_at: Set(ts),
        resolved_at: Set(None),
        created_at: Set(ts),
        updated_at: Set(ts),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!(issue_id = created.id, issue_type = %created.issue_type, "maintenance issue reported");
    Ok(created)
}

/// Partial update. Reaching `resolved` stamps `resolved_at` the first time only.
pub async fn update_issue(db: &DatabaseConnection, id: i32, input: &UpdateMaintenanceIssue) -> Result<maintenance_issue::Model, ServiceError> {
    let current = get_issue(db, id).await?;
    let resolved_at = current.resolved_at;
    let mut am: maintenance_issue::ActiveModel = current.into();
    if let Some(s) = patch_text("status", input.status.as_deref())? {
        am.resolved_at = Set(status::stamp_on(&s, status::maintenance::RESOLVED, resolved_at, now()));
        am.status = Set(s);
    }
    if let Some(v) = patch_text("priority", input.priority.as_deref())? { am.priority = Set(v); }
    if let Some(v) = input.assigned_to.as_deref() { am.assigned_to = Set(v.trim().to_string()); }
    if let Some(v) = input.notes.as_deref() { am.notes = Set(v.to_string()); }
    am.updated_at = Set(now());

    let updated = am.update(db).await?;
    info!(issue_id = id, status = %updated.status, "maintenance issue updated");
    Ok(updated)
}

pub async fn delete_issue(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    crud::delete_or_not_found::<maintenance_issue::Entity, _>(db, id, "maintenance issue").await?;
    info!(issue_id = id, "maintenance issue deleted");
    Ok(())
}
