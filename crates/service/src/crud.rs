//! Generic helpers shared by the per-entity services.

use chrono::Utc;
use sea_orm::{
    prelude::DateTimeWithTimeZone, ConnectionTrait, EntityTrait, PaginatorTrait, PrimaryKeyTrait, Select,
};

use models::{guest, reservation};

use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};

/// Current UTC time as stored in every timestamp column.
pub fn now() -> DateTimeWithTimeZone {
    Utc::now().into()
}

pub async fn find_or_not_found<E, C>(db: &C, id: i32, entity: &str) -> Result<E::Model, ServiceError>
where
    E: EntityTrait,
    C: ConnectionTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    E::find_by_id(id).one(db).await?.ok_or_else(|| ServiceError::not_found(entity))
}

/// Run `select` one page at a time; the caller fixes the ordering.
pub async fn paginate<E, C>(db: &C, select: Select<E>, opts: Pagination) -> Result<Page<E::Model>, ServiceError>
where
    E: EntityTrait,
    E::Model: Sync,
    C: ConnectionTrait,
{
    let (page_idx, page_size) = opts.normalize();
    let paginator = select.paginate(db, page_size);
    let total = paginator.num_items().await?;
    let items = paginator.fetch_page(page_idx).await?;
    Ok(Page::new(items, page_idx + 1, page_size, total))
}

pub async fn delete_or_not_found<E, C>(db: &C, id: i32, entity: &str) -> Result<(), ServiceError>
where
    E: EntityTrait,
    C: ConnectionTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    let res = E::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(entity));
    }
    Ok(())
}

/// Rows of the service-request family must point at a live reservation and
/// guest. Returns the reservation so callers can reuse its ids.
pub async fn ensure_stay<C>(db: &C, reservation_id: i32, guest_id: i32) -> Result<reservation::Model, ServiceError>
where
    C: ConnectionTrait,
{
    let res = reservation::Entity::find_by_id(reservation_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::Validation(format!("reservation_id: reservation {reservation_id} does not exist")))?;
    ensure_guest(db, guest_id).await?;
    Ok(res)
}

pub async fn ensure_guest<C>(db: &C, guest_id: i32) -> Result<guest::Model, ServiceError>
where
    C: ConnectionTrait,
{
    guest::Entity::find_by_id(guest_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::Validation(format!("guest_id: guest {guest_id} does not exist")))
}

/// Trimmed, non-blank replacement for a text column in a partial update.
pub(crate) fn patch_text(field: &str, value: Option<&str>) -> Result<Option<String>, ServiceError> {
    match value {
        None => Ok(None),
        Some(v) => Ok(Some(models::validation::required(field, v)?)),
    }
}
