use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use models::{room, status, validation};

use crate::crud::{self, now, patch_text};
use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CreateRoom {
    #[serde(default)]
    pub room_number: String,
    #[serde(default)]
    pub room_type: String,
    #[serde(default)]
    pub floor: i32,
    #[serde(default)]
    pub capacity: i32,
    #[serde(default)]
    pub price_per_night: f64,
    /// Defaults to `available`.
    pub status: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateRoom {
    pub room_number: Option<String>,
    pub room_type: Option<String>,
    pub floor: Option<i32>,
    pub capacity: Option<i32>,
    pub price_per_night: Option<f64>,
    pub status: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoomFilter {
    pub status: Option<String>,
    pub room_type: Option<String>,
}

async fn ensure_number_free(db: &DatabaseConnection, number: &str, except: Option<i32>) -> Result<(), ServiceError> {
    let mut q = room::Entity::find().filter(room::Column::RoomNumber.eq(number));
    if let Some(id) = except {
        q = q.filter(room::Column::Id.ne(id));
    }
    if q.one(db).await?.is_some() {
        return Err(ServiceError::conflict("room", "room_number", number));
    }
    Ok(())
}

pub async fn list_rooms(db: &DatabaseConnection, filter: &RoomFilter, opts: Pagination) -> Result<Page<room::Model>, ServiceError> {
    let mut q = room::Entity::find().order_by_asc(room::Column::RoomNumber);
    if let Some(s) = filter.status.as_deref() {
        q = q.filter(room::Column::Status.eq(s));
    }
    if let Some(t) = filter.room_type.as_deref() {
        q = q.filter(room::Column::RoomType.eq(t));
    }
    crud::paginate(db, q, opts).await
}

/// Rooms currently marked available. Date ranges are not consulted.
pub async fn list_available_rooms(db: &DatabaseConnection, room_type: Option<&str>) -> Result<Vec<room::Model>, ServiceError> {
    let mut q = room::Entity::find()
        .filter(room::Column::Status.eq(status::room::AVAILABLE))
        .order_by_asc(room::Column::RoomNumber);
    if let Some(t) = room_type {
        q = q.filter(room::Column::RoomType.eq(t));
    }
    Ok(q.all(db).await?)
}

pub async fn get_room(db: &DatabaseConnection, id: i32) -> Result<room::Model, ServiceError> {
    crud::find_or_not_found::<room::Entity, _>(db, id, "room").await
}

pub async fn create_room(db: &DatabaseConnection, input: &CreateRoom) -> Result<room::Model, ServiceError> {
    let number = room::validate_room_number(&input.room_number)?;
    let room_type = validation::required("room_type", &input.room_type)?;
    let capacity = room::validate_capacity(input.capacity)?;
    let price = room::validate_price(input.price_per_night)?;
    let status = validation::or_default(input.status.as_deref(), status::room::AVAILABLE);
    ensure_number_free(db, &number, None).await?;

    let ts = now();
    let created = room::ActiveModel {
        room_number: Set(number),
        room_type: Set(room_type),
        floor: Set(input.floor),
        capacity: Set(capacity),
        price_per_night: Set(price),
        status: Set(status),
        created_at: Set(ts),
        updated_at: Set(ts),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!(room_id = created.id, room_number = %created.room_number, "room created");
    Ok(created)
}

pub async fn update_room(db: &DatabaseConnection, id: i32, input: &UpdateRoom) -> Result<room::Model, ServiceError> {
    let mut am: room::ActiveModel = get_room(db, id).await?.into();
    if let Some(n) = input.room_number.as_deref() {
        let n = room::validate_room_number(n)?;
        ensure_number_free(db, &n, Some(id)).await?;
        am.room_number = Set(n);
    }
    if let Some(v) = patch_text("room_type", input.room_type.as_deref())? { am.room_type = Set(v); }
    if let Some(f) = input.floor { am.floor = Set(f); }
    if let Some(c) = input.capacity { am.capacity = Set(room::validate_capacity(c)?); }
    if let Some(p) = input.price_per_night { am.price_per_night = Set(room::validate_price(p)?); }
    if let Some(v) = patch_text("status", input.status.as_deref())? { am.status = Set(v); }
    am.updated_at = Set(now());

    let updated = am.update(db).await?;
    info!(room_id = id, "room updated");
    Ok(updated)
}

pub async fn update_room_status(db: &DatabaseConnection, id: i32, new_status: &str) -> Result<room::Model, ServiceError> {
    let new_status = validation::required("status", new_status)?;
    let mut am: room::ActiveModel = get_room(db, id).await?.into();
    am.status = Set(new_status.clone());
    am.updated_at = Set(now());
    let updated = am.update(db).await?;
    info!(room_id = id, status = %new_status, "room status changed");
    Ok(updated)
}

pub async fn delete_room(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    crud::delete_or_not_found::<room::Entity, _>(db, id, "room").await?;
    info!(room_id = id, "room deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_room};

    #[tokio::test]
    async fn create_defaults_to_available_and_rejects_duplicates() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let r = seed_room(&db, "101", "Standard").await?;
        assert_eq!(r.status, status::room::AVAILABLE);

        let dup = CreateRoom { room_number: "101".into(), room_type: "Suite".into(), capacity: 2, ..Default::default() };
        assert!(matches!(create_room(&db, &dup).await, Err(ServiceError::Conflict(_))));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_rooms_rejected() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let bad = CreateRoom { room_number: "102".into(), room_type: "Suite".into(), capacity: 0, ..Default::default() };
        assert!(create_room(&db, &bad).await.unwrap_err().is_validation());
        let bad = CreateRoom { room_number: "102".into(), room_type: "Suite".into(), capacity: 1, price_per_night: -5.0, ..Default::default() };
        assert!(create_room(&db, &bad).await.unwrap_err().is_validation());
        Ok(())
    }

    #[tokio::test]
    async fn filters_and_available_listing() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = seed_room(&db, "101", "Standard").await?;
        seed_room(&db, "102", "Suite").await?;
        seed_room(&db, "103", "Suite").await?;
        update_room_status(&db, a.id, status::room::MAINTENANCE).await?;

        let suites = list_rooms(&db, &RoomFilter { room_type: Some("Suite".into()), ..Default::default() }, Pagination::default()).await?;
        assert_eq!(suites.total, 2);
        let maint = list_rooms(&db, &RoomFilter { status: Some("maintenance".into()), ..Default::default() }, Pagination::default()).await?;
        assert_eq!(maint.items[0].room_number, "101");

        assert_eq!(list_available_rooms(&db, None).await?.len(), 2);
        assert_eq!(list_available_rooms(&db, Some("Standard")).await?.len(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn missing_room_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(matches!(delete_room(&db, 999).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(update_room_status(&db, 999, "cleaning").await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn page_far_past_the_end_is_empty() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed_room(&db, "101", "Standard").await?;
        let page = list_rooms(&db, &RoomFilter::default(), Pagination::new(Some(u64::MAX), Some(10))).await?;
        assert!(page.items.is_empty());
        assert_eq!(page.total, 1);
        assert_eq!(page.page, crate::pagination::MAX_PAGE);
        Ok(())
    }
}
