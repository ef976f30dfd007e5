use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use models::room_service_order::{self, OrderLine};
use models::{menu_item, status, validation};

use crate::crud::{self, now, patch_text};
use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct OrderItemInput {
    pub menu_item_id: i32,
    pub quantity: i32,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CreateRoomServiceOrder {
    #[serde(default)]
    pub reservation_id: i32,
    #[serde(default)]
    pub guest_id: i32,
    #[serde(default)]
    pub items: Vec<OrderItemInput>,
    pub special_notes: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateRoomServiceOrder {
    pub status: Option<String>,
    pub special_notes: Option<String>,
}

/// Price each requested item from the current menu.
async fn price_lines(db: &DatabaseConnection, items: &[OrderItemInput]) -> Result<Vec<OrderLine>, ServiceError> {
    if items.is_empty() {
        return Err(ServiceError::Validation("items: at least one item is required".into()));
    }
    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        let quantity = validation::positive("quantity", item.quantity)?;
        let menu = menu_item::Entity::find_by_id(item.menu_item_id).one(db).await?.ok_or_else(|| {
            ServiceError::Validation(format!("items: menu item {} does not exist", item.menu_item_id))
        })?;
        if !menu.available {
            return Err(ServiceError::Validation(format!("items: {} is not available", menu.name)));
        }
        lines.push(OrderLine { id: menu.id, name: menu.name, price: menu.price, quantity });
    }
    Ok(lines)
}

pub async fn list_orders(db: &DatabaseConnection, status_filter: Option<&str>, opts: Pagination) -> Result<Page<room_service_order::Model>, ServiceError> {
    let mut q = room_service_order::Entity::find()
        .order_by_desc(room_service_order::Column::OrderedAt)
        .order_by_desc(room_service_order::Column::Id);
    if let Some(s) = status_filter {
        q = q.filter(room_service_order::Column::Status.eq(s));
    }
    crud::paginate(db, q, opts).await
}

pub async fn list_by_reservation(db: &DatabaseConnection, reservation_id: i32) -> Result<Vec<room_service_order::Model>, ServiceError> {
    Ok(room_service_order::Entity::find()
        .filter(room_service_order::Column::ReservationId.eq(reservation_id))
        .order_by_desc(room_service_order::Column::OrderedAt)
        .all(db)
        .await?)
}

pub async fn get_order(db: &DatabaseConnection, id: i32) -> Result<room_service_order::Model, ServiceError> {
    crud::find_or_not_found::<room_service_order::Entity, _>(db, id, "room service order").await
}

/// Place an order. Lines are priced from the menu at order time and a flat
/// delivery fee is added.
pub async fn create_order(db: &DatabaseConnection, input: &CreateRoomServiceOrder) -> Result<room_service_order::Model, ServiceError> {
    let reservation_id = validation::id_ref("reservation_id", input.reservation_id)?;
    let guest_id = validation::id_ref("guest_id", input.guest_id)?;
    let lines = price_lines(db, &input.items).await?;
    crud::ensure_stay(db, reservation_id, guest_id).await?;

    let totals = room_service_order::compute_totals(&lines);
    let ts = now();
    let created = room_service_order::ActiveModel {
        order_id: Set(room_service_order::generate_order_id()),
        reservation_id: Set(reservation_id),
        guest_id: Set(guest_id),
        items: Set(room_service_order::encode_lines(&lines)?),
        subtotal: Set(totals.subtotal),
        delivery_fee: Set(totals.delivery_fee),
        total: Set(totals.total),
        status: Set(status::order::PENDING.to_string()),
        special_notes: Set(input.special_notes.clone().unwrap_or_default()),
        ordered_at: Set(ts),
        delivered_at: Set(None),
        created_at: Set(ts),
        updated_at: Set(ts),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!(order_id = %created.order_id, total = created.total, "room service order placed");
    Ok(created)
}

pub async fn update_order(db: &DatabaseConnection, id: i32, input: &UpdateRoomServiceOrder) -> Result<room_service_order::Model, ServiceError> {
    let current = get_order(db, id).await?;
    let delivered_at = current.delivered_at;
    let mut am: room_service_order::ActiveModel = current.into();
    if let Some(s) = patch_text("status", input.status.as_deref())? {
        am.delivered_at = Set(status::stamp_on(&s, status::order::DELIVERED, delivered_at, now()));
        am.status = Set(s);
    }
    if let Some(n) = input.special_notes.as_deref() {
        am.special_notes = Set(n.to_string());
    }
    am.updated_at = Set(now());
    let updated = am.update(db).await?;
    info!(order_id = %updated.order_id, status = %updated.status, "room service order updated");
    Ok(updated)
}

pub async fn update_order_status(db: &DatabaseConnection, id: i32, new_status: &str) -> Result<room_service_order::Model, ServiceError> {
    let input = UpdateRoomServiceOrder { status: Some(validation::required("status", new_status)?), special_notes: None };
    update_order(db, id, &input).await
}

pub async fn delete_order(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    crud::delete_or_not_found::<room_service_order::Entity, _>(db, id, "room service order").await?;
    info!(id, "room service order deleted");
    Ok(())
}
