use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{guest, reservation};

/// Flat fee added to every room-service order.
pub const DELIVERY_FEE: f64 = 5.0;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "room_service_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub order_id: String,
    pub reservation_id: i32,
    pub guest_id: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub items: Json,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub status: String,
    #[sea_orm(column_type = "Text")]
    pub special_notes: String,
    pub ordered_at: DateTimeWithTimeZone,
    pub delivered_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Reservation, Guest }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Reservation => Entity::belongs_to(reservation::Entity).from(Column::ReservationId).to(reservation::Column::Id).into(),
            Relation::Guest => Entity::belongs_to(guest::Entity).from(Column::GuestId).to(guest::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// One priced line of an order, captured from the menu at order time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
}

pub fn compute_totals(lines: &[OrderLine]) -> OrderTotals {
    let subtotal: f64 = lines.iter().map(|l| l.price * f64::from(l.quantity)).sum();
    OrderTotals { subtotal, delivery_fee: DELIVERY_FEE, total: subtotal + DELIVERY_FEE }
}

pub fn encode_lines(lines: &[OrderLine]) -> Result<Json, ModelError> {
    serde_json::to_value(lines).map_err(|e| ModelError::Validation(format!("items: {e}")))
}

/// Lines stored on an order; malformed rows decode as an empty list.
pub fn decode_lines(items: &Json) -> Vec<OrderLine> {
    serde_json::from_value(items.clone()).unwrap_or_default()
}

pub fn generate_order_id() -> String {
    reservation::short_ref("RSO")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: i32, price: f64, quantity: i32) -> OrderLine {
        OrderLine { id, name: format!("item-{id}"), price, quantity }
    }

    #[test]
    fn totals_add_up() {
        let lines = vec![line(1, 12.5, 2), line(2, 4.0, 3)];
        let t = compute_totals(&lines);
        assert_eq!(t.subtotal, 37.0);
        assert_eq!(t.delivery_fee, DELIVERY_FEE);
        assert_eq!(t.total, t.subtotal + t.delivery_fee);
    }

    #[test]
    fn lines_survive_storage() {
        let lines = vec![line(7, 9.99, 1)];
        let json = encode_lines(&lines).unwrap();
        assert_eq!(decode_lines(&json), lines);
        assert!(decode_lines(&serde_json::json!({"bogus": true})).is_empty());
    }

    #[test]
    fn order_ids_prefixed() {
        assert!(generate_order_id().starts_with("RSO-"));
    }
}
