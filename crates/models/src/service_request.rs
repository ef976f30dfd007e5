use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{guest, reservation};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub reservation_id: i32,
    pub guest_id: i32,
    pub service_type: String,
    pub status: String,
    pub priority: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub assigned_to: String,
    pub requested_at: DateTimeWithTimeZone,
    pub completed_at: Option<DateTimeWithTimeZone>,
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

impl Related<reservation::Entity> for Entity {
    fn to() -> RelationDef { Relation::Reservation.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub const DEFAULT_PRIORITY: &str = "medium";

/// Display label for a service type slug: `room-service` -> `Room Service`.
pub fn service_label(service_type: &str) -> String {
    service_type
        .split(&['-', '_', ' '][..])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::service_label;

    #[test]
    fn labels_from_slugs() {
        assert_eq!(service_label("room-service"), "Room Service");
        assert_eq!(service_label("general-assistance"), "General Assistance");
        assert_eq!(service_label("housekeeping"), "Housekeeping");
        assert_eq!(service_label(""), "");
    }
}
