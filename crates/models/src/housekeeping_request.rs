use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{guest, reservation};

pub const DEFAULT_SCHEDULE: &str = "immediate";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "housekeeping_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub reservation_id: i32,
    pub guest_id: i32,
    pub request_type: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub schedule_time: String,
    pub status: String,
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

impl ActiveModelBehavior for ActiveModel {}
