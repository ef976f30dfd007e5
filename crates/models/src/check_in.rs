use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{guest, reservation, room};

/// Arrival time shown when a reservation has no check-in record yet.
pub const DEFAULT_CHECK_IN_TIME: &str = "15:00";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "check_in")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub reservation_id: i32,
    pub guest_id: i32,
    pub room_id: i32,
    pub check_in_time: DateTimeWithTimeZone,
    pub id_verified: bool,
    pub key_issued: bool,
    pub documents_signed: bool,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Reservation, Guest, Room }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Reservation => Entity::belongs_to(reservation::Entity).from(Column::ReservationId).to(reservation::Column::Id).into(),
            Relation::Guest => Entity::belongs_to(guest::Entity).from(Column::GuestId).to(guest::Column::Id).into(),
            Relation::Room => Entity::belongs_to(room::Entity).from(Column::RoomId).to(room::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
