use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::guest;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "guest_preferences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guest_id: i32,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub room_floors: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub meal_types: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub room_types: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub special_requests: Option<Json>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Guest }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Guest => Entity::belongs_to(guest::Entity)
                .from(Column::GuestId)
                .to(guest::Column::Id)
                .into(),
        }
    }
}

impl Related<guest::Entity> for Entity {
    fn to() -> RelationDef { Relation::Guest.def() }
}

impl ActiveModelBehavior for ActiveModel {}
