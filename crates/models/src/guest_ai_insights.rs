use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::guest;

pub const RISK_LOW: &str = "low";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "guest_ai_insights")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guest_id: i32,
    pub meal_preference: String,
    pub room_preference: String,
    pub service_pattern: String,
    pub risk_score: String,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub recommendations: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub complaints: Option<Json>,
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
