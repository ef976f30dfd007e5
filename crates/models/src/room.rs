use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub room_number: String,
    pub room_type: String,
    pub floor: i32,
    pub capacity: i32,
    pub price_per_night: f64,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_room_number(n: &str) -> Result<String, ModelError> {
    validation::required("room_number", n)
}

pub fn validate_capacity(c: i32) -> Result<i32, ModelError> {
    validation::positive("capacity", c)
}

pub fn validate_price(p: f64) -> Result<f64, ModelError> {
    validation::non_negative("price_per_night", p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_field_rules() {
        assert_eq!(validate_room_number(" 101 ").unwrap(), "101");
        assert!(validate_room_number("").is_err());
        assert!(validate_capacity(0).is_err());
        assert!(validate_price(-1.0).is_err());
        assert_eq!(validate_price(129.5).unwrap(), 129.5);
    }
}
