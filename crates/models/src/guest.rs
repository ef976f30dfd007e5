use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "guest")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    pub nationality: String,
    pub id_type: String,
    pub id_number: String,
    pub join_date: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Validated contact fields for a new or replaced guest record.
#[derive(Clone, Debug, PartialEq)]
pub struct GuestFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub nationality: String,
    pub id_type: String,
    pub id_number: String,
}

impl GuestFields {
    pub fn validate(
        name: &str,
        email: &str,
        phone: &str,
        nationality: &str,
        id_type: &str,
        id_number: &str,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            name: validation::required("name", name)?,
            email: validation::validate_email("email", email)?,
            phone: validation::required("phone", phone)?,
            nationality: validation::required("nationality", nationality)?,
            id_type: validation::required("id_type", id_type)?,
            id_number: validation::required("id_number", id_number)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_contact_fields_required() {
        let ok = GuestFields::validate("Ada", "ada@example.com", "+1 555", "UK", "passport", "X1").unwrap();
        assert_eq!(ok.email, "ada@example.com");

        let err = GuestFields::validate("Ada", "ada@example.com", "", "UK", "passport", "X1").unwrap_err();
        assert!(err.to_string().contains("phone"));

        let err = GuestFields::validate("Ada", "not-an-email", "+1", "UK", "passport", "X1").unwrap_err();
        assert!(err.to_string().contains("email"));
    }
}
