use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use models::{staff, status, validation};

use crate::crud::{self, now, patch_text};
use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CreateStaff {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: String,
    /// Defaults to `active`.
    pub status: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateStaff {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StaffFilter {
    pub role: Option<String>,
    pub status: Option<String>,
}

async fn ensure_email_free(db: &DatabaseConnection, email: &str, except: Option<i32>) -> Result<(), ServiceError> {
    let mut q = staff::Entity::find().filter(staff::Column::Email.eq(email));
    if let Some(id) = except {
        q = q.filter(staff::Column::Id.ne(id));
    }
    if q.one(db).await?.is_some() {
        return Err(ServiceError::conflict("staff member", "email", email));
    }
    Ok(())
}

pub async fn list_staff(db: &DatabaseConnection, filter: &StaffFilter, opts: Pagination) -> Result<Page<staff::Model>, ServiceError> {
    let mut q = staff::Entity::find().order_by_asc(staff::Column::Name).order_by_asc(staff::Column::Id);
    if let Some(r) = filter.role.as_deref() {
        q = q.filter(staff::Column::Role.eq(r));
    }
    if let Some(s) = filter.status.as_deref() {
        q = q.filter(staff::Column::Status.eq(s));
    }
    crud::paginate(db, q, opts).await
}

pub async fn list_by_role(db: &DatabaseConnection, role: &str) -> Result<Vec<staff::Model>, ServiceError> {
    Ok(staff::Entity::find()
        .filter(staff::Column::Role.eq(role))
        .order_by_asc(staff::Column::Name)
        .all(db)
        .await?)
}

pub async fn get_staff(db: &DatabaseConnection, id: i32) -> Result<staff::Model, ServiceError> {
    crud::find_or_not_found::<staff::Entity, _>(db, id, "staff member").await
}

pub async fn create_staff(db: &DatabaseConnection, input: &CreateStaff) -> Result<staff::Model, ServiceError> {
    let name = validation::required("name", &input.name)?;
    let email = validation::validate_email("email", &input.email)?;
    let phone = validation::required("phone", &input.phone)?;
    let role = validation::required("role", &input.role)?;
    ensure_email_free(db, &email, None).await?;

    let ts = now();
    let created = staff::ActiveModel {
        name: Set(name),
        email: Set(email),
        phone: Set(phone),
        role: Set(role),
        status: Set(validation::or_default(input.status.as_deref(), status::staff::ACTIVE)),
        created_at: Set(ts),
        updated_at: Set(ts),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!(staff_id = created.id, role = %created.role, "staff member created");
    Ok(created)
}

pub async fn update_staff(db: &DatabaseConnection, id: i32, input: &UpdateStaff) -> Result<staff::Model, ServiceError> {
    let mut am: staff::ActiveModel = get_staff(db, id).await?.into();
    if let Some(email) = input.email.as_deref() {
        let email = validation::validate_email("email", email)?;
        ensure_email_free(db, &email, Some(id)).await?;
        am.email = Set(email);
    }
    if let Some(v) = patch_text("name", input.name.as_deref())? { am.name = Set(v); }
    if let Some(v) = patch_text("phone", input.phone.as_deref())? { am.phone = Set(v); }
    if let Some(v) = patch_text("role", input.role.as_deref())? { am.role = Set(v); }
    if let Some(v) = patch_text("status", input.status.as_deref())? { am.status = Set(v); }
    am.updated_at = Set(now());
    let updated = am.update(db).await?;
    info!(staff_id = id, "staff member updated");
    Ok(updated)
}

pub async fn delete_staff(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    crud::delete_or_not_found::<staff::Entity, _>(db, id, "staff member").await?;
    info!(staff_id = id, "staff member deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn member(email: &str, role: &str) -> CreateStaff {
        CreateStaff { name: "Sam".into(), email: email.into(), phone: "+1 555".into(), role: role.into(), status: None }
    }

    #[tokio::test]
    async fn unique_email_and_role_lookup() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let s = create_staff(&db, &member("sam@hotel.test", "housekeeping")).await?;
        assert_eq!(s.status, "active");
        assert!(matches!(create_staff(&db, &member("sam@hotel.test", "concierge")).await, Err(ServiceError::Conflict(_))));
        create_staff(&db, &member("kim@hotel.test", "concierge")).await?;

        assert_eq!(list_by_role(&db, "housekeeping").await?.len(), 1);
        update_staff(&db, s.id, &UpdateStaff { status: Some("inactive".into()), ..Default::default() }).await?;
        let active = StaffFilter { status: Some("active".into()), ..Default::default() };
        assert_eq!(list_staff(&db, &active, Pagination::default()).await?.total, 1);

        delete_staff(&db, s.id).await?;
        assert!(matches!(get_staff(&db, s.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn email_must_be_valid() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(create_staff(&db, &member("nope", "concierge")).await.unwrap_err().is_validation());
        Ok(())
    }
}
