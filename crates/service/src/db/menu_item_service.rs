use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use models::{menu_item, validation};

use crate::crud::{self, now, patch_text};
use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CreateMenuItem {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: String,
    /// Defaults to `true`.
    pub available: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateMenuItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub available: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MenuFilter {
    pub category: Option<String>,
    pub available: Option<bool>,
}

pub async fn list_menu_items(db: &DatabaseConnection, filter: &MenuFilter, opts: Pagination) -> Result<Page<menu_item::Model>, ServiceError> {
    let mut q = menu_item::Entity::find()
        .order_by_asc(menu_item::Column::Category)
        .order_by_asc(menu_item::Column::Name)
        .order_by_asc(menu_item::Column::Id);
    if let Some(c) = filter.category.as_deref() {
        q = q.filter(menu_item::Column::Category.eq(c));
    }
    if let Some(a) = filter.available {
        q = q.filter(menu_item::Column::Available.eq(a));
    }
    crud::paginate(db, q, opts).await
}

pub async fn list_by_category(db: &DatabaseConnection, category: &str) -> Result<Vec<menu_item::Model>, ServiceError> {
    Ok(menu_item::Entity::find()
        .filter(menu_item::Column::Category.eq(category))
        .order_by_asc(menu_item::Column::Name)
        .all(db)
        .await?)
}

/// Everything a guest can order right now.
pub async fn list_available(db: &DatabaseConnection) -> Result<Vec<menu_item::Model>, ServiceError> {
    Ok(menu_item::Entity::find()
        .filter(menu_item::Column::Available.eq(true))
        .order_by_asc(menu_item::Column::Category)
        .order_by_asc(menu_item::Column::Name)
        .all(db)
        .await?)
}

pub async fn get_menu_item(db: &DatabaseConnection, id: i32) -> Result<menu_item::Model, ServiceError> {
    crud::find_or_not_found::<menu_item::Entity, _>(db, id, "menu item").await
}

pub async fn create_menu_item(db: &DatabaseConnection, input: &CreateMenuItem) -> Result<menu_item::Model, ServiceError> {
    let name = validation::required("name", &input.name)?;
    let category = validation::required("category", &input.category)?;
    let price = validation::non_negative("price", input.price)?;

    let ts = now();
    let created = menu_item::ActiveModel {
        name: Set(name),
        description: Set(input.description.clone().unwrap_or_default()),
        price: Set(price),
        category: Set(category),
        available: Set(input.available.unwrap_or(true)),
        created_at: Set(ts),
        updated_at: Set(ts),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!(menu_item_id = created.id, name = %created.name, "menu item created");
    Ok(created)
}

pub async fn update_menu_item(db: &DatabaseConnection, id: i32, input: &UpdateMenuItem) -> Result<menu_item::Model, ServiceError> {
    let mut am: menu_item::ActiveModel = get_menu_item(db, id).await?.into();
    if let Some(v) = patch_text("name", input.name.as_deref())? { am.name = Set(v); }
    if let Some(v) = input.description.as_deref() { am.description = Set(v.to_string()); }
    if let Some(p) = input.price { am.price = Set(validation::non_negative("price", p)?); }
    if let Some(v) = patch_text("category", input.category.as_deref())? { am.category = Set(v); }
    if let Some(a) = input.available { am.available = Set(a); }
    am.updated_at = Set(now());
    let updated = am.update(db).await?;
    info!(menu_item_id = id, "menu item updated");
    Ok(updated)
}

pub async fn delete_menu_item(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    crud::delete_or_not_found::<menu_item::Entity, _>(db, id, "menu item").await?;
    info!(menu_item_id = id, "menu item deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_menu_item};

    #[tokio::test]
    async fn filters_by_category_and_availability() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed_menu_item(&db, "Burger", 12.0, true).await?;
        let fries = seed_menu_item(&db, "Fries", 4.0, true).await?;
        seed_menu_item(&db, "Truffle", 40.0, false).await?;
        create_menu_item(&db, &CreateMenuItem { name: "Tea".into(), price: 3.0, category: "drinks".into(), ..Default::default() }).await?;

        assert_eq!(list_by_category(&db, "mains").await?.len(), 3);
        assert_eq!(list_available(&db).await?.len(), 3);
        let f = MenuFilter { category: Some("mains".into()), available: Some(false) };
        assert_eq!(list_menu_items(&db, &f, Pagination::default()).await?.total, 1);

        let off = update_menu_item(&db, fries.id, &UpdateMenuItem { available: Some(false), ..Default::default() }).await?;
        assert!(!off.available);
        assert_eq!(list_available(&db).await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn negative_price_rejected() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let bad = CreateMenuItem { name: "Free lunch".into(), price: -1.0, category: "mains".into(), ..Default::default() };
        assert!(create_menu_item(&db, &bad).await.unwrap_err().is_validation());
        Ok(())
    }
}
