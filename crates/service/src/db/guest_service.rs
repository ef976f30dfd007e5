use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use models::guest::GuestFields;
use models::{
    guest, guest_ai_insights, guest_preferences, housekeeping_request, maintenance_issue, reservation, room,
    room_service_order, service_request, validation,
};

use crate::crud::{self, now, patch_text};
use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};
use crate::views::{
    GuestAiInsightsResponse, GuestDetailResponse, GuestHistoryResponse, GuestPreferencesResponse,
    GuestStatisticsResponse, ReservationResponse, StayResponse,
};

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CreateGuest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub id_type: String,
    #[serde(default)]
    pub id_number: String,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateGuest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub nationality: Option<String>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
}

async fn ensure_email_free(db: &DatabaseConnection, email: &str, except: Option<i32>) -> Result<(), ServiceError> {
    let mut q = guest::Entity::find().filter(guest::Column::Email.eq(email));
    if let Some(id) = except {
        q = q.filter(guest::Column::Id.ne(id));
    }
    if q.one(db).await?.is_some() {
        return Err(ServiceError::conflict("guest", "email", email));
    }
    Ok(())
}

/// Paginated guests, optionally narrowed by a substring of name or email.
pub async fn list_guests(db: &DatabaseConnection, search: Option<&str>, opts: Pagination) -> Result<Page<guest::Model>, ServiceError> {
    let mut q = guest::Entity::find().order_by_asc(guest::Column::Id);
    if let Some(term) = search.map(str::trim).filter(|s| !s.is_empty()) {
        q = q.filter(
            Condition::any()
                .add(guest::Column::Name.contains(term))
                .add(guest::Column::Email.contains(term)),
        );
    }
    crud::paginate(db, q, opts).await
}

pub async fn get_guest(db: &DatabaseConnection, id: i32) -> Result<guest::Model, ServiceError> {
    crud::find_or_not_found::<guest::Entity, _>(db, id, "guest").await
}

/// Create a guest together with empty preference and insight rows.
pub async fn create_guest(db: &DatabaseConnection, input: &CreateGuest) -> Result<guest::Model, ServiceError> {
    let f = GuestFields::validate(
        &input.name,
        &input.email,
        &input.phone,
        &input.nationality,
        &input.id_type,
        &input.id_number,
    )?;
    ensure_email_free(db, &f.email, None).await?;

    let ts = now();
    let txn = db.begin().await?;
    let created = guest::ActiveModel {
        name: Set(f.name),
        email: Set(f.email),
        phone: Set(f.phone),
        nationality: Set(f.nationality),
        id_type: Set(f.id_type),
        id_number: Set(f.id_number),
        join_date: Set(ts),
        created_at: Set(ts),
        updated_at: Set(ts),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    guest_preferences::ActiveModel {
        guest_id: Set(created.id),
        room_floors: Set(None),
        meal_types: Set(None),
        room_types: Set(None),
        special_requests: Set(None),
        created_at: Set(ts),
        updated_at: Set(ts),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    guest_ai_insights::ActiveModel {
        guest_id: Set(created.id),
        meal_preference: Set(String::new()),
        room_preference: Set(String::new()),
        service_pattern: Set(String::new()),
        risk_score: Set(guest_ai_insights::RISK_LOW.to_string()),
        recommendations: Set(None),
        complaints: Set(None),
        created_at: Set(ts),
        updated_at: Set(ts),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    info!(guest_id = created.id, "guest created");
    Ok(created)
}

pub async fn update_guest(db: &DatabaseConnection, id: i32, input: &UpdateGuest) -> Result<guest::Model, ServiceError> {
    let current = get_guest(db, id).await?;
    let mut am: guest::ActiveModel = current.into();

    if let Some(email) = input.email.as_deref() {
        let email = validation::validate_email("email", email)?;
        ensure_email_free(db, &email, Some(id)).await?;
        am.email = Set(email);
    }
    if let Some(v) = patch_text("name", input.name.as_deref())? { am.name = Set(v); }
    if let Some(v) = patch_text("phone", input.phone.as_deref())? { am.phone = Set(v); }
    if let Some(v) = patch_text("nationality", input.nationality.as_deref())? { am.nationality = Set(v); }
    if let Some(v) = patch_text("id_type", input.id_type.as_deref())? { am.id_type = Set(v); }
    if let Some(v) = patch_text("id_number", input.id_number.as_deref())? { am.id_number = Set(v); }
    am.updated_at = Set(now());

    let updated = am.update(db).await?;
    info!(guest_id = id, "guest updated");
    Ok(updated)
}

/// Delete a guest; reservations and service rows go with it.
pub async fn delete_guest(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    crud::delete_or_not_found::<guest::Entity, _>(db, id, "guest").await?;
    info!(guest_id = id, "guest deleted");
    Ok(())
}

pub async fn get_preferences(db: &DatabaseConnection, guest_id: i32) -> Result<GuestPreferencesResponse, ServiceError> {
    get_guest(db, guest_id).await?;
    let row = guest_preferences::Entity::find()
        .filter(guest_preferences::Column::GuestId.eq(guest_id))
        .one(db)
        .await?;
    Ok(row.into())
}

pub async fn get_ai_insights(db: &DatabaseConnection, guest_id: i32) -> Result<GuestAiInsightsResponse, ServiceError> {
    get_guest(db, guest_id).await?;
    let row = guest_ai_insights::Entity::find()
        .filter(guest_ai_insights::Column::GuestId.eq(guest_id))
        .one(db)
        .await?;
    Ok(row.into())
}

async fn stays(db: &DatabaseConnection, guest_id: i32) -> Result<Vec<(reservation::Model, Option<room::Model>)>, ServiceError> {
    Ok(reservation::Entity::find()
        .filter(reservation::Column::GuestId.eq(guest_id))
        .order_by_desc(reservation::Column::CheckInDate)
        .find_also_related(room::Entity)
        .all(db)
        .await?)
}

/// Full guest profile: stays, preferences, insights, statistics and service usage.
pub async fn get_guest_detail(db: &DatabaseConnection, id: i32) -> Result<GuestDetailResponse, ServiceError> {
    let g = get_guest(db, id).await?;
    let stays = stays(db, id).await?;
    let statistics = GuestStatisticsResponse::from_stays(&stays);

    let requests = service_request::Entity::find()
        .filter(service_request::Column::GuestId.eq(id))
        .all(db)
        .await?;
    let orders = room_service_order::Entity::find()
        .filter(room_service_order::Column::GuestId.eq(id))
        .count(db)
        .await?;
    let housekeeping = housekeeping_request::Entity::find()
        .filter(housekeeping_request::Column::GuestId.eq(id))
        .count(db)
        .await?;
    let maintenance = maintenance_issue::Entity::find()
        .filter(maintenance_issue::Column::GuestId.eq(id))
        .count(db)
        .await?;

    Ok(GuestDetailResponse {
        guest: g.into(),
        reservations: stays.into_iter().map(|(r, _)| ReservationResponse::from(r)).collect(),
        preferences: get_preferences(db, id).await?,
        ai_insights: get_ai_insights(db, id).await?,
        statistics,
        service_usage: crate::views::service_usage(&requests, orders, housekeeping, maintenance),
    })
}

pub async fn get_guest_history(db: &DatabaseConnection, id: i32) -> Result<GuestHistoryResponse, ServiceError> {
    let g = get_guest(db, id).await?;
    let stays = stays(db, id).await?;
    let statistics = GuestStatisticsResponse::from_stays(&stays);
    Ok(GuestHistoryResponse {
        guest: g.into(),
        stays: stays
            .into_iter()
            .map(|(r, room)| StayResponse { reservation: r.into(), room: room.map(Into::into) })
            .collect(),
        statistics,
    })
}
