#![cfg(test)]
use chrono::{Duration, Utc};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use configs::DatabaseConfig;
use models::db::connect_with_config;
use models::{guest, menu_item, reservation, room};

use crate::db::{guest_service, menu_item_service, reservation_service, room_service};

/// A private, freshly migrated in-memory database for one test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn seed_guest(db: &DatabaseConnection, email: &str) -> anyhow::Result<guest::Model> {
    let input = guest_service::CreateGuest {
        name: "Test Guest".into(),
        email: email.into(),
        phone: "+1 555 0100".into(),
        nationality: "US".into(),
        id_type: "passport".into(),
        id_number: "X1234567".into(),
    };
    Ok(guest_service::create_guest(db, &input).await?)
}

pub async fn seed_room(db: &DatabaseConnection, number: &str, room_type: &str) -> anyhow::Result<room::Model> {
    let input = room_service::CreateRoom {
        room_number: number.into(),
        room_type: room_type.into(),
        floor: 1,
        capacity: 2,
        price_per_night: 120.0,
        status: None,
    };
    Ok(room_service::create_room(db, &input).await?)
}

/// Two-night stay starting tomorrow.
pub async fn seed_reservation(db: &DatabaseConnection, guest_id: i32, room_id: i32) -> anyhow::Result<reservation::Model> {
    let check_in = Utc::now() + Duration::days(1);
    let input = reservation_service::CreateReservation {
        guest_id,
        room_id,
        check_in_date: Some(check_in.into()),
        check_out_date: Some((check_in + Duration::days(2)).into()),
        total_price: 240.0,
        paid_amount: None,
        status: None,
    };
    Ok(reservation_service::create_reservation(db, &input).await?)
}

pub async fn seed_menu_item(db: &DatabaseConnection, name: &str, price: f64, available: bool) -> anyhow::Result<menu_item::Model> {
    let input = menu_item_service::CreateMenuItem {
        name: name.into(),
        description: None,
        price,
        category: "mains".into(),
        available: Some(available),
    };
    Ok(menu_item_service::create_menu_item(db, &input).await?)
}

/// Guest, room and reservation in one go.
pub async fn seed_stay(db: &DatabaseConnection) -> anyhow::Result<(guest::Model, room::Model, reservation::Model)> {
    let g = seed_guest(db, "stay@example.com").await?;
    let r = seed_room(db, "201", "Deluxe").await?;
    let res = seed_reservation(db, g.id, r.id).await?;
    Ok((g, r, res))
}
