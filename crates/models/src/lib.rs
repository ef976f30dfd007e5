//! SeaORM entities for the hotel schema plus the pure domain rules that go
//! with them (night counts, order totals, JSON-bag flattening, field checks).

pub mod errors;
pub mod db;
pub mod validation;
pub mod status;
pub mod json_bag;

pub mod guest;
pub mod guest_preferences;
pub mod guest_ai_insights;
pub mod room;
pub mod reservation;
pub mod service_request;
pub mod room_service_order;
pub mod housekeeping_request;
pub mod maintenance_issue;
pub mod menu_item;
pub mod staff;
pub mod check_in;
pub mod check_out;

#[cfg(test)]
mod schema_tests {
    use chrono::{Duration, Utc};
    use migration::MigratorTrait;
    use sea_orm::{ActiveModelTrait, EntityTrait, Set};

    use crate::{db, guest, guest_preferences, json_bag, reservation, room, status};

    #[tokio::test]
    async fn entities_match_migrated_schema() -> anyhow::Result<()> {
        let cfg = configs::DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
        let db = db::connect_with_config(&cfg).await?;
        migration::Migrator::up(&db, None).await?;
        let now = Utc::now();

        let g = guest::ActiveModel {
            name: Set("Ada Lovelace".into()),
            email: Set("ada@example.com".into()),
            phone: Set("+44 20".into()),
            nationality: Set("UK".into()),
            id_type: Set("passport".into()),
            id_number: Set("P123".into()),
            join_date: Set(now.into()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        guest_preferences::ActiveModel {
            guest_id: Set(g.id),
            room_floors: Set(Some(json_bag::from_strings(["high"]))),
            meal_types: Set(None),
            room_types: Set(Some(json_bag::from_strings(["Suite"]))),
            special_requests: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let r = room::ActiveModel {
            room_number: Set("101".into()),
            room_type: Set("Suite".into()),
            floor: Set(1),
            capacity: Set(2),
            price_per_night: Set(200.0),
            status: Set(status::room::AVAILABLE.into()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let check_in = now + Duration::days(1);
        let check_out = now + Duration::days(3);
        let res = reservation::ActiveModel {
            booking_id: Set(reservation::generate_booking_id()),
            guest_id: Set(g.id),
            room_id: Set(r.id),
            check_in_date: Set(check_in.into()),
            check_out_date: Set(check_out.into()),
            nights: Set(reservation::compute_nights(check_in.into(), check_out.into())?),
            total_price: Set(400.0),
            paid_amount: Set(0.0),
            status: Set(status::reservation::PENDING.into()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        }
        .insert(&db)
        .await?;
        assert_eq!(res.nights, 2);

        let (found, found_room) = reservation::Entity::find_by_id(res.id)
            .find_also_related(room::Entity)
            .one(&db)
            .await?
            .expect("reservation exists");
        assert_eq!(found.guest_id, g.id);
        assert_eq!(found_room.map(|r| r.room_number), Some("101".to_string()));

        let prefs = guest_preferences::Entity::find().one(&db).await?.expect("preferences exist");
        assert_eq!(json_bag::flatten(prefs.room_floors.as_ref()), vec!["high"]);
        assert!(prefs.meal_types.is_none());
        Ok(())
    }
}
