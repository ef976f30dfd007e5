//! Guest-facing operations for the in-room tablet. Reads are trimmed views;
//! writes reuse the staff-side services, with the guest taken from the
//! reservation when the tablet does not send one.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use models::{check_in, check_out, guest, guest_preferences, housekeeping_request, maintenance_issue, room, room_service_order};

use super::{housekeeping_service, maintenance_service, menu_item_service, reservation_service, room_service_order_service};
use crate::errors::ServiceError;
use crate::views::{stay_times, GuestPreferencesResponse, InRoomTabletMenuResponse, InRoomTabletReservationResponse};

pub async fn get_reservation(db: &DatabaseConnection, reservation_id: i32) -> Result<InRoomTabletReservationResponse, ServiceError> {
    let r = reservation_service::get_reservation(db, reservation_id).await?;
    let g = guest::Entity::find_by_id(r.guest_id).one(db).await?;
    let rm = room::Entity::find_by_id(r.room_id).one(db).await?;
    let ci = check_in::Entity::find().filter(check_in::Column::ReservationId.eq(r.id)).one(db).await?;
    let co = check_out::Entity::find().filter(check_out::Column::ReservationId.eq(r.id)).one(db).await?;
    let prefs = guest_preferences::Entity::find()
        .filter(guest_preferences::Column::GuestId.eq(r.guest_id))
        .one(db)
        .await?;
    let (check_in_time, check_out_time) = stay_times(ci.as_ref(), co.as_ref());
    let (room_number, room_type) = rm.map(|x| (x.room_number, x.room_type)).unwrap_or_default();

    Ok(InRoomTabletReservationResponse {
        room_number,
        room_type,
        guest_name: g.map(|x| x.name).unwrap_or_default(),
        check_in_date: r.check_in_date,
        check_out_date: r.check_out_date,
        check_in_time,
        check_out_time,
        nights: r.nights,
        booking_id: r.booking_id,
        total_price: r.total_price,
        paid_amount: r.paid_amount,
        preferences: GuestPreferencesResponse::from(prefs).flattened(),
    })
}

/// Orderable items only.
pub async fn get_menu(db: &DatabaseConnection) -> Result<Vec<InRoomTabletMenuResponse>, ServiceError> {
    let items = menu_item_service::list_available(db).await?;
    Ok(items.into_iter().map(Into::into).collect())
}

/// Guest id for a tablet write: the one sent, or the reservation's own.
async fn stay_guest(db: &DatabaseConnection, reservation_id: i32, guest_id: i32) -> Result<i32, ServiceError> {
    if guest_id > 0 || reservation_id < 1 {
        return Ok(guest_id);
    }
    let r = reservation_service::get_reservation(db, reservation_id).await.map_err(|e| match e {
        ServiceError::NotFound(_) => ServiceError::Validation(format!("reservation_id: reservation {reservation_id} does not exist")),
        other => other,
    })?;
    Ok(r.guest_id)
}

pub async fn create_room_service_order(
    db: &DatabaseConnection,
    input: &room_service_order_service::CreateRoomServiceOrder,
) -> Result<room_service_order::Model, ServiceError> {
    let mut input = input.clone();
    input.guest_id = stay_guest(db, input.reservation_id, input.guest_id).await?;
    room_service_order_service::create_order(db, &input).await
}

pub async fn create_housekeeping_request(
    db: &DatabaseConnection,
    input: &housekeeping_service::CreateHousekeepingRequest,
) -> Result<housekeeping_request::Model, ServiceError> {
    let mut input = input.clone();
    input.guest_id = stay_guest(db, input.reservation_id, input.guest_id).await?;
    housekeeping_service::create_housekeeping(db, &input).await
}

pub async fn create_maintenance_issue(
    db: &DatabaseConnection,
    input: &maintenance_service::CreateMaintenanceIssue,
) -> Result<maintenance_issue::Model, ServiceError> {
    let mut input = input.clone();
    input.guest_id = stay_guest(db, input.reservation_id, input.guest_id).await?;
    maintenance_service::create_issue(db, &input).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_menu_item, seed_stay};
    use models::json_bag;
    use sea_orm::{ActiveModelTrait, Set};

    #[tokio::test]
    async fn reservation_view_uses_defaults_before_arrival() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (g, r, res) = seed_stay(&db).await?;
        let prefs = guest_preferences::Entity::find()
            .filter(guest_preferences::Column::GuestId.eq(g.id))
            .one(&db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("preferences row missing"))?;
        let mut am: guest_preferences::ActiveModel = prefs.into();
        am.special_requests = Set(Some(json_bag::from_strings(["High floor"])));
        am.update(&db).await?;

        let view = get_reservation(&db, res.id).await?;
        assert_eq!(view.room_number, r.room_number);
        assert_eq!(view.guest_name, g.name);
        assert_eq!(view.check_in_time, "15:00");
        assert_eq!(view.check_out_time, "11:00");
        assert_eq!(view.nights, 2);
        assert!(view.preferences.contains(&"High floor".to_string()));

        assert!(matches!(get_reservation(&db, 999).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn menu_hides_unavailable_items() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed_menu_item(&db, "Club sandwich", 14.0, true).await?;
        seed_menu_item(&db, "Lobster", 55.0, false).await?;
        let menu = get_menu(&db).await?;
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].name, "Club sandwich");
        Ok(())
    }

    #[tokio::test]
    async fn writes_fill_guest_from_reservation() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (g, _, res) = seed_stay(&db).await?;
        let issue = create_maintenance_issue(
            &db,
            &maintenance_service::CreateMaintenanceIssue {
                reservation_id: res.id,
                issue_type: "plumbing".into(),
                description: "Sink drains slowly".into(),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(issue.guest_id, g.id);

        let hk = create_housekeeping_request(
            &db,
            &housekeeping_service::CreateHousekeepingRequest {
                reservation_id: res.id,
                request_type: "turndown".into(),
                description: "Evening turndown".into(),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(hk.guest_id, g.id);
        assert_eq!(hk.schedule_time, "immediate");

        let item = seed_menu_item(&db, "Soup", 8.0, true).await?;
        let order = create_room_service_order(
            &db,
            &room_service_order_service::CreateRoomServiceOrder {
                reservation_id: res.id,
                items: vec![room_service_order_service::OrderItemInput { menu_item_id: item.id, quantity: 1 }],
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(order.guest_id, g.id);

        let ghost = maintenance_service::CreateMaintenanceIssue {
            reservation_id: 999,
            issue_type: "x".into(),
            description: "y".into(),
            ..Default::default()
        };
        assert!(create_maintenance_issue(&db, &ghost).await.unwrap_err().is_validation());
        Ok(())
    }
}
