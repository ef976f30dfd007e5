//! Flat projections: one response shape per table, timestamps in UTC.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use utoipa::ToSchema;

use models::{
    check_in, check_out, guest, housekeeping_request, maintenance_issue, menu_item, reservation, room,
    room_service_order, service_request, staff,
};

type Timestamp = DateTime<FixedOffset>;

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct GuestResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub nationality: String,
    pub id_type: String,
    pub id_number: String,
    pub join_date: DateTime<FixedOffset>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<guest::Model> for GuestResponse {
    fn from(m: guest::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            nationality: m.nationality,
            id_type: m.id_type,
            id_number: m.id_number,
            join_date: m.join_date,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct RoomResponse {
    pub id: i32,
    pub room_number: String,
    pub room_type: String,
    pub floor: i32,
    pub capacity: i32,
    pub price_per_night: f64,
    pub status: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<room::Model> for RoomResponse {
    fn from(m: room::Model) -> Self {
        Self {
            id: m.id,
            room_number: m.room_number,
            room_type: m.room_type,
            floor: m.floor,
            capacity: m.capacity,
            price_per_night: m.price_per_night,
            status: m.status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ReservationResponse {
    pub id: i32,
    pub booking_id: String,
    pub guest_id: i32,
    pub room_id: i32,
    pub check_in_date: DateTime<FixedOffset>,
    pub check_out_date: DateTime<FixedOffset>,
    pub nights: i32,
    pub total_price: f64,
    pub paid_amount: f64,
    pub status: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<reservation::Model> for ReservationResponse {
    fn from(m: reservation::Model) -> Self {
        Self {
            id: m.id,
            booking_id: m.booking_id,
            guest_id: m.guest_id,
            room_id: m.room_id,
            check_in_date: m.check_in_date,
            check_out_date: m.check_out_date,
            nights: m.nights,
            total_price: m.total_price,
            paid_amount: m.paid_amount,
            status: m.status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ServiceRequestResponse {
    pub id: i32,
    pub reservation_id: i32,
    pub guest_id: i32,
    pub service_type: String,
    pub status: String,
    pub priority: String,
    pub description: String,
    pub notes: String,
    pub assigned_to: String,
    pub requested_at: DateTime<FixedOffset>,
    pub completed_at: Option<DateTime<FixedOffset>>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<service_request::Model> for ServiceRequestResponse {
    fn from(m: service_request::Model) -> Self {
        Self {
            id: m.id,
            reservation_id: m.reservation_id,
            guest_id: m.guest_id,
            service_type: m.service_type,
            status: m.status,
            priority: m.priority,
            description: m.description,
            notes: m.notes,
            assigned_to: m.assigned_to,
            requested_at: m.requested_at,
            completed_at: m.completed_at,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct RoomServiceOrderItemResponse {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct RoomServiceOrderResponse {
    pub id: i32,
    pub order_id: String,
    pub reservation_id: i32,
    pub guest_id: i32,
    pub items: Vec<RoomServiceOrderItemResponse>,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub status: String,
    pub special_notes: String,
    pub ordered_at: DateTime<FixedOffset>,
    pub delivered_at: Option<DateTime<FixedOffset>>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<room_service_order::Model> for RoomServiceOrderResponse {
    fn from(m: room_service_order::Model) -> Self {
        let items = room_service_order::decode_lines(&m.items)
            .into_iter()
            .map(|l| RoomServiceOrderItemResponse { id: l.id, name: l.name, price: l.price, quantity: l.quantity })
            .collect();
        Self {
            id: m.id,
            order_id: m.order_id,
            reservation_id: m.reservation_id,
            guest_id: m.guest_id,
            items,
            subtotal: m.subtotal,
            delivery_fee: m.delivery_fee,
            total: m.total,
            status: m.status,
            special_notes: m.special_notes,
            ordered_at: m.ordered_at,
            delivered_at: m.delivered_at,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct HousekeepingRequestResponse {
    pub id: i32,
    pub reservation_id: i32,
    pub guest_id: i32,
    pub request_type: String,
    pub description: String,
    pub schedule_time: String,
    pub status: String,
    pub assigned_to: String,
    pub requested_at: DateTime<FixedOffset>,
    pub completed_at: Option<DateTime<FixedOffset>>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<housekeeping_request::Model> for HousekeepingRequestResponse {
    fn from(m: housekeeping_request::Model) -> Self {
        Self {
            id: m.id,
            reservation_id: m.reservation_id,
            guest_id: m.guest_id,
            request_type: m.request_type,
            description: m.description,
            schedule_time: m.schedule_time,
            status: m.status,
            assigned_to: m.assigned_to,
            requested_at: m.requested_at,
            completed_at: m.completed_at,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct MaintenanceIssueResponse {
    pub id: i32,
    pub reservation_id: i32,
    pub guest_id: i32,
    pub issue_type: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub assigned_to: String,
    pub notes: String,
    pub reported_at: DateTime<FixedOffset>,
    pub resolved_at: Option<DateTime<FixedOffset>>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<maintenance_issue::Model> for MaintenanceIssueResponse {
    fn from(m: maintenance_issue::Model) -> Self {
        Self {
            id: m.id,
            reservation_id: m.reservation_id,
            guest_id: m.guest_id,
            issue_type: m.issue_type,
            description: m.description,
            status: m.status,
            priority: m.priority,
            assigned_to: m.assigned_to,
            notes: m.notes,
            reported_at: m.reported_at,
            resolved_at: m.resolved_at,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct MenuItemResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub available: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<menu_item::Model> for MenuItemResponse {
    fn from(m: menu_item::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            price: m.price,
            category: m.category,
            available: m.available,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct StaffResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub status: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<staff::Model> for StaffResponse {
    fn from(m: staff::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            role: m.role,
            status: m.status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct CheckInResponse {
    pub id: i32,
    pub reservation_id: i32,
    pub guest_id: i32,
    pub room_id: i32,
    pub check_in_time: DateTime<FixedOffset>,
    pub id_verified: bool,
    pub key_issued: bool,
    pub documents_signed: bool,
    pub notes: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<check_in::Model> for CheckInResponse {
    fn from(m: check_in::Model) -> Self {
        Self {
            id: m.id,
            reservation_id: m.reservation_id,
            guest_id: m.guest_id,
            room_id: m.room_id,
            check_in_time: m.check_in_time,
            id_verified: m.id_verified,
            key_issued: m.key_issued,
            documents_signed: m.documents_signed,
            notes: m.notes,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct CheckOutResponse {
    pub id: i32,
    pub reservation_id: i32,
    pub guest_id: i32,
    pub room_id: i32,
    pub check_out_time: DateTime<FixedOffset>,
    pub room_condition: String,
    pub charges: f64,
    pub notes: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<check_out::Model> for CheckOutResponse {
    fn from(m: check_out::Model) -> Self {
        Self {
            id: m.id,
            reservation_id: m.reservation_id,
            guest_id: m.guest_id,
            room_id: m.room_id,
            check_out_time: m.check_out_time,
            room_condition: m.room_condition,
            charges: m.charges,
            notes: m.notes,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// `HH:MM` of a recorded check-in/check-out, or the house default.
pub fn clock_time(ts: Option<&Timestamp>, default: &str) -> String {
    ts.map(|t| t.format("%H:%M").to_string()).unwrap_or_else(|| default.to_string())
}
