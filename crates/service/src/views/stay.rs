//! Reservation-centric views: the front-desk detail page, service request
//! detail, and the restricted in-room tablet shapes.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use utoipa::ToSchema;

use models::{check_in, check_out, menu_item};

use super::records::{GuestResponse, RoomResponse, ServiceRequestResponse};

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ReservationDetailResponse {
    pub id: i32,
    pub booking_id: String,
    pub guest: Option<GuestResponse>,
    pub room: Option<RoomResponse>,
    pub check_in_date: DateTime<FixedOffset>,
    pub check_out_date: DateTime<FixedOffset>,
    pub check_in_time: String,
    pub check_out_time: String,
    pub nights: i32,
    pub total_price: f64,
    pub paid_amount: f64,
    pub status: String,
    pub preferences: Vec<String>,
    pub service_requests: Vec<ServiceRequestResponse>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ServiceRequestDetailResponse {
    pub id: i32,
    pub reservation_id: i32,
    pub guest: Option<GuestResponse>,
    pub room: Option<RoomResponse>,
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

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct InRoomTabletReservationResponse {
    pub room_number: String,
    pub room_type: String,
    pub guest_name: String,
    pub check_in_date: DateTime<FixedOffset>,
    pub check_out_date: DateTime<FixedOffset>,
    pub check_in_time: String,
    pub check_out_time: String,
    pub nights: i32,
    pub booking_id: String,
    pub total_price: f64,
    pub paid_amount: f64,
    pub preferences: Vec<String>,
}

/// Menu entry as shown to guests: no audit timestamps.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct InRoomTabletMenuResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub available: bool,
}

impl From<menu_item::Model> for InRoomTabletMenuResponse {
    fn from(m: menu_item::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            price: m.price,
            category: m.category,
            available: m.available,
        }
    }
}

/// Arrival and departure clock times for a stay.
pub fn stay_times(ci: Option<&check_in::Model>, co: Option<&check_out::Model>) -> (String, String) {
    (
        super::records::clock_time(ci.map(|c| &c.check_in_time), check_in::DEFAULT_CHECK_IN_TIME),
        super::records::clock_time(co.map(|c| &c.check_out_time), check_out::DEFAULT_CHECK_OUT_TIME),
    )
}
