//! Guest-centric composite views. Everything here is a pure function of rows
//! already loaded by `db::guest_service`.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use utoipa::ToSchema;

use models::{guest_ai_insights, guest_preferences, json_bag, reservation, room, service_request, status};

use super::records::{GuestResponse, ReservationResponse, RoomResponse};

#[derive(Clone, Debug, Default, Serialize, ToSchema)]
pub struct GuestPreferencesResponse {
    pub id: i32,
    pub room_floors: Vec<String>,
    pub meal_types: Vec<String>,
    pub room_types: Vec<String>,
    pub special_requests: Vec<String>,
}

impl GuestPreferencesResponse {
    /// All four bags in display order, used by reservation and tablet views.
    pub fn flattened(&self) -> Vec<String> {
        self.room_floors
            .iter()
            .chain(&self.meal_types)
            .chain(&self.room_types)
            .chain(&self.special_requests)
            .cloned()
            .collect()
    }
}

impl From<Option<guest_preferences::Model>> for GuestPreferencesResponse {
    fn from(m: Option<guest_preferences::Model>) -> Self {
        let Some(m) = m else { return Self::default() };
        Self {
            id: m.id,
            room_floors: json_bag::flatten(m.room_floors.as_ref()),
            meal_types: json_bag::flatten(m.meal_types.as_ref()),
            room_types: json_bag::flatten(m.room_types.as_ref()),
            special_requests: json_bag::flatten(m.special_requests.as_ref()),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, ToSchema)]
pub struct GuestAiInsightsResponse {
    pub id: i32,
    pub meal_preference: String,
    pub room_preference: String,
    pub service_pattern: String,
    pub risk_score: String,
    pub recommendations: Vec<String>,
    pub complaints: Vec<String>,
}

impl From<Option<guest_ai_insights::Model>> for GuestAiInsightsResponse {
    fn from(m: Option<guest_ai_insights::Model>) -> Self {
        let Some(m) = m else { return Self::default() };
        Self {
            id: m.id,
            meal_preference: m.meal_preference,
            room_preference: m.room_preference,
            service_pattern: m.service_pattern,
            risk_score: m.risk_score,
            recommendations: json_bag::flatten(m.recommendations.as_ref()),
            complaints: json_bag::flatten(m.complaints.as_ref()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, ToSchema)]
pub struct GuestStatisticsResponse {
    pub total_stays: u64,
    pub total_spent: f64,
    pub average_spend: f64,
    pub last_visit: Option<DateTime<FixedOffset>>,
    pub most_common_room: String,
}

impl GuestStatisticsResponse {
    /// Stay statistics over a guest's reservations; cancelled ones don't count.
    pub fn from_stays(stays: &[(reservation::Model, Option<room::Model>)]) -> Self {
        let counted: Vec<_> = stays
            .iter()
            .filter(|(r, _)| r.status != status::reservation::CANCELLED)
            .collect();
        let total_stays = counted.len() as u64;
        let total_spent: f64 = counted.iter().map(|(r, _)| r.total_price).sum();
        let average_spend = if total_stays == 0 { 0.0 } else { total_spent / total_stays as f64 };
        let last_visit = counted.iter().map(|(r, _)| r.check_in_date).max();

        let mut by_type: BTreeMap<&str, u64> = BTreeMap::new();
        for room in counted.iter().filter_map(|(_, room)| room.as_ref()) {
            *by_type.entry(room.room_type.as_str()).or_default() += 1;
        }
        // BTreeMap iterates alphabetically, so the first maximum wins ties.
        let most_common_room = by_type
            .iter()
            .fold(None::<(&str, u64)>, |best, (t, n)| match best {
                Some((_, m)) if m >= *n => best,
                _ => Some((t, *n)),
            })
            .map(|(t, _)| t.to_string())
            .unwrap_or_default();

        Self { total_stays, total_spent, average_spend, last_visit, most_common_room }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct ServiceUsageResponse {
    #[serde(rename = "type")]
    pub service_type: String,
    pub count: u64,
    pub label: String,
}

/// Per-type counts of everything a guest asked for during their stays.
pub fn service_usage(
    requests: &[service_request::Model],
    room_service_orders: u64,
    housekeeping_requests: u64,
    maintenance_issues: u64,
) -> Vec<ServiceUsageResponse> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for r in requests {
        *counts.entry(r.service_type.clone()).or_default() += 1;
    }
    for (kind, n) in [
        ("room-service", room_service_orders),
        ("housekeeping", housekeeping_requests),
        ("maintenance", maintenance_issues),
    ] {
        if n > 0 {
            *counts.entry(kind.to_string()).or_default() += n;
        }
    }
    let mut usage: Vec<_> = counts
        .into_iter()
        .map(|(service_type, count)| ServiceUsageResponse {
            label: service_request::service_label(&service_type),
            service_type,
            count,
        })
        .collect();
    usage.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.service_type.cmp(&b.service_type)));
    usage
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct GuestDetailResponse {
    #[serde(flatten)]
    pub guest: GuestResponse,
    pub reservations: Vec<ReservationResponse>,
    pub preferences: GuestPreferencesResponse,
    pub ai_insights: GuestAiInsightsResponse,
    pub statistics: GuestStatisticsResponse,
    pub service_usage: Vec<ServiceUsageResponse>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct StayResponse {
    #[serde(flatten)]
    pub reservation: ReservationResponse,
    pub room: Option<RoomResponse>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct GuestHistoryResponse {
    pub guest: GuestResponse,
    pub stays: Vec<StayResponse>,
    pub statistics: GuestStatisticsResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn stay(id: i32, price: f64, status: &str, day: u32, room_type: &str) -> (reservation::Model, Option<room::Model>) {
        let check_in: DateTime<FixedOffset> = Utc.with_ymd_and_hms(2026, 4, day, 15, 0, 0).unwrap().into();
        let res = reservation::Model {
            id,
            booking_id: format!("BK-{id}"),
            guest_id: 1,
            room_id: id,
            check_in_date: check_in,
            check_out_date: check_in + Duration::days(1),
            nights: 1,
            total_price: price,
            paid_amount: 0.0,
            status: status.into(),
            created_at: check_in,
            updated_at: check_in,
        };
        let room = room::Model {
            id,
            room_number: format!("{id}"),
            room_type: room_type.into(),
            floor: 1,
            capacity: 2,
            price_per_night: price,
            status: "available".into(),
            created_at: check_in,
            updated_at: check_in,
        };
        (res, Some(room))
    }

    #[test]
    fn statistics_skip_cancelled_stays() {
        let stays = vec![
            stay(1, 100.0, "checked-out", 1, "Suite"),
            stay(2, 300.0, "confirmed", 10, "Deluxe"),
            stay(3, 999.0, "cancelled", 20, "Suite"),
        ];
        let s = GuestStatisticsResponse::from_stays(&stays);
        assert_eq!(s.total_stays, 2);
        assert_eq!(s.total_spent, 400.0);
        assert_eq!(s.average_spend, 200.0);
        assert_eq!(s.last_visit, Some(stays[1].0.check_in_date));
        // one Suite, one Deluxe: alphabetical tie-break
        assert_eq!(s.most_common_room, "Deluxe");
    }

    #[test]
    fn statistics_for_new_guest_are_zero() {
        let s = GuestStatisticsResponse::from_stays(&[]);
        assert_eq!(s, GuestStatisticsResponse::default());
        assert_eq!(s.most_common_room, "");
        assert!(s.last_visit.is_none());
    }

    #[test]
    fn usage_merges_families_and_sorts() {
        let (res, _) = stay(1, 0.0, "confirmed", 1, "Suite");
        let req = |t: &str| service_request::Model {
            id: 0,
            reservation_id: 1,
            guest_id: 1,
            service_type: t.into(),
            status: "pending".into(),
            priority: "medium".into(),
            description: String::new(),
            notes: String::new(),
            assigned_to: String::new(),
            requested_at: res.created_at,
            completed_at: None,
            created_at: res.created_at,
            updated_at: res.created_at,
        };
        let usage = service_usage(&[req("concierge"), req("room-service")], 2, 1, 0);
        let got: Vec<_> = usage.iter().map(|u| (u.service_type.as_str(), u.count)).collect();
        assert_eq!(got, vec![("room-service", 3), ("concierge", 1), ("housekeeping", 1)]);
        assert_eq!(usage[0].label, "Room Service");
    }

    #[test]
    fn preferences_flatten_in_order() {
        let p = GuestPreferencesResponse {
            id: 1,
            room_floors: vec!["high".into()],
            meal_types: vec!["vegan".into()],
            room_types: vec![],
            special_requests: vec!["late checkout".into()],
        };
        assert_eq!(p.flattened(), vec!["high", "vegan", "late checkout"]);
        assert!(GuestPreferencesResponse::from(None).flattened().is_empty());
    }
}
