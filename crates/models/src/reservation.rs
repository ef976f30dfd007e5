use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::{guest, room};

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub booking_id: String,
    pub guest_id: i32,
    pub room_id: i32,
    pub check_in_date: DateTimeWithTimeZone,
    pub check_out_date: DateTimeWithTimeZone,
    pub nights: i32,
    pub total_price: f64,
    pub paid_amount: f64,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Guest, Room }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Guest => Entity::belongs_to(guest::Entity).from(Column::GuestId).to(guest::Column::Id).into(),
            Relation::Room => Entity::belongs_to(room::Entity).from(Column::RoomId).to(room::Column::Id).into(),
        }
    }
}

impl Related<guest::Entity> for Entity {
    fn to() -> RelationDef { Relation::Guest.def() }
}

impl Related<room::Entity> for Entity {
    fn to() -> RelationDef { Relation::Room.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Nights covered by a stay: whole days between the dates, partial days
/// rounded up. The check-out must be strictly after the check-in.
pub fn compute_nights(
    check_in: DateTimeWithTimeZone,
    check_out: DateTimeWithTimeZone,
) -> Result<i32, ModelError> {
    let secs = (check_out - check_in).num_seconds();
    if secs <= 0 {
        return Err(ModelError::invalid("check_out_date", "must be after check_in_date"));
    }
    let nights = (secs + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
    i32::try_from(nights).map_err(|_| ModelError::invalid("check_out_date", "stay is too long"))
}

/// Human-facing booking reference, e.g. `BK-3F9A0C1E`.
pub fn generate_booking_id() -> String {
    short_ref("BK")
}

pub(crate) fn short_ref(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("{prefix}-{}", &id[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn at(d: u32, h: u32) -> DateTimeWithTimeZone {
        Utc.with_ymd_and_hms(2026, 3, d, h, 0, 0).unwrap().into()
    }

    #[test]
    fn whole_days() {
        assert_eq!(compute_nights(at(1, 15), at(4, 15)).unwrap(), 3);
    }

    #[test]
    fn partial_day_rounds_up() {
        assert_eq!(compute_nights(at(1, 15), at(4, 11)).unwrap(), 3);
        assert_eq!(compute_nights(at(1, 15), at(1, 16)).unwrap(), 1);
        assert_eq!(compute_nights(at(1, 15), at(4, 15) + Duration::seconds(1)).unwrap(), 4);
    }

    #[test]
    fn inverted_or_equal_dates_rejected() {
        assert!(compute_nights(at(4, 15), at(1, 15)).is_err());
        assert!(compute_nights(at(4, 15), at(4, 15)).is_err());
    }

    #[test]
    fn booking_ids_look_right() {
        let a = generate_booking_id();
        let b = generate_booking_id();
        assert!(a.starts_with("BK-"));
        assert_eq!(a.len(), 11);
        assert_ne!(a, b);
    }
}
