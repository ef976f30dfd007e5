//! Conventional status values. Stored as plain strings; updates may write any value.

use sea_orm::prelude::DateTimeWithTimeZone;

pub mod room {
    pub const AVAILABLE: &str = "available";
    pub const OCCUPIED: &str = "occupied";
    pub const MAINTENANCE: &str = "maintenance";
    pub const CLEANING: &str = "cleaning";
}

pub mod reservation {
    pub const PENDING: &str = "pending";
    pub const CONFIRMED: &str = "confirmed";
    pub const CHECKED_IN: &str = "checked-in";
    pub const CHECKED_OUT: &str = "checked-out";
    pub const CANCELLED: &str = "cancelled";
}

/// Service requests and housekeeping requests.
pub mod request {
    pub const PENDING: &str = "pending";
    pub const IN_PROGRESS: &str = "in-progress";
    pub const COMPLETED: &str = "completed";
    pub const CANCELLED: &str = "cancelled";
}

pub mod order {
    pub const PENDING: &str = "pending";
    pub const PREPARING: &str = "preparing";
    pub const DELIVERED: &str = "delivered";
    pub const CANCELLED: &str = "cancelled";
}

pub mod maintenance {
    pub const REPORTED: &str = "reported";
    pub const IN_PROGRESS: &str = "in-progress";
    pub const RESOLVED: &str = "resolved";
}

pub mod staff {
    pub const ACTIVE: &str = "active";
    pub const INACTIVE: &str = "inactive";
}

/// Completion timestamp after a status write: stamped the first time the
/// status reaches `terminal`, otherwise left as it was.
pub fn stamp_on(
    status: &str,
    terminal: &str,
    current: Option<DateTimeWithTimeZone>,
    now: DateTimeWithTimeZone,
) -> Option<DateTimeWithTimeZone> {
    match current {
        Some(ts) => Some(ts),
        None if status == terminal => Some(now),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn stamps_once_on_terminal_status() {
        let t1: DateTimeWithTimeZone = Utc::now().into();
        let t2 = t1 + Duration::minutes(5);

        let first = stamp_on(request::COMPLETED, request::COMPLETED, None, t1);
        assert_eq!(first, Some(t1));
        let again = stamp_on(request::COMPLETED, request::COMPLETED, first, t2);
        assert_eq!(again, Some(t1));
    }

    #[test]
    fn other_statuses_leave_stamp_alone() {
        let now: DateTimeWithTimeZone = Utc::now().into();
        assert_eq!(stamp_on(request::IN_PROGRESS, request::COMPLETED, None, now), None);
        assert_eq!(stamp_on(request::PENDING, request::COMPLETED, Some(now), now), Some(now));
    }
}
