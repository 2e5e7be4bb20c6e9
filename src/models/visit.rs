//! Page-view counters and per-day visitor markers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Page views for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Day {
    pub id: NaiveDate,
    pub views: i64,
}

/// Marker that an address was seen on a date. Unique per `(ip, date_id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct IpView {
    pub id: i64,
    pub ip: String,
    pub date_id: NaiveDate,
}

/// Outcome of recording one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedVisit {
    /// Counter value after this request.
    pub views: i64,
    /// Whether this was the address's first request of the day.
    pub first_for_ip: bool,
}
