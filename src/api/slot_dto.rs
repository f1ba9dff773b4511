use serde::{Deserialize, Serialize};

use crate::api::opt_decimal;

/// One bookable time unit of a turf on a given date, as emitted by
/// `GET /slots`. Times are fixed-width 24-hour `HH:MM` strings.
#[derive(Debug, Clone, Deserialize)]
pub struct SlotDto {
    pub id: i64,
    pub start_time: String,
    pub end_time: String,

    /// Per-slot price. Absent when the turf uses one uniform hourly price.
    #[serde(default, deserialize_with = "opt_decimal")]
    pub price: Option<f64>,

    #[serde(default)]
    pub is_booked: bool,

    /// Pre-formatted display variant of `start_time`, when the backend sends one.
    pub start_time_display: Option<String>,

    /// Present on booked slots only.
    pub booking: Option<SlotBookingDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotBookingDto {
    pub player_name: Option<String>,
}

/// Body of `POST /slots/generate`, issued when a date has no slots yet.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateSlotsRequest {
    pub turf_id: i64,
    pub date: String,
}
