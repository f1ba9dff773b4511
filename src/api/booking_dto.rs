use serde::{Deserialize, Serialize};

use crate::api::opt_decimal;

/// Outbound payload of `POST /bookings/offline`.
///
/// `slot_ids` is ordered by catalog position and `amount` is fixed to two
/// decimal places, both of which the backend treats as authoritative input
/// for conflict checking and receipts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfflineBookingRequest {
    pub turf_id: i64,
    pub player_name: String,
    pub player_phone: String,
    pub booking_date: String,
    pub slot_ids: Vec<i64>,
    pub start_time: String,
    pub end_time: String,
    pub amount: String,
    pub payment_method: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingDto {
    pub id: i64,
    pub player_name: Option<String>,
    pub player_phone: Option<String>,
    pub booking_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,

    #[serde(default, deserialize_with = "opt_decimal")]
    pub amount: Option<f64>,

    pub booking_status: Option<String>,

    pub turf: Option<BookingTurfDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingTurfDto {
    pub name: Option<String>,
}

/// Aggregate counters from `GET /bookings/stats`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingStatsDto {
    pub total_bookings: Option<i64>,
    pub confirmed_bookings: Option<i64>,
    pub cancelled_bookings: Option<i64>,

    #[serde(default, deserialize_with = "opt_decimal")]
    pub total_revenue: Option<f64>,
}

/// Filter parameters accepted by `GET /bookings`.
#[derive(Debug, Clone, Default)]
pub struct BookingListFilter {
    pub turf_id: Option<i64>,
    pub date: Option<String>,
    pub status: Option<String>,
}

impl BookingListFilter {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(turf_id) = self.turf_id {
            query.push(("turf_id", turf_id.to_string()));
        }
        if let Some(date) = &self.date {
            query.push(("date", date.clone()));
        }
        if let Some(status) = &self.status {
            query.push(("status", status.clone()));
        }
        query
    }
}
