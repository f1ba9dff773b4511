use serde::Deserialize;

use crate::api::opt_decimal;

/// One settlement period from `GET /payouts`. All amounts are computed
/// server-side; the client only renders them.
#[derive(Debug, Clone, Deserialize)]
pub struct PayoutDto {
    pub id: i64,
    pub status: Option<String>,
    pub period_start: Option<String>,
    pub period_end: Option<String>,

    #[serde(default, deserialize_with = "opt_decimal")]
    pub total_bookings_amount: Option<f64>,

    #[serde(default, deserialize_with = "opt_decimal")]
    pub platform_fee: Option<f64>,

    #[serde(default, deserialize_with = "opt_decimal")]
    pub net_amount: Option<f64>,

    pub paid_at: Option<String>,
}
