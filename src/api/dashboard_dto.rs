use serde::Deserialize;

use crate::api::opt_decimal;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardStatsDto {
    pub total_turfs: Option<i64>,
    pub total_bookings: Option<i64>,

    #[serde(default, deserialize_with = "opt_decimal")]
    pub total_revenue: Option<f64>,

    #[serde(default, deserialize_with = "opt_decimal")]
    pub pending_payout: Option<f64>,
}
