use crate::api::booking_dto::BookingDto;
use crate::api::dashboard_dto::DashboardStatsDto;

/// Headline numbers for the dashboard. Missing backend fields render as zero.
#[derive(Debug, Clone, Default)]
pub struct DashboardStats {
    pub total_turfs: i64,
    pub total_bookings: i64,
    pub total_revenue: f64,
    pub pending_payout: f64,
}

impl DashboardStats {
    pub fn from_dto(dto: DashboardStatsDto) -> Self {
        DashboardStats {
            total_turfs: dto.total_turfs.unwrap_or(0),
            total_bookings: dto.total_bookings.unwrap_or(0),
            total_revenue: dto.total_revenue.unwrap_or(0.0),
            pending_payout: dto.pending_payout.unwrap_or(0.0),
        }
    }
}

/// Stats plus the recent-bookings strip, fetched together.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub recent_bookings: Vec<BookingDto>,
}
