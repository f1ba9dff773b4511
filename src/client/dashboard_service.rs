use std::sync::Arc;

use crate::api::booking_dto::BookingDto;
use crate::api::dashboard_dto::DashboardStatsDto;
use crate::api::envelope::{ItemEnvelope, ListEnvelope};
use crate::client::api_client::ApiClient;
use crate::client::endpoint::Endpoint;
use crate::domain::dashboard::{DashboardStats, DashboardView};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct DashboardService {
    api: Arc<ApiClient>,
}

impl DashboardService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        DashboardService { api }
    }

    /// Stats and the recent-bookings strip are independent reads, so they are
    /// fetched concurrently.
    pub async fn load_dashboard(&self) -> Result<DashboardView> {
        let stats = self.api.get_json::<ItemEnvelope<DashboardStatsDto>>(Endpoint::DashboardStats, &[]);
        let recent = self.api.get_json::<ListEnvelope<BookingDto>>(Endpoint::RecentBookings, &[]);

        let (stats, recent) = futures::try_join!(stats, recent)?;

        Ok(DashboardView {
            stats: DashboardStats::from_dto(stats.into_item()),
            recent_bookings: recent.into_items(),
        })
    }
}
