use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::api::booking_dto::{BookingDto, BookingListFilter, BookingStatsDto, OfflineBookingRequest};
use crate::api::envelope::{ItemEnvelope, ListEnvelope};
use crate::api::slot_dto::SlotDto;
use crate::client::api_client::ApiClient;
use crate::client::endpoint::Endpoint;
use crate::client::gateway::BookingGateway;
use crate::client::slot_service::SlotService;
use crate::error::Result;

/// Booking listing, stats, and offline-booking creation.
#[derive(Debug, Clone)]
pub struct BookingService {
    api: Arc<ApiClient>,
}

impl BookingService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        BookingService { api }
    }

    pub async fn list_bookings(&self, filter: &BookingListFilter) -> Result<Vec<BookingDto>> {
        let query = filter.to_query();
        let envelope: ListEnvelope<BookingDto> = self.api.get_json(Endpoint::Bookings, &query).await?;
        Ok(envelope.into_items())
    }

    pub async fn booking_stats(&self) -> Result<BookingStatsDto> {
        let envelope: ItemEnvelope<BookingStatsDto> = self.api.get_json(Endpoint::BookingStats, &[]).await?;
        Ok(envelope.into_item())
    }

    pub async fn create_offline_booking(&self, payload: &OfflineBookingRequest) -> Result<BookingDto> {
        log::info!(
            "Submitting offline booking: turf {}, {} slot(s), amount {}.",
            payload.turf_id,
            payload.slot_ids.len(),
            payload.amount
        );
        let envelope: ItemEnvelope<BookingDto> = self.api.post_json(Endpoint::OfflineBooking, payload).await?;
        Ok(envelope.into_item())
    }
}

/// Production wiring of the offline-booking flow's wire seam.
pub struct HttpBookingGateway {
    slots: SlotService,
    bookings: BookingService,
}

impl HttpBookingGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        HttpBookingGateway {
            slots: SlotService::new(api.clone()),
            bookings: BookingService::new(api),
        }
    }
}

#[async_trait]
impl BookingGateway for HttpBookingGateway {
    async fn fetch_slots(&self, turf_id: i64, date: NaiveDate) -> Result<Vec<SlotDto>> {
        self.slots.fetch_slots(turf_id, date).await
    }

    async fn generate_slots(&self, turf_id: i64, date: NaiveDate) -> Result<()> {
        self.slots.generate_slots(turf_id, date).await
    }

    async fn create_offline_booking(&self, payload: &OfflineBookingRequest) -> Result<BookingDto> {
        self.bookings.create_offline_booking(payload).await
    }
}
