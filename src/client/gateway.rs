use async_trait::async_trait;
use chrono::NaiveDate;

use crate::api::booking_dto::{BookingDto, OfflineBookingRequest};
use crate::api::slot_dto::SlotDto;
use crate::error::Result;

/// The wire seam the offline-booking flow depends on. The production
/// implementation lives in the slot/booking services; tests substitute an
/// in-memory mock.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    /// Raw slot records for one (turf, date) pair; may be empty.
    async fn fetch_slots(&self, turf_id: i64, date: NaiveDate) -> Result<Vec<SlotDto>>;

    /// Asks the backend to create the day's slot grid when none exists yet.
    async fn generate_slots(&self, turf_id: i64, date: NaiveDate) -> Result<()>;

    /// Submits a finalized offline booking.
    async fn create_offline_booking(&self, payload: &OfflineBookingRequest) -> Result<BookingDto>;
}
