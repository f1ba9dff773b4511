use std::sync::Arc;

use chrono::NaiveDate;

use crate::api::envelope::ListEnvelope;
use crate::api::slot_dto::{GenerateSlotsRequest, SlotDto};
use crate::client::api_client::ApiClient;
use crate::client::endpoint::Endpoint;
use crate::error::Result;

/// Calls for the slot grid of a (turf, date) pair.
#[derive(Debug, Clone)]
pub struct SlotService {
    api: Arc<ApiClient>,
}

impl SlotService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        SlotService { api }
    }

    pub async fn fetch_slots(&self, turf_id: i64, date: NaiveDate) -> Result<Vec<SlotDto>> {
        let query = [("turf_id", turf_id.to_string()), ("date", date.format("%Y-%m-%d").to_string())];
        let envelope: ListEnvelope<SlotDto> = self.api.get_json(Endpoint::Slots, &query).await?;

        let slots = envelope.into_items();
        log::debug!("Fetched {} slot(s) for turf {} on {}.", slots.len(), turf_id, date);
        Ok(slots)
    }

    pub async fn generate_slots(&self, turf_id: i64, date: NaiveDate) -> Result<()> {
        let body = GenerateSlotsRequest {
            turf_id,
            date: date.format("%Y-%m-%d").to_string(),
        };
        let _: serde_json::Value = self.api.post_json(Endpoint::GenerateSlots, &body).await?;
        log::info!("Requested slot generation for turf {} on {}.", turf_id, date);
        Ok(())
    }
}
