use std::sync::Arc;

use crate::api::envelope::{ItemEnvelope, ListEnvelope};
use crate::api::turf_dto::{TurfDto, TurfUpdateRequest};
use crate::client::api_client::ApiClient;
use crate::client::endpoint::Endpoint;
use crate::domain::turf::{Turf, active_turfs};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct TurfService {
    api: Arc<ApiClient>,
}

impl TurfService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        TurfService { api }
    }

    pub async fn list_turfs(&self) -> Result<Vec<Turf>> {
        let envelope: ListEnvelope<TurfDto> = self.api.get_json(Endpoint::Turfs, &[]).await?;
        Ok(envelope.into_items().into_iter().map(Turf::from_dto).collect())
    }

    /// Turfs eligible for offline booking (suspended ones excluded).
    pub async fn list_active_turfs(&self) -> Result<Vec<Turf>> {
        Ok(active_turfs(self.list_turfs().await?))
    }

    pub async fn turf_detail(&self, id: i64) -> Result<Turf> {
        let envelope: ItemEnvelope<TurfDto> = self.api.get_json(Endpoint::TurfDetail(id), &[]).await?;
        Ok(Turf::from_dto(envelope.into_item()))
    }

    /// Files a listing-change request; edits are applied after review, never
    /// directly by the client.
    pub async fn request_update(&self, id: i64, updates: serde_json::Value) -> Result<()> {
        let body = TurfUpdateRequest { updates };
        let _: serde_json::Value = self.api.post_json(Endpoint::TurfRequestUpdate(id), &body).await?;
        Ok(())
    }
}
