use std::sync::Arc;

use crate::api::envelope::{ItemEnvelope, ListEnvelope};
use crate::api::payout_dto::PayoutDto;
use crate::client::api_client::ApiClient;
use crate::client::endpoint::Endpoint;
use crate::domain::payout::Payout;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct PayoutService {
    api: Arc<ApiClient>,
}

impl PayoutService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        PayoutService { api }
    }

    pub async fn list_payouts(&self) -> Result<Vec<Payout>> {
        let envelope: ListEnvelope<PayoutDto> = self.api.get_json(Endpoint::Payouts, &[]).await?;
        Ok(envelope.into_items().into_iter().map(Payout::from_dto).collect())
    }

    pub async fn payout_detail(&self, id: i64) -> Result<Payout> {
        let envelope: ItemEnvelope<PayoutDto> = self.api.get_json(Endpoint::PayoutDetail(id), &[]).await?;
        Ok(Payout::from_dto(envelope.into_item()))
    }
}
