use serde::{Deserialize, Serialize};

use crate::api::opt_decimal;

#[derive(Debug, Clone, Deserialize)]
pub struct TurfDto {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub sport_type: Option<String>,
    pub size: Option<String>,

    /// Listing status; `"suspended"` turfs are not bookable.
    #[serde(default)]
    pub status: String,

    /// Uniform hourly price; the fallback when a slot has no price of its own.
    #[serde(default, deserialize_with = "opt_decimal")]
    pub uniform_price: Option<f64>,
}

/// Body of `POST /turfs/{id}/request-update`. Edits go through an approval
/// queue server-side, so the client only ships the requested field changes.
#[derive(Debug, Clone, Serialize)]
pub struct TurfUpdateRequest {
    pub updates: serde_json::Value,
}
