use std::sync::Arc;

use chrono::NaiveDate;

use crate::client::api_client::ApiClient;
use crate::client::booking_service::HttpBookingGateway;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::session::OfflineBookingSession;

pub mod api;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod logger;
pub mod session;

/// Wires up an offline-booking session against the configured backend.
pub fn start_offline_booking(config: &ClientConfig, booking_date: NaiveDate) -> Result<OfflineBookingSession> {
    logger::init();
    log::info!("Logger initialized. Starting offline-booking session.");

    let api = Arc::new(ApiClient::new(config)?);
    let gateway = Arc::new(HttpBookingGateway::new(api));

    Ok(OfflineBookingSession::new(gateway, booking_date))
}
