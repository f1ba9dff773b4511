pub mod api_client;
pub mod auth_service;
pub mod booking_service;
pub mod dashboard_service;
pub mod endpoint;
pub mod gateway;
pub mod payout_service;
pub mod slot_service;
pub mod turf_service;
