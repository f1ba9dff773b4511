pub mod auth_dto;
pub mod booking_dto;
pub mod dashboard_dto;
pub mod envelope;
pub mod error_dto;
pub mod payout_dto;
pub mod slot_dto;
pub mod turf_dto;

mod decimal;

pub(crate) use decimal::opt_decimal;
