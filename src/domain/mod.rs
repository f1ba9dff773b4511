pub mod booking;
pub mod catalog;
pub mod dashboard;
pub mod payout;
pub mod selection;
pub mod slot;
pub mod turf;

mod selection_tests;
