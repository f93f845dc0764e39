pub mod details;
pub mod notify;
pub mod pricing;

pub use details::{BookingDetails, Experience};
