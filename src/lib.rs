pub mod booking;
pub mod calendar;
pub mod core;
pub mod input;
pub mod terminal;
pub mod ui;

pub use input::validators;
pub use terminal::terminal_event;

pub use booking::{BookingDetails, Experience};
pub use calendar::{DatePickerInput, GregorianDate, JalaaliDate, MonthView};
pub use crate::core::App;
