pub mod date_picker;
pub mod jalaali;
pub mod month_view;

pub use date_picker::DatePickerInput;
pub use jalaali::{GregorianDate, JalaaliDate};
pub use month_view::MonthView;
