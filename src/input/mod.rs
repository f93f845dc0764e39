pub mod input;
pub mod select_input;
pub mod text_input;
pub mod time_input;
pub mod validators;

pub use input::{Input, InputBase, InputCaps, KeyResult, NodeId};
pub use select_input::{SelectInput, SelectOption};
pub use text_input::TextInput;
pub use time_input::TimeInput;
