pub mod action_bindings;
pub mod app;
pub mod event;
pub mod event_queue;
pub mod flow;
pub mod form_engine;
pub mod node;
pub mod reducer;
pub mod state;
pub mod step;
pub mod validation;

pub use app::{App, build_steps};
pub use event::{Action, FormEvent};
pub use flow::{Flow, StepStatus};
pub use node::Node;
pub use step::Step;
