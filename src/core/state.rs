use crate::booking::BookingDetails;
use crate::core::event::FormEvent;
use crate::core::flow::Flow;
use crate::core::form_engine::FormEngine;

pub struct AppState {
    pub flow: Flow,
    pub engine: FormEngine,
    pub should_exit: bool,
    pub booking: Option<BookingDetails>,
}

impl AppState {
    pub fn new(flow: Flow) -> Self {
        let mut state = Self {
            flow,
            engine: FormEngine::new(),
            should_exit: false,
            booking: None,
        };
        state.reset_engine_for_current_step();
        state
    }

    /// Points the engine at the nodes of the (new) current step and
    /// focuses its first input.
    pub fn reset_engine_for_current_step(&mut self) -> Vec<FormEvent> {
        self.engine = FormEngine::new();
        if self.flow.is_empty() {
            return Vec::new();
        }
        self.engine
            .focus_first(&mut self.flow.current_step_mut().nodes)
    }
}
