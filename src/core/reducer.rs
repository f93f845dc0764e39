use crate::booking::BookingDetails;
use crate::core::event::{Action, FormEvent};
use crate::core::event_queue::AppEvent;
use crate::core::state::AppState;
use crate::core::validation::validate_all_inputs;
use crate::terminal::KeyEvent;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Effect {
    Emit(AppEvent),
    EmitAfter(AppEvent, Duration),
    CancelClearError(String),
}

/// Applies an action to the app state and returns the effects the app
/// should feed back into its event queue.
pub struct Reducer {
    error_timeout: Duration,
}

impl Reducer {
    pub fn new(error_timeout: Duration) -> Self {
        Self { error_timeout }
    }

    pub fn reduce(&self, state: &mut AppState, action: Action) -> Vec<Effect> {
        match action {
            Action::Exit => {
                state.should_exit = true;
                Vec::new()
            }
            Action::InputKey(key) => self.handle_input_key(state, key),
            Action::NextInput => self.handle_move_focus(state, true),
            Action::PrevInput => self.handle_move_focus(state, false),
            Action::Submit => self.handle_submit(state),
            Action::ClearErrorMessage(id) => {
                state
                    .engine
                    .clear_error(&mut state.flow.current_step_mut().nodes, &id);
                Vec::new()
            }
        }
    }

    fn handle_input_key(&self, state: &mut AppState, key: KeyEvent) -> Vec<Effect> {
        let events = state
            .engine
            .handle_key(&mut state.flow.current_step_mut().nodes, key.code, key.modifiers);

        let mut effects = Vec::new();
        let mut submit = false;
        for event in events {
            if matches!(event, FormEvent::SubmitRequested) {
                submit = true;
            } else {
                effects.extend(self.form_event_effects(event));
            }
        }
        if submit {
            effects.extend(self.handle_submit(state));
        }
        effects
    }

    fn handle_move_focus(&self, state: &mut AppState, forward: bool) -> Vec<Effect> {
        let events = state
            .engine
            .move_focus(&mut state.flow.current_step_mut().nodes, forward);
        events
            .into_iter()
            .flat_map(|event| self.form_event_effects(event))
            .collect()
    }

    /// The submit chain: a valid focused input first yields focus to the
    /// next input of the step, then a fully valid step advances the flow,
    /// and the final step completes the booking.
    fn handle_submit(&self, state: &mut AppState) -> Vec<Effect> {
        if let Err((id, message)) = state
            .engine
            .validate_focused(&mut state.flow.current_step_mut().nodes)
        {
            let nodes = &mut state.flow.current_step_mut().nodes;
            state.engine.apply_errors(nodes, &[(id.clone(), message)]);
            return self.error_shown_effects(&id);
        }

        let (moved, events) = state
            .engine
            .advance_focus(&mut state.flow.current_step_mut().nodes);
        if moved {
            return events
                .into_iter()
                .flat_map(|event| self.form_event_effects(event))
                .collect();
        }

        let errors = validate_all_inputs(state.flow.current_step());
        if !errors.is_empty() {
            let first_id = errors[0].0.clone();
            let nodes = &mut state.flow.current_step_mut().nodes;
            state.engine.apply_errors(nodes, &errors);

            let mut effects: Vec<Effect> = errors
                .iter()
                .flat_map(|(id, _)| self.error_shown_effects(id))
                .collect();
            let focus_events = state
                .engine
                .focus_by_id(&mut state.flow.current_step_mut().nodes, &first_id);
            effects.extend(
                focus_events
                    .into_iter()
                    .flat_map(|event| self.form_event_effects(event)),
            );
            return effects;
        }

        if state.flow.has_next() {
            let mut effects: Vec<Effect> = state
                .engine
                .clear_focus(&mut state.flow.current_step_mut().nodes)
                .into_iter()
                .flat_map(|event| self.form_event_effects(event))
                .collect();
            state.flow.advance();
            effects.extend(
                state
                    .reset_engine_for_current_step()
                    .into_iter()
                    .flat_map(|event| self.form_event_effects(event)),
            );
            return effects;
        }

        state
            .engine
            .clear_focus(&mut state.flow.current_step_mut().nodes);
        state.flow.mark_done();
        state.booking = BookingDetails::from_values(&state.flow.collect_values());
        state.should_exit = true;
        vec![Effect::Emit(AppEvent::Submitted)]
    }

    fn form_event_effects(&self, event: FormEvent) -> Vec<Effect> {
        match event {
            FormEvent::InputChanged { id, value } => {
                vec![Effect::Emit(AppEvent::InputChanged { id, value })]
            }
            FormEvent::FocusChanged { from, to } => {
                vec![Effect::Emit(AppEvent::FocusChanged { from, to })]
            }
            FormEvent::ErrorShown { id } => self.error_shown_effects(&id),
            FormEvent::ErrorCancelled { id } => vec![Effect::CancelClearError(id)],
            FormEvent::SubmitRequested => Vec::new(),
        }
    }

    fn error_shown_effects(&self, id: &str) -> Vec<Effect> {
        vec![
            Effect::CancelClearError(id.to_string()),
            Effect::EmitAfter(
                AppEvent::Action(Action::ClearErrorMessage(id.to_string())),
                self.error_timeout,
            ),
        ]
    }
}
