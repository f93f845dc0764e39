use crate::core::event::FormEvent;
use crate::core::node::Node;
use crate::core::validation::validate_input;
use crate::input::{Input, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};

/// Focus and key routing over the nodes of the active step. The engine
/// does not own the nodes; every call borrows the step's slice so the
/// flow stays the single owner of form state.
pub struct FormEngine {
    focus: Option<usize>,
}

impl FormEngine {
    pub fn new() -> Self {
        Self { focus: None }
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focus
    }

    pub fn focus_first(&mut self, nodes: &mut [Node]) -> Vec<FormEvent> {
        self.set_focus(nodes, if nodes.is_empty() { None } else { Some(0) })
    }

    pub fn focus_by_id(&mut self, nodes: &mut [Node], id: &str) -> Vec<FormEvent> {
        match find_index_by_id(nodes, id) {
            Some(index) => self.set_focus(nodes, Some(index)),
            None => Vec::new(),
        }
    }

    pub fn clear_focus(&mut self, nodes: &mut [Node]) -> Vec<FormEvent> {
        self.set_focus(nodes, None)
    }

    /// Moves focus forward or backward, validating the input being left.
    /// A failing input keeps the error stored but still yields focus, so
    /// the user can fill the fields in any order.
    pub fn move_focus(&mut self, nodes: &mut [Node], forward: bool) -> Vec<FormEvent> {
        if nodes.is_empty() {
            return Vec::new();
        }

        let mut events = Vec::new();
        if let Some(current) = self.focus {
            let input = nodes[current].as_input_mut();
            if let Err(message) = validate_input(input) {
                input.set_error(Some(message));
                events.push(FormEvent::ErrorShown {
                    id: input.id().clone(),
                });
            } else if input.error().is_some() {
                input.set_error(None);
                events.push(FormEvent::ErrorCancelled {
                    id: input.id().clone(),
                });
            }
        }

        let next = match self.focus {
            Some(current) if forward => (current + 1) % nodes.len(),
            Some(current) => (current + nodes.len() - 1) % nodes.len(),
            None if forward => 0,
            None => nodes.len() - 1,
        };
        events.extend(self.set_focus(nodes, Some(next)));
        events
    }

    /// Advances focus to the next input of the step, or reports that the
    /// last input was left behind by returning false.
    pub fn advance_focus(&mut self, nodes: &mut [Node]) -> (bool, Vec<FormEvent>) {
        let Some(current) = self.focus else {
            return (false, Vec::new());
        };
        if current + 1 >= nodes.len() {
            return (false, Vec::new());
        }
        (true, self.set_focus(nodes, Some(current + 1)))
    }

    /// Routes a key to the focused input and maps the outcome to form
    /// events. A value-changing key clears the input's standing error.
    pub fn handle_key(
        &mut self,
        nodes: &mut [Node],
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Vec<FormEvent> {
        let Some(index) = self.focus else {
            return Vec::new();
        };

        let input = nodes[index].as_input_mut();
        let before = input.raw_value();
        let result = input.handle_key(code, modifiers);
        let mut events = Vec::new();

        if input.raw_value() != before {
            if input.error().is_some() {
                input.set_error(None);
                events.push(FormEvent::ErrorCancelled {
                    id: input.id().clone(),
                });
            }
            events.push(FormEvent::InputChanged {
                id: input.id().clone(),
                value: input.raw_value(),
            });
        }

        if result == KeyResult::Submit {
            events.push(FormEvent::SubmitRequested);
        }
        events
    }

    pub fn validate_focused(&self, nodes: &mut [Node]) -> Result<(), (String, String)> {
        let Some(index) = self.focus else {
            return Ok(());
        };
        let input = nodes[index].as_input();
        validate_input(input).map_err(|message| (input.id().clone(), message))
    }

    pub fn apply_errors(&self, nodes: &mut [Node], errors: &[(String, String)]) {
        for (id, message) in errors {
            if let Some(index) = find_index_by_id(nodes, id) {
                nodes[index].as_input_mut().set_error(Some(message.clone()));
            }
        }
    }

    pub fn clear_error(&self, nodes: &mut [Node], id: &str) {
        if let Some(index) = find_index_by_id(nodes, id) {
            nodes[index].as_input_mut().set_error(None);
        }
    }

    fn set_focus(&mut self, nodes: &mut [Node], next: Option<usize>) -> Vec<FormEvent> {
        if self.focus == next {
            return Vec::new();
        }

        let from = self
            .focus
            .map(|index| nodes[index].as_input().id().clone());
        if let Some(index) = self.focus {
            nodes[index].as_input_mut().set_focused(false);
        }
        if let Some(index) = next {
            nodes[index].as_input_mut().set_focused(true);
        }
        self.focus = next;

        vec![FormEvent::FocusChanged {
            from,
            to: next.map(|index| nodes[index].as_input().id().clone()),
        }]
    }
}

impl Default for FormEngine {
    fn default() -> Self {
        Self::new()
    }
}

pub fn find_index_by_id(nodes: &[Node], id: &str) -> Option<usize> {
    nodes.iter().position(|node| node.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TextInput;
    use crate::validators;

    fn contact_nodes() -> Vec<Node> {
        vec![
            Node::input(
                TextInput::new("name", "نام")
                    .with_validator(validators::required("نام را وارد کنید")),
            ),
            Node::input(TextInput::new("city", "شهر")),
        ]
    }

    #[test]
    fn focus_first_marks_input_focused() {
        let mut nodes = contact_nodes();
        let mut engine = FormEngine::new();
        let events = engine.focus_first(&mut nodes);

        assert_eq!(engine.focused_index(), Some(0));
        assert!(nodes[0].as_input().is_focused());
        assert!(matches!(
            events.as_slice(),
            [FormEvent::FocusChanged { from: None, to: Some(id) }] if id == "name"
        ));
    }

    #[test]
    fn leaving_an_invalid_input_stores_its_error() {
        let mut nodes = contact_nodes();
        let mut engine = FormEngine::new();
        engine.focus_first(&mut nodes);

        engine.move_focus(&mut nodes, true);
        assert_eq!(engine.focused_index(), Some(1));
        assert_eq!(nodes[0].as_input().error(), Some("نام را وارد کنید"));
    }

    #[test]
    fn focus_wraps_both_directions() {
        let mut nodes = contact_nodes();
        let mut engine = FormEngine::new();
        engine.focus_first(&mut nodes);

        engine.move_focus(&mut nodes, false);
        assert_eq!(engine.focused_index(), Some(1));
        engine.move_focus(&mut nodes, true);
        assert_eq!(engine.focused_index(), Some(0));
    }

    #[test]
    fn typing_emits_change_and_clears_error() {
        let mut nodes = contact_nodes();
        let mut engine = FormEngine::new();
        engine.focus_first(&mut nodes);
        nodes[0]
            .as_input_mut()
            .set_error(Some("نام را وارد کنید".to_string()));

        let events = engine.handle_key(&mut nodes, KeyCode::Char('س'), KeyModifiers::NONE);
        assert!(nodes[0].as_input().error().is_none());
        assert!(matches!(events[0], FormEvent::ErrorCancelled { .. }));
        assert!(matches!(
            &events[1],
            FormEvent::InputChanged { id, value } if id == "name" && value == "س"
        ));
    }

    #[test]
    fn enter_requests_submit() {
        let mut nodes = contact_nodes();
        let mut engine = FormEngine::new();
        engine.focus_first(&mut nodes);

        let events = engine.handle_key(&mut nodes, KeyCode::Enter, KeyModifiers::NONE);
        assert!(matches!(events.last(), Some(FormEvent::SubmitRequested)));
    }

    #[test]
    fn advance_focus_stops_after_last_input() {
        let mut nodes = contact_nodes();
        let mut engine = FormEngine::new();
        engine.focus_first(&mut nodes);

        let (moved, _) = engine.advance_focus(&mut nodes);
        assert!(moved);
        let (moved, _) = engine.advance_focus(&mut nodes);
        assert!(!moved);
    }
}
