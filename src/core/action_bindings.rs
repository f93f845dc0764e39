use crate::core::event::Action;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: Action,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers, action: Action) -> Self {
        Self {
            code,
            modifiers,
            action,
        }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.code == key.code && self.modifiers == key.modifiers
    }
}

pub struct ActionBindings {
    bindings: Vec<KeyBinding>,
}

impl ActionBindings {
    pub fn standard() -> Self {
        Self {
            bindings: vec![
                KeyBinding::new(KeyCode::Char('c'), KeyModifiers::CONTROL, Action::Exit),
                KeyBinding::new(KeyCode::Tab, KeyModifiers::NONE, Action::NextInput),
                KeyBinding::new(KeyCode::BackTab, KeyModifiers::SHIFT, Action::PrevInput),
            ],
        }
    }

    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|binding| binding.matches(key))
            .map(|binding| binding.action.clone())
    }
}
