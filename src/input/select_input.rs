use crate::input::{Input, InputBase, InputCaps, KeyResult, NodeId};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::validators::Validator;

/// One selectable choice: the machine value stored in the form and the
/// Persian label shown to the user.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

pub struct SelectInput {
    base: InputBase,
    options: Vec<SelectOption>,
    selected: usize,
}

impl SelectInput {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self {
            base: InputBase::new(id, label),
            options,
            selected: 0,
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.base = self.base.with_validator(validator);
        self
    }

    pub fn with_selected(mut self, value: &str) -> Self {
        if let Some(pos) = self.options.iter().position(|opt| opt.value == value) {
            self.selected = pos;
        }
        self
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.options.get(self.selected).map(|o| o.label.as_str())
    }

    fn move_prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let len = self.options.len();
        self.selected = (self.selected + len - 1) % len;
    }

    fn move_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.options.len();
    }
}

impl Input for SelectInput {
    fn id(&self) -> &NodeId {
        &self.base.id
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> String {
        self.options
            .get(self.selected)
            .map(|o| o.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&mut self, value: String) {
        if let Some(pos) = self.options.iter().position(|opt| opt.value == value) {
            self.selected = pos;
        }
    }

    fn is_complete(&self) -> bool {
        !self.options.is_empty()
    }

    fn capabilities(&self) -> InputCaps {
        InputCaps {
            capture_up_down: false,
            ..InputCaps::default()
        }
    }

    fn is_focused(&self) -> bool {
        self.base.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.focused = focused;
    }

    fn error(&self) -> Option<&str> {
        self.base.error.as_deref()
    }

    fn set_error(&mut self, error: Option<String>) {
        self.base.error = error;
    }

    fn min_width(&self) -> usize {
        self.base.min_width
    }

    fn validators(&self) -> &[Validator] {
        &self.base.validators
    }

    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Left => {
                self.move_prev();
                KeyResult::Handled
            }
            KeyCode::Right => {
                self.move_next();
                KeyResult::Handled
            }
            KeyCode::Char(' ') => {
                self.move_next();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self) -> Vec<Span> {
        let mut spans = Vec::new();
        for (i, option) in self.options.iter().enumerate() {
            if i > 0 {
                spans.push(Span::new("  "));
            }
            let style = if i == self.selected {
                let mut style = Style::new().with_color(Color::Magenta).with_bold();
                if self.base.focused {
                    style = style.with_underline();
                }
                style
            } else {
                Style::new().with_dim()
            };
            let marker = if i == self.selected { "●" } else { "○" };
            spans.push(Span::styled(format!("{} {}", marker, option.label), style));
        }
        spans
    }
}
