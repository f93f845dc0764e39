use crate::input::{Input, InputBase, KeyResult, NodeId};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;
use crate::validators::Validator;
use unicode_width::UnicodeWidthStr;

pub struct TextInput {
    base: InputBase,
    value: String,
    cursor_pos: usize,
    placeholder: Option<String>,
}

impl TextInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, label),
            value: String::new(),
            cursor_pos: 0,
            placeholder: None,
        }
    }

    pub fn with_min_width(mut self, width: usize) -> Self {
        self.base = self.base.with_min_width(width);
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.base = self.base.with_validator(validator);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    fn byte_pos(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert_char(&mut self, ch: char) {
        let at = self.byte_pos(self.cursor_pos);
        self.value.insert(at, ch);
        self.cursor_pos += 1;
    }

    fn backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let at = self.byte_pos(self.cursor_pos - 1);
        self.value.remove(at);
        self.cursor_pos -= 1;
    }

    fn delete_forward(&mut self) {
        if self.cursor_pos < self.value.chars().count() {
            let at = self.byte_pos(self.cursor_pos);
            self.value.remove(at);
        }
    }
}

impl Input for TextInput {
    fn id(&self) -> &NodeId {
        &self.base.id
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.cursor_pos = value.chars().count();
        self.value = value;
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
            KeyCode::Char(ch) => {
                self.insert_char(ch);
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                self.backspace();
                KeyResult::Handled
            }
            KeyCode::Delete => {
                self.delete_forward();
                KeyResult::Handled
            }
            KeyCode::Left => {
                if self.cursor_pos > 0 {
                    self.cursor_pos -= 1;
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
            KeyCode::Right => {
                if self.cursor_pos < self.value.chars().count() {
                    self.cursor_pos += 1;
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.cursor_pos = self.value.chars().count();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self) -> Vec<Span> {
        let theme = Theme::default_theme();
        let mut spans = Vec::new();

        if self.value.is_empty() {
            if let Some(placeholder) = &self.placeholder {
                spans.push(Span::styled(placeholder.clone(), theme.placeholder));
            }
        } else {
            spans.push(Span::new(self.value.clone()));
        }

        let content_width = self.value.width();
        if content_width < self.base.min_width {
            spans.push(Span::new(" ".repeat(self.base.min_width - content_width)));
        }

        spans
    }

    fn cursor_offset_in_content(&self) -> Option<usize> {
        let prefix: String = self.value.chars().take(self.cursor_pos).collect();
        Some(prefix.width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut TextInput, code: KeyCode) -> KeyResult {
        input.handle_key(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_and_editing() {
        let mut input = TextInput::new("name", "نام");
        for ch in "سارا".chars() {
            press(&mut input, KeyCode::Char(ch));
        }
        assert_eq!(input.value(), "سارا");

        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.value(), "سار");

        press(&mut input, KeyCode::Home);
        press(&mut input, KeyCode::Delete);
        assert_eq!(input.value(), "ار");
    }

    #[test]
    fn enter_requests_submit() {
        let mut input = TextInput::new("name", "نام");
        assert_eq!(press(&mut input, KeyCode::Enter), KeyResult::Submit);
    }

    #[test]
    fn cursor_moves_within_bounds() {
        let mut input = TextInput::new("name", "نام");
        assert_eq!(press(&mut input, KeyCode::Left), KeyResult::NotHandled);
        press(&mut input, KeyCode::Char('a'));
        assert_eq!(press(&mut input, KeyCode::Left), KeyResult::Handled);
        assert_eq!(press(&mut input, KeyCode::Right), KeyResult::Handled);
        assert_eq!(press(&mut input, KeyCode::Right), KeyResult::NotHandled);
    }
}
