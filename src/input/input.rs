use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::{Span, SpanLine};
use crate::validators::Validator;

pub type NodeId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Handled,
    NotHandled,
    Submit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputCaps {
    pub capture_tab: bool,
    pub capture_backtab: bool,
    pub capture_up_down: bool,
}

impl InputCaps {
    pub fn captures_key(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match (code, modifiers) {
            (KeyCode::Tab, mods) if mods == KeyModifiers::NONE => self.capture_tab,
            (KeyCode::BackTab, mods) if mods.contains(KeyModifiers::SHIFT) => self.capture_backtab,
            (KeyCode::Up | KeyCode::Down, mods) if mods == KeyModifiers::NONE => {
                self.capture_up_down
            }
            _ => false,
        }
    }
}

pub trait Input: Send {
    fn id(&self) -> &NodeId;
    fn label(&self) -> &str;
    fn value(&self) -> String;
    fn set_value(&mut self, value: String);
    fn raw_value(&self) -> String {
        self.value()
    }
    fn is_complete(&self) -> bool {
        true
    }
    fn capabilities(&self) -> InputCaps {
        InputCaps::default()
    }

    fn is_focused(&self) -> bool;
    fn set_focused(&mut self, focused: bool);

    fn error(&self) -> Option<&str>;
    fn set_error(&mut self, error: Option<String>);

    fn min_width(&self) -> usize;

    fn validators(&self) -> &[Validator];

    fn validate(&self) -> Result<(), String> {
        for validator in self.validators() {
            validator(&self.value())?;
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult;

    /// Content of the single trigger/value line rendered after the label.
    fn render_content(&self) -> Vec<Span>;

    /// Lines rendered beneath the trigger line. Single-line inputs leave
    /// this empty; the date picker uses it for the open calendar.
    fn render_lines(&self) -> Vec<SpanLine> {
        Vec::new()
    }

    /// Column of the text cursor inside the content, if one should be shown.
    fn cursor_offset_in_content(&self) -> Option<usize> {
        None
    }
}

pub struct InputBase {
    pub id: NodeId,
    pub label: String,
    pub focused: bool,
    pub error: Option<String>,
    pub validators: Vec<Validator>,
    pub min_width: usize,
}

impl InputBase {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            focused: false,
            error: None,
            validators: Vec::new(),
            min_width: 1,
        }
    }

    pub fn with_min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }
}
