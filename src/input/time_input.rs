use crate::input::{Input, InputBase, InputCaps, KeyResult, NodeId};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::style::Style;
use crate::ui::theme::Theme;
use crate::validators::Validator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentKind {
    Hour,
    Minute,
}

impl SegmentKind {
    fn max_value(self) -> u32 {
        match self {
            SegmentKind::Hour => 23,
            SegmentKind::Minute => 59,
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            SegmentKind::Hour => "hh",
            SegmentKind::Minute => "mm",
        }
    }
}

#[derive(Debug, Clone)]
struct TimeSegment {
    kind: SegmentKind,
    value: String,
}

impl TimeSegment {
    fn new(kind: SegmentKind) -> Self {
        Self {
            kind,
            value: String::new(),
        }
    }

    fn preset(kind: SegmentKind, value: u32) -> Self {
        Self {
            kind,
            value: format!("{:02}", value.min(kind.max_value())),
        }
    }

    fn is_complete(&self) -> bool {
        self.value.len() == 2
    }

    fn numeric_value(&self) -> u32 {
        self.value.parse().unwrap_or(0)
    }

    fn increment(&mut self) {
        let next = if self.numeric_value() >= self.kind.max_value() {
            0
        } else {
            self.numeric_value() + 1
        };
        self.value = format!("{:02}", next);
    }

    fn decrement(&mut self) {
        let prev = if self.value.is_empty() || self.numeric_value() == 0 {
            self.kind.max_value()
        } else {
            self.numeric_value() - 1
        };
        self.value = format!("{:02}", prev);
    }

    fn insert_digit(&mut self, digit: char) {
        if self.value.len() >= 2 {
            self.value = digit.to_string();
        } else {
            self.value.push(digit);
        }
        if self.numeric_value() > self.kind.max_value() {
            self.value = digit.to_string();
        }
    }

    fn delete_digit(&mut self) {
        self.value.pop();
    }

    fn normalize(&mut self) {
        if self.value.len() == 1 {
            self.value = format!("{:02}", self.numeric_value());
        }
    }

    fn display_string(&self) -> String {
        match self.value.len() {
            0 => self.kind.placeholder().to_string(),
            1 => format!("{}{}", self.value, &self.kind.placeholder()[1..]),
            _ => self.value.clone(),
        }
    }
}

/// Segmented 24-hour `HH:mm` input: digits fill the focused segment,
/// Up/Down spin it, Left/Right (or `:`) hop between segments.
pub struct TimeInput {
    base: InputBase,
    segments: [TimeSegment; 2],
    focused_segment: usize,
}

impl TimeInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, label),
            segments: [
                TimeSegment::new(SegmentKind::Hour),
                TimeSegment::new(SegmentKind::Minute),
            ],
            focused_segment: 0,
        }
    }

    pub fn with_default(mut self, hour: u32, minute: u32) -> Self {
        self.segments = [
            TimeSegment::preset(SegmentKind::Hour, hour),
            TimeSegment::preset(SegmentKind::Minute, minute),
        ];
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.base = self.base.with_validator(validator);
        self
    }

    fn focused_segment_mut(&mut self) -> &mut TimeSegment {
        &mut self.segments[self.focused_segment]
    }

    fn move_next(&mut self) -> bool {
        self.focused_segment_mut().normalize();
        if self.focused_segment + 1 < self.segments.len() {
            self.focused_segment += 1;
            true
        } else {
            false
        }
    }

    fn move_prev(&mut self) -> bool {
        if self.focused_segment > 0 {
            self.focused_segment -= 1;
            true
        } else {
            false
        }
    }
}

impl Input for TimeInput {
    fn id(&self) -> &NodeId {
        &self.base.id
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> String {
        if self.is_complete() {
            format!("{}:{}", self.segments[0].value, self.segments[1].value)
        } else {
            String::new()
        }
    }

    fn set_value(&mut self, value: String) {
        let Some((hour, minute)) = value.split_once(':') else {
            return;
        };
        let ok = |s: &str, max: u32| s.len() == 2 && s.parse::<u32>().is_ok_and(|v| v <= max);
        if ok(hour, 23) && ok(minute, 59) {
            self.segments[0].value = hour.to_string();
            self.segments[1].value = minute.to_string();
        }
    }

    fn raw_value(&self) -> String {
        if self.segments.iter().all(|s| s.value.is_empty()) {
            String::new()
        } else {
            format!("{}:{}", self.segments[0].value, self.segments[1].value)
        }
    }

    fn is_complete(&self) -> bool {
        self.segments.iter().all(TimeSegment::is_complete)
    }

    fn capabilities(&self) -> InputCaps {
        InputCaps {
            capture_up_down: true,
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
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                self.focused_segment_mut().insert_digit(ch);
                if self.focused_segment_mut().is_complete() {
                    self.move_next();
                }
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                if self.focused_segment_mut().value.is_empty() {
                    self.move_prev();
                } else {
                    self.focused_segment_mut().delete_digit();
                }
                KeyResult::Handled
            }
            KeyCode::Left => {
                if self.move_prev() {
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
            KeyCode::Right | KeyCode::Char(':') => {
                if self.move_next() {
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
            KeyCode::Up => {
                self.focused_segment_mut().increment();
                KeyResult::Handled
            }
            KeyCode::Down => {
                self.focused_segment_mut().decrement();
                KeyResult::Handled
            }
            KeyCode::Enter => {
                self.focused_segment_mut().normalize();
                KeyResult::Submit
            }
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self) -> Vec<Span> {
        let theme = Theme::default_theme();
        let mut spans = Vec::new();

        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                spans.push(Span::new(":"));
            }

            let mut style = if segment.value.is_empty() {
                theme.placeholder
            } else {
                Style::default()
            };
            if i == self.focused_segment && self.base.focused {
                style = style.merge(&theme.focused).with_underline();
            }

            spans.push(Span::styled(segment.display_string(), style));
        }

        spans
    }
}
