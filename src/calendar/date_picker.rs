use crate::calendar::jalaali::{self, GregorianDate, WEEKDAY_ABBREVS, to_jalaali};
use crate::calendar::month_view::MonthView;
use crate::input::{Input, InputBase, InputCaps, KeyResult, NodeId};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;
use crate::validators::Validator;

/// Date picker for wizard forms: a trigger line showing the committed
/// selection, with a Jalaali month calendar expanded beneath it while open.
///
/// Enter opens the calendar; arrows move the day cursor, PageUp/PageDown
/// (or `[`/`]`) change month, Enter commits the cursor day and closes, Esc
/// closes without committing. The committed value is always a Gregorian
/// date; everything Jalaali is presentation.
pub struct DatePickerInput {
    base: InputBase,
    today: GregorianDate,
    min_date: Option<GregorianDate>,
    selected: Option<GregorianDate>,
    view: Option<MonthView>,
    placeholder: String,
}

impl DatePickerInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>, today: GregorianDate) -> Self {
        Self {
            base: InputBase::new(id, label),
            today,
            min_date: None,
            selected: None,
            view: None,
            placeholder: "انتخاب تاریخ".to_string(),
        }
    }

    /// Earliest selectable date, forwarded unchanged to the month view.
    pub fn with_min_date(mut self, min_date: GregorianDate) -> Self {
        self.min_date = Some(min_date);
        self
    }

    pub fn with_selected(mut self, selected: GregorianDate) -> Self {
        self.selected = Some(selected);
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.base = self.base.with_validator(validator);
        self
    }

    pub fn selected_date(&self) -> Option<GregorianDate> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.view.is_some()
    }

    fn open(&mut self) {
        self.view = Some(MonthView::new(self.today, self.selected, self.min_date));
    }

    fn close(&mut self) {
        self.view = None;
    }

    fn commit_cursor_day(&mut self) -> bool {
        let Some(view) = &self.view else {
            return false;
        };
        match view.select(view.cursor_day()) {
            Some(date) => {
                self.selected = Some(date);
                self.close();
                true
            }
            // Disabled day: suppressed, the calendar stays open.
            None => false,
        }
    }

    fn trigger_label(&self) -> String {
        match self.selected {
            Some(date) => jalaali::format_jalaali(to_jalaali(date)),
            None => self.placeholder.clone(),
        }
    }
}

impl Input for DatePickerInput {
    fn id(&self) -> &NodeId {
        &self.base.id
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> String {
        self.selected.map(|d| d.to_string()).unwrap_or_default()
    }

    fn set_value(&mut self, value: String) {
        let mut parts = value.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return;
        };
        let (Ok(year), Ok(month), Ok(day)) =
            (y.parse::<i32>(), m.parse::<u8>(), d.parse::<u8>())
        else {
            return;
        };
        if (1..=12).contains(&month) && (1..=31).contains(&day) {
            self.selected = Some(GregorianDate::new(year, month, day));
        }
    }

    fn is_complete(&self) -> bool {
        self.selected.is_some()
    }

    fn capabilities(&self) -> InputCaps {
        InputCaps {
            capture_up_down: self.is_open(),
            ..InputCaps::default()
        }
    }

    fn is_focused(&self) -> bool {
        self.base.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.focused = focused;
        if !focused {
            // Leaving the field abandons any in-progress navigation.
            self.close();
        }
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
        let Some(view) = &mut self.view else {
            return match code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.open();
                    KeyResult::Handled
                }
                _ => KeyResult::NotHandled,
            };
        };

        match code {
            KeyCode::Left => {
                view.move_cursor(1);
                KeyResult::Handled
            }
            KeyCode::Right => {
                view.move_cursor(-1);
                KeyResult::Handled
            }
            KeyCode::Up => {
                view.move_cursor(-7);
                KeyResult::Handled
            }
            KeyCode::Down => {
                view.move_cursor(7);
                KeyResult::Handled
            }
            KeyCode::PageUp | KeyCode::Char('[') => {
                view.prev_month();
                KeyResult::Handled
            }
            KeyCode::PageDown | KeyCode::Char(']') => {
                view.next_month();
                KeyResult::Handled
            }
            KeyCode::Enter => {
                self.commit_cursor_day();
                KeyResult::Handled
            }
            KeyCode::Esc => {
                self.close();
                KeyResult::Handled
            }
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self) -> Vec<Span> {
        let theme = Theme::default_theme();
        let style = if self.selected.is_some() {
            theme.focused
        } else {
            theme.placeholder
        };
        let marker = if self.is_open() { "▾" } else { "▸" };
        vec![
            Span::styled(self.trigger_label(), style),
            Span::new(format!(" {}", marker)),
        ]
    }

    fn render_lines(&self) -> Vec<SpanLine> {
        let Some(view) = &self.view else {
            return Vec::new();
        };
        let theme = Theme::default_theme();
        let mut lines = Vec::new();

        // RTL presentation: the "later month" arrow points left.
        lines.push(vec![Span::styled(
            format!("  ‹ {} ›", view.title()),
            theme.calendar_header,
        )]);

        let mut header = vec![Span::new("  ")];
        for abbrev in WEEKDAY_ABBREVS {
            header.push(Span::styled(format!("{:>3}", abbrev), theme.calendar_weekday));
        }
        lines.push(header);

        let mut row: SpanLine = vec![Span::new("  ")];
        let mut col = 0usize;
        for cell in view.grid() {
            match cell {
                None => row.push(Span::new("   ")),
                Some(day) => {
                    let mut style = if view.is_selected(day) {
                        theme.calendar_selected
                    } else if view.is_today(day) {
                        theme.calendar_today
                    } else if view.is_disabled(day) {
                        theme.calendar_disabled
                    } else {
                        crate::ui::style::Style::default()
                    };
                    if day == view.cursor_day() {
                        style = style.merge(&theme.calendar_cursor);
                    }
                    row.push(Span::styled(format!("{:>3}", day), style));
                }
            }
            col += 1;
            if col == 7 {
                lines.push(std::mem::replace(&mut row, vec![Span::new("  ")]));
                col = 0;
            }
        }
        if row.len() > 1 {
            lines.push(row);
        }

        lines
    }
}
