use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub prompt: Style,
    pub hint: Style,
    pub error: Style,
    pub placeholder: Style,
    pub focused: Style,
    pub step_done: Style,
    pub calendar_header: Style,
    pub calendar_weekday: Style,
    pub calendar_today: Style,
    pub calendar_selected: Style,
    pub calendar_disabled: Style,
    pub calendar_cursor: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            prompt: Style::new().with_bold(),
            hint: Style::new().with_color(Color::DarkGrey),
            error: Style::new().with_color(Color::Red).with_bold(),
            placeholder: Style::new().with_color(Color::DarkGrey),
            focused: Style::new().with_bold(),
            step_done: Style::new().with_color(Color::Green),
            calendar_header: Style::new().with_color(Color::Cyan).with_bold(),
            calendar_weekday: Style::new().with_color(Color::DarkGrey),
            calendar_today: Style::new().with_color(Color::Yellow).with_bold(),
            calendar_selected: Style::new()
                .with_color(Color::Black)
                .with_background(Color::Magenta),
            calendar_disabled: Style::new().with_dim(),
            calendar_cursor: Style::new().with_reverse(),
        }
    }
}
