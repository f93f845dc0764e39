use crate::booking::BookingDetails;
use crate::calendar::date_picker::DatePickerInput;
use crate::calendar::jalaali::{GregorianDate, add_days};
use crate::core::action_bindings::ActionBindings;
use crate::core::event::Action;
use crate::core::event_queue::{AppEvent, EventQueue};
use crate::core::flow::Flow;
use crate::core::node::Node;
use crate::core::reducer::{Effect, Reducer};
use crate::core::state::AppState;
use crate::core::step::Step;
use crate::input::{Input, InputCaps, SelectInput, SelectOption, TextInput, TimeInput};
use crate::terminal::KeyEvent;
use crate::ui::renderer::{RenderFrame, Renderer};
use crate::ui::theme::Theme;
use crate::validators;
use std::time::{Duration, Instant};

const ERROR_TIMEOUT: Duration = Duration::from_secs(2);

pub struct App {
    state: AppState,
    reducer: Reducer,
    bindings: ActionBindings,
    queue: EventQueue,
    renderer: Renderer,
    dirty: bool,
}

impl App {
    pub fn new(today: GregorianDate) -> Self {
        Self::with_flow(Flow::new(build_steps(today)))
    }

    pub fn with_flow(flow: Flow) -> Self {
        Self {
            state: AppState::new(flow),
            reducer: Reducer::new(ERROR_TIMEOUT),
            bindings: ActionBindings::standard(),
            queue: EventQueue::new(),
            renderer: Renderer::new(Theme::default_theme()),
            dirty: true,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.queue.emit(AppEvent::Key(key));
    }

    /// Drains every event that is due, feeding reducer effects back into
    /// the queue.
    pub fn tick(&mut self) {
        let now = Instant::now();
        while let Some(event) = self.queue.next_ready(now) {
            self.dispatch(event);
            if self.state.should_exit {
                break;
            }
        }
    }

    pub fn should_exit(&self) -> bool {
        self.state.should_exit
    }

    pub fn booking(&self) -> Option<&BookingDetails> {
        self.state.booking.as_ref()
    }

    /// True once since the last render when the frame needs redrawing.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn render(&self) -> RenderFrame {
        self.renderer.render(&self.state.flow)
    }

    fn dispatch(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => {
                let action = self.action_for(&key);
                self.apply(action);
            }
            AppEvent::Action(action) => self.apply(action),
            AppEvent::InputChanged { .. }
            | AppEvent::FocusChanged { .. }
            | AppEvent::Submitted => {
                self.dirty = true;
            }
        }
    }

    /// Global bindings resolve first unless the focused input claims the
    /// key (a capturing input keeps Tab or Up/Down for itself).
    fn action_for(&self, key: &KeyEvent) -> Action {
        if !self.focused_caps().captures_key(key.code, key.modifiers) {
            if let Some(action) = self.bindings.action_for(key) {
                return action;
            }
        }
        Action::InputKey(*key)
    }

    fn focused_caps(&self) -> InputCaps {
        self.state
            .engine
            .focused_index()
            .map(|index| {
                self.state.flow.current_step().nodes[index]
                    .as_input()
                    .capabilities()
            })
            .unwrap_or_default()
    }

    fn apply(&mut self, action: Action) {
        let effects = self.reducer.reduce(&mut self.state, action);
        self.dirty = true;
        for effect in effects {
            match effect {
                Effect::Emit(event) => self.queue.emit(event),
                Effect::EmitAfter(event, delay) => self.queue.emit_after(event, delay),
                Effect::CancelClearError(id) => self.queue.cancel_clear_error_message(&id),
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }
}

/// The booking wizard, first step to last. `today` anchors the date
/// picker; bookings start the following day.
pub fn build_steps(today: GregorianDate) -> Vec<Step> {
    vec![
        Step::new("age", "آیا بیشتر از ۲۰ سال سن دارید؟")
            .with_hint("با کلیدهای چپ و راست انتخاب و با Enter تأیید کنید")
            .with_node(Node::input(
                SelectInput::new(
                    "age_gate",
                    "پاسخ",
                    vec![
                        SelectOption::new("yes", "بله"),
                        SelectOption::new("no", "خیر"),
                    ],
                )
                .with_validator(validators::custom(
                    |value| value == "yes",
                    "این تجربه فقط برای افراد بالای ۲۰ سال است",
                )),
            )),
        Step::new("experience", "چه تجربه‌ای را انتخاب می‌کنید؟").with_node(Node::input(
            SelectInput::new(
                "experience",
                "نوع تجربه",
                vec![
                    SelectOption::new("one-way", "تجربه یک‌طرفه فانتزی"),
                    SelectOption::new("two-way", "تجربه دوطرفه فانتزی"),
                ],
            ),
        )),
        Step::new("duration", "مدت تجربه چقدر باشد؟").with_node(Node::input(
            SelectInput::new(
                "duration",
                "مدت",
                vec![
                    SelectOption::new("1", "یک ساعت"),
                    SelectOption::new("2", "دو ساعت"),
                    SelectOption::new("5", "پنج ساعت"),
                ],
            ),
        )),
        Step::new("schedule", "چه زمانی مناسب شماست؟")
            .with_hint("Enter تقویم را باز می‌کند، Tab بین تاریخ و ساعت جابه‌جا می‌شود")
            .with_node(Node::input(
                DatePickerInput::new("date", "تاریخ", today)
                    .with_min_date(add_days(today, 1))
                    .with_validator(validators::required("لطفاً تاریخ را انتخاب کنید")),
            ))
            .with_node(Node::input(
                TimeInput::new("time", "ساعت")
                    .with_default(14, 0)
                    .with_validator(validators::required("لطفاً ساعت را انتخاب کنید")),
            )),
        Step::new("contact", "اطلاعات تماس شما")
            .with_node(Node::input(
                TextInput::new("name", "نام")
                    .with_validator(validators::required("نام را وارد کنید")),
            ))
            .with_node(Node::input(
                TextInput::new("phone", "شماره موبایل")
                    .with_placeholder("09xxxxxxxxx")
                    .with_validator(validators::required("شماره موبایل را وارد کنید"))
                    .with_validator(validators::phone()),
            ))
            .with_node(Node::input(
                TextInput::new("city", "شهر")
                    .with_validator(validators::required("شهر را وارد کنید")),
            )),
    ]
}
