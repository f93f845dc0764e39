use crate::terminal::KeyEvent;

#[derive(Debug, Clone)]
pub enum Action {
    Exit,
    Submit,
    NextInput,
    PrevInput,
    InputKey(KeyEvent),
    ClearErrorMessage(String),
}

#[derive(Debug, Clone)]
pub enum FormEvent {
    InputChanged { id: String, value: String },
    FocusChanged { from: Option<String>, to: Option<String> },
    ErrorShown { id: String },
    ErrorCancelled { id: String },
    SubmitRequested,
}
