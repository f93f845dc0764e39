use crate::input::Input;

/// A form node. Today every node is an input; the wrapper keeps step
/// construction uniform and leaves room for display-only nodes.
pub struct Node {
    input: Box<dyn Input>,
}

impl Node {
    pub fn input(input: impl Input + 'static) -> Self {
        Self {
            input: Box::new(input),
        }
    }

    pub fn id(&self) -> &str {
        self.input.id()
    }

    pub fn as_input(&self) -> &dyn Input {
        self.input.as_ref()
    }

    pub fn as_input_mut(&mut self) -> &mut dyn Input {
        self.input.as_mut()
    }
}
