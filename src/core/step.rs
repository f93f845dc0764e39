use crate::core::node::Node;

pub struct Step {
    pub id: &'static str,
    pub prompt: String,
    pub hint: Option<String>,
    pub nodes: Vec<Node>,
}

impl Step {
    pub fn new(id: &'static str, prompt: impl Into<String>) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            hint: None,
            nodes: Vec::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }
}
