use crate::core::step::Step;
use crate::input::Input;
use indexmap::IndexMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Active,
    Done,
}

pub struct Flow {
    steps: Vec<Step>,
    current: usize,
    statuses: Vec<StepStatus>,
}

impl Flow {
    pub fn new(steps: Vec<Step>) -> Self {
        let mut statuses = vec![StepStatus::Pending; steps.len()];
        if !statuses.is_empty() {
            statuses[0] = StepStatus::Active;
        }

        Self {
            steps,
            current: 0,
            statuses,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn current_step(&self) -> &Step {
        &self.steps[self.current]
    }

    pub fn current_step_mut(&mut self) -> &mut Step {
        &mut self.steps[self.current]
    }

    pub fn status_at(&self, index: usize) -> StepStatus {
        self.statuses
            .get(index)
            .copied()
            .unwrap_or(StepStatus::Pending)
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.steps.len()
    }

    pub fn advance(&mut self) {
        if !self.has_next() {
            return;
        }

        self.statuses[self.current] = StepStatus::Done;
        self.current += 1;
        self.statuses[self.current] = StepStatus::Active;
    }

    pub fn mark_done(&mut self) {
        if let Some(status) = self.statuses.get_mut(self.current) {
            *status = StepStatus::Done;
        }
    }

    /// Submitted values of every step, keyed by input id, in step order.
    pub fn collect_values(&self) -> IndexMap<String, String> {
        let mut values = IndexMap::new();
        for step in &self.steps {
            for node in &step.nodes {
                values.insert(node.id().to_string(), node.as_input().value());
            }
        }
        values
    }
}
