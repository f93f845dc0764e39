use crate::core::step::Step;
use crate::input::{Input, NodeId};

/// Validates a single input: an empty raw value runs the validators (so
/// `required` can complain), a partially filled one is rejected as
/// incomplete, a complete one runs the validators on the final value.
pub fn validate_input(input: &dyn Input) -> Result<(), String> {
    let raw = input.raw_value();
    if raw.is_empty() {
        return run_validators(input, &raw);
    }
    if !input.is_complete() {
        return Err("مقدار ناقص است".to_string());
    }
    run_validators(input, &input.value())
}

pub fn validate_all_inputs(step: &Step) -> Vec<(NodeId, String)> {
    step.nodes
        .iter()
        .filter_map(|node| {
            validate_input(node.as_input())
                .err()
                .map(|err| (node.id().to_string(), err))
        })
        .collect()
}

fn run_validators(input: &dyn Input, value: &str) -> Result<(), String> {
    for validator in input.validators() {
        validator(value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::node::Node;
    use crate::input::{TextInput, TimeInput};
    use crate::terminal::{KeyCode, KeyModifiers};
    use crate::validators;

    #[test]
    fn required_field_fails_when_empty() {
        let input = TextInput::new("name", "نام")
            .with_validator(validators::required("نام را وارد کنید"));
        assert_eq!(validate_input(&input), Err("نام را وارد کنید".to_string()));
    }

    #[test]
    fn partial_segmented_value_is_incomplete() {
        let mut input = TimeInput::new("time", "ساعت");
        input.handle_key(KeyCode::Char('1'), KeyModifiers::NONE);
        assert_eq!(validate_input(&input), Err("مقدار ناقص است".to_string()));
    }

    #[test]
    fn step_validation_collects_per_input_errors() {
        let step = Step::new("contact", "اطلاعات تماس")
            .with_node(Node::input(
                TextInput::new("name", "نام")
                    .with_validator(validators::required("نام را وارد کنید")),
            ))
            .with_node(Node::input(
                TextInput::new("phone", "شماره تماس").with_validator(validators::phone()),
            ));

        let errors = validate_all_inputs(&step);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "name");
    }
}
