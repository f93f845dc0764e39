use crate::core::flow::{Flow, StepStatus};
use crate::core::node::Node;
use crate::input::Input;
use crate::ui::span::{Span, SpanLine, line_width};
use crate::ui::theme::Theme;

const FOCUS_MARKER: &str = "❯ ";
const NO_FOCUS_MARKER: &str = "  ";
const LABEL_SEPARATOR: &str = ": ";

pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    /// (column, row) of the text cursor inside the frame, if any.
    pub cursor: Option<(u16, u16)>,
}

pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn render(&self, flow: &Flow) -> RenderFrame {
        let mut lines = Vec::new();
        let mut cursor = None;

        lines.push(self.progress_line(flow));
        lines.push(Vec::new());

        let step = flow.current_step();
        lines.push(vec![Span::styled(step.prompt.clone(), self.theme.prompt)]);
        if let Some(hint) = &step.hint {
            lines.push(vec![Span::styled(hint.clone(), self.theme.hint)]);
        }
        lines.push(Vec::new());

        for node in &step.nodes {
            let row = lines.len() as u16;
            let line = self.input_line(node);
            if node.as_input().is_focused() {
                if let Some(offset) = node.as_input().cursor_offset_in_content() {
                    let content_start = line_width(&line)
                        - line_width(&node.as_input().render_content());
                    cursor = Some(((content_start + offset) as u16, row));
                }
            }
            lines.push(line);

            for extra in node.as_input().render_lines() {
                lines.push(extra);
            }

            if let Some(error) = node.as_input().error() {
                lines.push(vec![
                    Span::new("  "),
                    Span::styled(error.to_string(), self.theme.error),
                ]);
            }
        }

        RenderFrame { lines, cursor }
    }

    fn progress_line(&self, flow: &Flow) -> SpanLine {
        let mut line = Vec::new();
        for index in 0..flow.len() {
            if index > 0 {
                line.push(Span::new(" "));
            }
            let span = match flow.status_at(index) {
                StepStatus::Done => Span::styled("●", self.theme.step_done),
                StepStatus::Active => Span::styled("●", self.theme.focused),
                StepStatus::Pending => Span::styled("○", self.theme.hint),
            };
            line.push(span);
        }
        line
    }

    fn input_line(&self, node: &Node) -> SpanLine {
        let input = node.as_input();
        let mut line = Vec::new();

        if input.is_focused() {
            line.push(Span::styled(FOCUS_MARKER, self.theme.focused));
        } else {
            line.push(Span::new(NO_FOCUS_MARKER));
        }

        let label_style = if input.is_focused() {
            self.theme.focused
        } else {
            Default::default()
        };
        line.push(Span::styled(
            format!("{}{}", input.label(), LABEL_SEPARATOR),
            label_style,
        ));
        line.extend(input.render_content());
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::flow::Flow;
    use crate::core::node::Node;
    use crate::core::step::Step;
    use crate::input::{Input, TextInput};

    fn line_text(line: &SpanLine) -> String {
        line.iter().map(|span| span.text.as_str()).collect()
    }

    #[test]
    fn frame_shows_prompt_hint_and_inputs() {
        let mut input = TextInput::new("name", "نام");
        input.set_focused(true);
        let flow = Flow::new(vec![
            Step::new("contact", "اطلاعات تماس")
                .with_hint("نام و شماره تماس خود را وارد کنید")
                .with_node(Node::input(input)),
        ]);

        let frame = Renderer::new(Theme::default_theme()).render(&flow);
        let texts: Vec<String> = frame.lines.iter().map(line_text).collect();

        assert_eq!(texts[2], "اطلاعات تماس");
        assert_eq!(texts[3], "نام و شماره تماس خود را وارد کنید");
        assert!(texts[5].starts_with("❯ نام: "));
    }

    #[test]
    fn cursor_sits_after_label_for_focused_text_input() {
        let mut input = TextInput::new("name", "نام");
        input.set_focused(true);
        let flow =
            Flow::new(vec![Step::new("contact", "تماس").with_node(Node::input(input))]);

        let frame = Renderer::new(Theme::default_theme()).render(&flow);
        let (col, row) = frame.cursor.unwrap();
        assert_eq!(row, 4);
        // Marker (2) + "نام" (3) + ": " (2).
        assert_eq!(col, 7);
    }

    #[test]
    fn error_line_follows_its_input() {
        let mut input = TextInput::new("name", "نام");
        input.set_error(Some("نام را وارد کنید".to_string()));
        let flow =
            Flow::new(vec![Step::new("contact", "تماس").with_node(Node::input(input))]);

        let frame = Renderer::new(Theme::default_theme()).render(&flow);
        let texts: Vec<String> = frame.lines.iter().map(line_text).collect();
        assert!(texts.iter().any(|text| text.contains("نام را وارد کنید")));
    }
}
