use super::{content_slot, edge_line, selected_content, title_block, RenderInput, STEP_SPACING};
use crate::element::{CrossAlign, Element, MainAlign, TextAlign};
use crate::geometry::{Axis, Thickness};

/// A thick bar per step with the title beneath; content below the row.
pub(super) fn horizontal(input: &RenderInput<'_>) -> Element {
    if input.steps.is_empty() {
        return Element::Empty;
    }
    let slots = input
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            Element::expanded(
                Element::column(vec![
                    edge_line(input, Axis::Horizontal, index, Thickness::BAR),
                    title_block(input, index, step, TextAlign::Start),
                ])
                .aligned(MainAlign::Start, CrossAlign::Stretch, STEP_SPACING),
            )
        })
        .collect();

    Element::column(vec![
        Element::row(slots).aligned(MainAlign::Start, CrossAlign::Start, STEP_SPACING),
        selected_content(input),
    ])
    .aligned(MainAlign::Start, CrossAlign::Stretch, STEP_SPACING * 2.0)
}

/// A thin bar left of each step's title and content.
pub(super) fn vertical(input: &RenderInput<'_>) -> Element {
    if input.steps.is_empty() {
        return Element::Empty;
    }
    let bar = Thickness::MEDIUM;

    let steps = input
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let block = Element::column(vec![
                title_block(input, index, step, TextAlign::Start),
                content_slot(input, index, step),
            ])
            .aligned(MainAlign::Start, CrossAlign::Stretch, STEP_SPACING / 2.0);

            Element::row(vec![
                Element::sized(
                    Some(bar.pixels()),
                    None,
                    edge_line(input, Axis::Vertical, index, bar),
                ),
                Element::expanded(block),
            ])
            .aligned(MainAlign::Start, CrossAlign::Stretch, STEP_SPACING)
        })
        .collect();

    Element::column(steps).aligned(MainAlign::Start, CrossAlign::Stretch, STEP_SPACING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StepperState;
    use crate::steps;
    use crate::theme::StepperConfig;

    #[test]
    fn test_horizontal_bars_fill_progressively() {
        let steps = steps!["A", "B", "C", "D"];
        let state = StepperState::new(1);
        let config = StepperConfig::default();
        let tree = horizontal(&RenderInput {
            steps: &steps,
            state: &state,
            config: &config,
        });

        assert!(tree.indicators().is_empty());
        let lines = tree.lines();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| line.thickness == Thickness::BAR));
        let colors: Vec<_> = lines.iter().map(|line| line.color).collect();
        assert_eq!(
            colors,
            vec![
                config.colors.active,
                config.colors.active,
                config.colors.inactive,
                config.colors.inactive,
            ]
        );
    }

    #[test]
    fn test_horizontal_failure_marks_bar() {
        let steps = steps!["A", "B", "C"];
        let state = StepperState::new(1).with_failed(1, true);
        let config = StepperConfig::default();
        let tree = horizontal(&RenderInput {
            steps: &steps,
            state: &state,
            config: &config,
        });

        let colors: Vec<_> = tree.lines().iter().map(|line| line.color).collect();
        assert_eq!(
            colors,
            vec![config.colors.active, config.colors.error, config.colors.error]
        );
    }

    #[test]
    fn test_vertical_bar_beside_every_step() {
        let steps = steps!["A", "B"];
        let state = StepperState::new(0);
        let config = StepperConfig::default();
        let tree = vertical(&RenderInput {
            steps: &steps,
            state: &state,
            config: &config,
        });

        let lines = tree.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines
            .iter()
            .all(|line| line.axis == Axis::Vertical && line.thickness == Thickness::MEDIUM));
        let slots = tree.content_slots();
        assert!(slots[0].visible);
        assert!(!slots[1].visible);
    }
}
