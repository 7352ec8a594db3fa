use super::{edge_line, indicator, selected_content, title_block, RenderInput, STEP_SPACING};
use crate::element::{CrossAlign, Element, MainAlign, TextAlign};
use crate::geometry::{Axis, Thickness};

/// Indicators flanked by connectors, titles centered below. The outer ends
/// keep an empty flexible gap so every indicator stays centered in its slot.
pub(super) fn horizontal(input: &RenderInput<'_>) -> Element {
    if input.steps.is_empty() {
        return Element::Empty;
    }
    let last = input.steps.len().saturating_sub(1);

    let slots = input
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let leading = match index.checked_sub(1) {
                Some(previous) => edge_line(input, Axis::Horizontal, previous, Thickness::THIN),
                None => Element::Empty,
            };
            let trailing = if index < last {
                edge_line(input, Axis::Horizontal, index, Thickness::THIN)
            } else {
                Element::Empty
            };
            let track = Element::row(vec![
                Element::expanded(leading),
                indicator(input, index, step),
                Element::expanded(trailing),
            ])
            .aligned(MainAlign::Start, CrossAlign::Center, 0.0);

            Element::expanded(
                Element::column(vec![
                    track,
                    title_block(input, index, step, TextAlign::Center),
                ])
                .aligned(MainAlign::Start, CrossAlign::Center, STEP_SPACING),
            )
        })
        .collect();

    Element::column(vec![Element::row(slots), selected_content(input)])
        .aligned(MainAlign::Start, CrossAlign::Stretch, STEP_SPACING * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StepperState;
    use crate::steps;
    use crate::theme::StepperConfig;

    #[test]
    fn test_connectors_flank_inner_indicators() {
        let steps = steps!["A", "B", "C"];
        let state = StepperState::new(1);
        let config = StepperConfig::default();
        let tree = horizontal(&RenderInput {
            steps: &steps,
            state: &state,
            config: &config,
        });

        // A: right only, B: left + right, C: left only.
        let lines = tree.lines();
        assert_eq!(lines.len(), 4);
        let colors: Vec<_> = lines.iter().map(|line| line.color).collect();
        assert_eq!(
            colors,
            vec![
                config.colors.active,
                config.colors.active,
                config.colors.active,
                config.colors.active,
            ]
        );
        assert_eq!(tree.indicators().len(), 3);
    }

    #[test]
    fn test_single_step_has_no_connectors() {
        let steps = steps!["Only"];
        let state = StepperState::new(0);
        let config = StepperConfig::default();
        let tree = horizontal(&RenderInput {
            steps: &steps,
            state: &state,
            config: &config,
        });
        assert!(tree.lines().is_empty());
        assert_eq!(tree.content_slots().len(), 1);
    }

    #[test]
    fn test_pending_edges_are_inactive() {
        let steps = steps!["A", "B", "C"];
        let state = StepperState::new(0);
        let config = StepperConfig::default();
        let tree = horizontal(&RenderInput {
            steps: &steps,
            state: &state,
            config: &config,
        });

        let colors: Vec<_> = tree.lines().iter().map(|line| line.color).collect();
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
}
