use super::{
    content_slot, edge_line, indicator, selected_content, title_block, RenderInput, STEP_SPACING,
};
use crate::element::{CrossAlign, Element, Insets, MainAlign, TextAlign};
use crate::geometry::{Axis, Thickness};

/// Each step is an indicator + title row, followed by a row holding the
/// vertical connector (under the indicator) and the content slot indented
/// past it.
pub(super) fn vertical(input: &RenderInput<'_>) -> Element {
    if input.steps.is_empty() {
        return Element::Empty;
    }
    let diameter = input.config.metrics().indicator_diameter;
    let last = input.steps.len().saturating_sub(1);

    let steps = input
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let header = Element::row(vec![
                indicator(input, index, step),
                Element::expanded(title_block(input, index, step, TextAlign::Start)),
            ])
            .aligned(MainAlign::Start, CrossAlign::Center, STEP_SPACING);

            let connector = if index < last {
                edge_line(input, Axis::Vertical, index, Thickness::THIN)
            } else {
                Element::Empty
            };
            let body = Element::row(vec![
                Element::sized(Some(diameter), None, connector),
                Element::expanded(Element::padded(
                    Insets::symmetric(STEP_SPACING, STEP_SPACING),
                    content_slot(input, index, step),
                )),
            ])
            .aligned(MainAlign::Start, CrossAlign::Stretch, 0.0);

            Element::column(vec![header, body])
        })
        .collect();

    Element::column(steps)
}

/// Equal-width slots of indicator, title and a connector filling the rest
/// of the slot; content sits below the whole row.
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
            let mut parts = vec![
                indicator(input, index, step),
                title_block(input, index, step, TextAlign::Start),
            ];
            if index < last {
                parts.push(Element::expanded(edge_line(
                    input,
                    Axis::Horizontal,
                    index,
                    Thickness::THIN,
                )));
            }
            Element::expanded(
                Element::row(parts).aligned(MainAlign::Start, CrossAlign::Center, STEP_SPACING),
            )
        })
        .collect();

    Element::column(vec![
        Element::row(slots).aligned(MainAlign::Start, CrossAlign::Center, STEP_SPACING),
        selected_content(input),
    ])
    .aligned(MainAlign::Start, CrossAlign::Stretch, STEP_SPACING * 2.0)
}
