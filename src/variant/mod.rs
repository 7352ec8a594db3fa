//! Layout strategies for the stepper.
//!
//! Every variant is a plain function from [`RenderInput`] to an [`Element`]
//! tree; [`renderer_for`] picks one per variant and axis.

mod circle;
mod circle_alt;
mod line;

use crate::element::{
    ContentSlot, CrossAlign, Element, FontWeight, Indicator, MainAlign, TextAlign, TextBlock,
};
use crate::geometry::{Axis, ConnectingLine, Thickness};
use crate::state::{step_index, StepperState};
use crate::step::StepDescriptor;
use crate::theme::StepperConfig;
use crate::visual::{classify, classify_edge, resolve_visual, StepVisualClass};
use serde::{Deserialize, Serialize};
use tracing::trace;

pub const TITLE_TEXT_SIZE: f32 = 14.0;
pub const SUBTITLE_TEXT_SIZE: f32 = 12.0;
/// Gap between an indicator and its title, and between adjacent blocks.
pub const STEP_SPACING: f32 = 8.0;

/// Visual layout strategy of a stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepperVariant {
    /// Numbered circles with the title beside them.
    #[default]
    Circle,
    /// Circles flanked by connectors with the title centered below.
    /// Horizontal only; vertical steppers fall back to [`Circle`](Self::Circle).
    CircleAlt,
    /// Bars instead of circles.
    Line,
}

/// Everything a variant needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub steps: &'a [StepDescriptor],
    pub state: &'a StepperState,
    pub config: &'a StepperConfig,
}

pub type RenderFn = fn(&RenderInput<'_>) -> Element;

/// Looks up the render function for `variant` laid out along `axis`.
///
/// Every render function returns [`Element::Empty`] for an empty step list.
pub fn renderer_for(variant: StepperVariant, axis: Axis) -> RenderFn {
    let render: RenderFn = match (variant, axis) {
        (StepperVariant::Circle, Axis::Horizontal) => circle::horizontal,
        (StepperVariant::Circle, Axis::Vertical) => circle::vertical,
        (StepperVariant::CircleAlt, Axis::Horizontal) => circle_alt::horizontal,
        (StepperVariant::CircleAlt, Axis::Vertical) => circle::vertical,
        (StepperVariant::Line, Axis::Horizontal) => line::horizontal,
        (StepperVariant::Line, Axis::Vertical) => line::vertical,
    };
    trace!(?variant, ?axis, "Resolved stepper renderer");
    render
}

fn indicator(input: &RenderInput<'_>, index: usize, step: &StepDescriptor) -> Element {
    let metrics = input.config.metrics();
    let visual = resolve_visual(input.state, index, step.icon_name(), &input.config.colors);
    Element::Indicator(Indicator {
        diameter: metrics.indicator_diameter,
        background: visual.background,
        border: visual.border,
        foreground: visual.foreground,
        content: visual.content,
        text_size: metrics.text_size,
        icon_size: metrics.icon_size,
    })
}

fn title_block(
    input: &RenderInput<'_>,
    index: usize,
    step: &StepDescriptor,
    align: TextAlign,
) -> Element {
    let class = classify(input.state, index);
    let colors = &input.config.colors;
    let weight = if class == StepVisualClass::Current {
        FontWeight::SemiBold
    } else {
        FontWeight::Regular
    };

    let mut lines = vec![Element::Text(
        TextBlock::new(step.title(), TITLE_TEXT_SIZE, class.text_color(colors))
            .weight(weight)
            .align(align),
    )];
    if let Some(subtitle) = step.subtitle_text() {
        lines.push(Element::Text(
            TextBlock::new(subtitle, SUBTITLE_TEXT_SIZE, colors.inactive).align(align),
        ));
    }

    let cross = match align {
        TextAlign::Start => CrossAlign::Start,
        TextAlign::Center => CrossAlign::Center,
    };
    Element::column(lines).aligned(MainAlign::Start, cross, 2.0)
}

/// Only the current step's producer runs; other slots stay in the tree,
/// collapsed and empty.
fn content_slot(input: &RenderInput<'_>, index: usize, step: &StepDescriptor) -> Element {
    let visible = input.state.current_step() == step_index(index);
    let child = if visible {
        step.produce_content()
    } else {
        Element::Empty
    };
    Element::Content(ContentSlot {
        index,
        visible,
        crossfade: input.config.crossfade,
        child: Box::new(child),
    })
}

/// Content area shown below horizontal layouts. A trailing empty
/// placeholder is selected when no step is current.
fn selected_content(input: &RenderInput<'_>) -> Element {
    let count = input.steps.len();
    let selected = usize::try_from(input.state.current_step())
        .ok()
        .filter(|index| *index < count)
        .unwrap_or(count);

    let mut children: Vec<Element> = input
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| content_slot(input, index, step))
        .collect();
    children.push(Element::Empty);
    Element::Indexed { selected, children }
}

/// Connector leaving step `lower`, colored by its edge state.
fn edge_line(input: &RenderInput<'_>, axis: Axis, lower: usize, thickness: Thickness) -> Element {
    let color = classify_edge(input.state, lower).color(&input.config.colors);
    Element::Line(ConnectingLine::full(axis, thickness, color))
}
