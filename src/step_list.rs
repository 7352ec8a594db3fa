//! Numbered step list: a column of tiles, each with a number badge, a title
//! and an optional description.

use crate::element::{
    CrossAlign, Element, FontWeight, Indicator, IndicatorContent, Insets, MainAlign, TextBlock,
};
use crate::geometry::{Axis, ConnectingLine, Fractions, Thickness};
use crate::theme::{Color, StepperColors};
use crate::timeline::rail_fractions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedStep {
    pub title: String,
    pub description: Option<String>,
}

impl NumberedStep {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepListStyle {
    pub badge_color: Color,
    pub badge_diameter: f32,
    pub text_color: Color,
    pub muted_color: Color,
    pub line_color: Color,
    /// Join the badges with a vertical line.
    pub connectors: bool,
    /// Horizontal divider between tiles, placed by fractions of the tile
    /// width. `None` draws no divider.
    pub divider: Option<Fractions>,
}

impl Default for StepListStyle {
    fn default() -> Self {
        let colors = StepperColors::default();
        Self {
            badge_color: colors.active,
            badge_diameter: 28.0,
            text_color: Color::from_rgb(0x21, 0x21, 0x21),
            muted_color: colors.inactive,
            line_color: colors.inactive,
            connectors: true,
            divider: None,
        }
    }
}

/// # Examples
///
/// ```
/// use ayumi::{Fractions, NumberedStep, StepList, StepListStyle};
///
/// let list = StepList::new(vec![
///     NumberedStep::new("Install the CLI"),
///     NumberedStep::new("Log in").description("Use your workspace account"),
/// ])
/// .style(StepListStyle {
///     divider: Some(Fractions::new(0.1, 1.0)?),
///     ..StepListStyle::default()
/// });
///
/// let tree = list.render();
/// assert_eq!(tree.indicators().len(), 2);
/// # Ok::<(), ayumi::LayoutError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepList {
    items: Vec<NumberedStep>,
    style: StepListStyle,
}

impl StepList {
    pub fn new(items: Vec<NumberedStep>) -> Self {
        Self {
            items,
            style: StepListStyle::default(),
        }
    }

    pub fn style(mut self, style: StepListStyle) -> Self {
        self.style = style;
        self
    }

    pub fn items(&self) -> &[NumberedStep] {
        &self.items
    }

    pub fn render(&self) -> Element {
        let count = self.items.len();
        let mut tiles = Vec::with_capacity(count * 2);
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                if let Some(fractions) = self.style.divider {
                    tiles.push(Element::Line(ConnectingLine::new(
                        Axis::Horizontal,
                        fractions,
                        Thickness::THIN,
                        self.style.line_color,
                    )));
                }
            }
            tiles.push(self.tile(index, count, item));
        }
        Element::column(tiles)
    }

    fn tile(&self, index: usize, count: usize, item: &NumberedStep) -> Element {
        let diameter = self.style.badge_diameter;
        let badge = Element::Indicator(Indicator {
            diameter,
            background: self.style.badge_color,
            border: self.style.badge_color,
            foreground: Color::WHITE,
            content: IndicatorContent::Number(index + 1),
            text_size: diameter / 2.0,
            icon_size: diameter * 0.75,
        });

        let mut rail = Vec::with_capacity(2);
        if self.style.connectors {
            if let Some(fractions) = rail_fractions(index, count) {
                rail.push(Element::Line(ConnectingLine::new(
                    Axis::Vertical,
                    fractions,
                    Thickness::MEDIUM,
                    self.style.line_color,
                )));
            }
        }
        rail.push(badge);

        let mut text = vec![Element::Text(
            TextBlock::new(item.title.as_str(), 14.0, self.style.text_color)
                .weight(FontWeight::SemiBold),
        )];
        if let Some(description) = &item.description {
            text.push(Element::text(
                description.as_str(),
                12.0,
                self.style.muted_color,
            ));
        }

        Element::row(vec![
            Element::sized(Some(diameter), None, Element::Stack(rail)),
            Element::expanded(Element::padded(
                Insets::symmetric(0.0, 8.0),
                Element::column(text).aligned(MainAlign::Start, CrossAlign::Start, 2.0),
            )),
        ])
        .aligned(MainAlign::Start, CrossAlign::Stretch, 12.0)
    }
}
