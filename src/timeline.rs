//! Vertical timeline: a rail of dots joined by a line, with a text block per
//! entry.

use crate::element::{
    CrossAlign, Element, FontWeight, Indicator, IndicatorContent, Insets, MainAlign, TextBlock,
};
use crate::geometry::{Axis, ConnectingLine, Fractions, Thickness};
use crate::step::IconName;
use crate::theme::{Color, StepperColors};

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub title: String,
    pub subtitle: Option<String>,
    /// Free-form time label shown above the title.
    pub time: Option<String>,
    pub icon: Option<IconName>,
    /// Overrides the style's dot color for this entry.
    pub color: Option<Color>,
}

impl TimelineEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            time: None,
            icon: None,
            color: None,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<IconName>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineStyle {
    pub line_color: Color,
    pub dot_color: Color,
    pub text_color: Color,
    pub muted_color: Color,
    pub dot_diameter: f32,
    pub line_thickness: Thickness,
    pub rail_width: f32,
    /// Vertical gap below each entry.
    pub spacing: f32,
}

impl Default for TimelineStyle {
    fn default() -> Self {
        let colors = StepperColors::default();
        Self {
            line_color: colors.inactive,
            dot_color: colors.active,
            text_color: Color::from_rgb(0x21, 0x21, 0x21),
            muted_color: colors.inactive,
            dot_diameter: 12.0,
            line_thickness: Thickness::MEDIUM,
            rail_width: 24.0,
            spacing: 16.0,
        }
    }
}

/// Portion of an entry's rail covered by the connecting line: from the dot
/// down for the first entry, up to the dot for the last, the full height in
/// between. A lone entry has no line.
pub fn rail_fractions(index: usize, count: usize) -> Option<Fractions> {
    if count < 2 || index >= count {
        None
    } else if index == 0 {
        Some(Fractions::TRAILING_HALF)
    } else if index == count - 1 {
        Some(Fractions::LEADING_HALF)
    } else {
        Some(Fractions::FULL)
    }
}

/// # Examples
///
/// ```
/// use ayumi::{Timeline, TimelineEntry};
///
/// let timeline = Timeline::new(vec![
///     TimelineEntry::new("Order placed").time("09:12"),
///     TimelineEntry::new("Shipped").time("14:40"),
///     TimelineEntry::new("Delivered"),
/// ]);
///
/// let tree = timeline.render();
/// assert_eq!(tree.indicators().len(), 3);
/// assert_eq!(tree.lines().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
    style: TimelineStyle,
}

impl Timeline {
    pub fn new(entries: Vec<TimelineEntry>) -> Self {
        Self {
            entries,
            style: TimelineStyle::default(),
        }
    }

    pub fn style(mut self, style: TimelineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn render(&self) -> Element {
        let count = self.entries.len();
        let rows = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Element::row(vec![
                    Element::sized(Some(self.style.rail_width), None, self.rail(index, count, entry)),
                    Element::expanded(Element::padded(
                        Insets {
                            bottom: self.style.spacing,
                            ..Insets::default()
                        },
                        self.text(entry),
                    )),
                ])
                .aligned(MainAlign::Start, CrossAlign::Stretch, 8.0)
            })
            .collect();
        Element::column(rows)
    }

    fn rail(&self, index: usize, count: usize, entry: &TimelineEntry) -> Element {
        let dot_color = entry.color.unwrap_or(self.style.dot_color);
        let dot = Element::Indicator(Indicator {
            diameter: self.style.dot_diameter,
            background: dot_color,
            border: dot_color,
            foreground: Color::WHITE,
            content: entry
                .icon
                .clone()
                .map_or(IndicatorContent::Empty, IndicatorContent::Icon),
            text_size: self.style.dot_diameter / 2.0,
            icon_size: self.style.dot_diameter * 0.75,
        });

        let mut layers = Vec::with_capacity(2);
        if let Some(fractions) = rail_fractions(index, count) {
            layers.push(Element::Line(ConnectingLine::new(
                Axis::Vertical,
                fractions,
                self.style.line_thickness,
                self.style.line_color,
            )));
        }
        layers.push(dot);
        Element::Stack(layers)
    }

    fn text(&self, entry: &TimelineEntry) -> Element {
        let mut lines = Vec::with_capacity(3);
        if let Some(time) = &entry.time {
            lines.push(Element::text(time.as_str(), 12.0, self.style.muted_color));
        }
        lines.push(Element::Text(
            TextBlock::new(entry.title.as_str(), 14.0, self.style.text_color)
                .weight(FontWeight::SemiBold),
        ));
        if let Some(subtitle) = &entry.subtitle {
            lines.push(Element::text(subtitle.as_str(), 12.0, self.style.muted_color));
        }
        Element::column(lines).aligned(MainAlign::Start, CrossAlign::Start, 2.0)
    }
}
