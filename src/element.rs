//! The drawable tree handed to the host toolkit.
//!
//! Containers (`Row`, `Column`, `Stack`, `Expanded`, ...) describe flex-style
//! arrangement; leaves (`Indicator`, `Text`, `Line`) are the primitives the
//! host paints. Lines are positioned by [`ConnectingLine::layout`] once the
//! host knows the size of the box it placed them in.

use crate::geometry::ConnectingLine;
use crate::step::IconName;
use crate::theme::Color;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainAlign {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossAlign {
    #[default]
    Start,
    Center,
    End,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    SemiBold,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Insets {
    pub fn left(left: f32) -> Self {
        Self {
            left,
            ..Self::default()
        }
    }

    pub fn top(top: f32) -> Self {
        Self {
            top,
            ..Self::default()
        }
    }

    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            top: vertical,
            right: horizontal,
            bottom: vertical,
        }
    }
}

/// Children of a row or column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Flex {
    pub children: Vec<Element>,
    pub main_align: MainAlign,
    pub cross_align: CrossAlign,
    pub spacing: f32,
}

/// Built-in glyphs drawn inside an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Check,
    Cross,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndicatorContent {
    Empty,
    /// 1-based step number.
    Number(usize),
    Glyph(Glyph),
    Icon(IconName),
}

/// A circular badge with a border and centered content.
#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    pub diameter: f32,
    pub background: Color,
    pub border: Color,
    pub foreground: Color,
    pub content: IndicatorContent,
    pub text_size: f32,
    pub icon_size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub text: String,
    pub size: f32,
    pub color: Color,
    pub weight: FontWeight,
    pub align: TextAlign,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, size: f32, color: Color) -> Self {
        Self {
            text: text.into(),
            size,
            color,
            weight: FontWeight::Regular,
            align: TextAlign::Start,
        }
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// Region holding a step's content.
///
/// The slot stays in the tree for every step so the host keeps its identity
/// (keyed by `index`) while navigating. Hidden slots are collapsed to zero
/// extent; a slot becoming visible crossfades in over `crossfade`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentSlot {
    pub index: usize,
    pub visible: bool,
    pub crossfade: Duration,
    pub child: Box<Element>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Element {
    #[default]
    Empty,
    Row(Flex),
    Column(Flex),
    /// Children painted on top of each other, first at the bottom.
    Stack(Vec<Element>),
    /// Takes a `flex` share of the remaining main-axis space.
    Expanded {
        flex: u16,
        child: Box<Element>,
    },
    Sized {
        width: Option<f32>,
        height: Option<f32>,
        child: Box<Element>,
    },
    Padding {
        insets: Insets,
        child: Box<Element>,
    },
    Indicator(Indicator),
    Text(TextBlock),
    Line(ConnectingLine),
    Content(ContentSlot),
    /// Shows only `children[selected]`, sized to it.
    Indexed {
        selected: usize,
        children: Vec<Element>,
    },
}

impl Element {
    pub fn row(children: Vec<Element>) -> Self {
        Element::Row(Flex {
            children,
            ..Flex::default()
        })
    }

    pub fn column(children: Vec<Element>) -> Self {
        Element::Column(Flex {
            children,
            ..Flex::default()
        })
    }

    pub fn expanded(child: Element) -> Self {
        Element::Expanded {
            flex: 1,
            child: Box::new(child),
        }
    }

    pub fn sized(width: Option<f32>, height: Option<f32>, child: Element) -> Self {
        Element::Sized {
            width,
            height,
            child: Box::new(child),
        }
    }

    pub fn padded(insets: Insets, child: Element) -> Self {
        Element::Padding {
            insets,
            child: Box::new(child),
        }
    }

    pub fn text(text: impl Into<String>, size: f32, color: Color) -> Self {
        Element::Text(TextBlock::new(text, size, color))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Element::Empty)
    }

    /// Sets alignment and spacing on a row or column; other elements are
    /// returned unchanged.
    pub fn aligned(mut self, main: MainAlign, cross: CrossAlign, spacing: f32) -> Self {
        if let Element::Row(flex) | Element::Column(flex) = &mut self {
            flex.main_align = main;
            flex.cross_align = cross;
            flex.spacing = spacing;
        }
        self
    }

    pub fn children(&self) -> Vec<&Element> {
        match self {
            Element::Row(flex) | Element::Column(flex) => flex.children.iter().collect(),
            Element::Stack(children) | Element::Indexed { children, .. } => {
                children.iter().collect()
            }
            Element::Expanded { child, .. }
            | Element::Sized { child, .. }
            | Element::Padding { child, .. } => vec![child.as_ref()],
            Element::Content(slot) => vec![slot.child.as_ref()],
            Element::Empty | Element::Indicator(_) | Element::Text(_) | Element::Line(_) => {
                Vec::new()
            }
        }
    }

    /// Every element of the tree in depth-first pre-order, `self` included.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        let mut pending = vec![self];
        while let Some(element) = pending.pop() {
            out.push(element);
            pending.extend(element.children().into_iter().rev());
        }
        out
    }

    pub fn content_slots(&self) -> Vec<&ContentSlot> {
        self.descendants()
            .into_iter()
            .filter_map(|element| match element {
                Element::Content(slot) => Some(slot),
                _ => None,
            })
            .collect()
    }

    pub fn indicators(&self) -> Vec<&Indicator> {
        self.descendants()
            .into_iter()
            .filter_map(|element| match element {
                Element::Indicator(indicator) => Some(indicator),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<&ConnectingLine> {
        self.descendants()
            .into_iter()
            .filter_map(|element| match element {
                Element::Line(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&TextBlock> {
        self.descendants()
            .into_iter()
            .filter_map(|element| match element {
                Element::Text(text) => Some(text),
                _ => None,
            })
            .collect()
    }
}
