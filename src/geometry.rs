//! Fraction-based placement of connecting lines and dividers.

use crate::error::LayoutError;
use crate::theme::Color;
use serde::{Deserialize, Serialize};

/// Corner radius of horizontal line ends, in pixels.
pub const HORIZONTAL_CORNER_RADIUS: f32 = 2.0;

/// Rendered length used when a computed segment collapses to nothing.
const MIN_SEGMENT_LENGTH: f32 = 1.0;

/// Layout axis of a widget or line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// Returns the perpendicular axis.
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Width and height of a container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent along `axis`.
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// An axis-aligned rectangle relative to its container's origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Begin/end positions of a line relative to its container, each in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use ayumi::Fractions;
///
/// let fractions = Fractions::new(0.1, 0.9)?;
/// assert_eq!(fractions.begin(), 0.1);
///
/// assert!(Fractions::new(0.5, 0.5).is_err());
/// assert!(Fractions::new(-0.1, 0.5).is_err());
/// # Ok::<(), ayumi::LayoutError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fractions {
    begin: f32,
    end: f32,
}

impl Fractions {
    /// Spans the whole container.
    pub const FULL: Fractions = Fractions {
        begin: 0.0,
        end: 1.0,
    };
    /// From the container's start to its midpoint.
    pub const LEADING_HALF: Fractions = Fractions {
        begin: 0.0,
        end: 0.5,
    };
    /// From the container's midpoint to its end.
    pub const TRAILING_HALF: Fractions = Fractions {
        begin: 0.5,
        end: 1.0,
    };

    /// Creates validated fractions.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::FractionOutOfRange`] if either value lies outside
    /// `[0, 1]` (or is NaN) and [`LayoutError::UnorderedFractions`] unless
    /// `begin < end`.
    pub fn new(begin: f32, end: f32) -> Result<Self, LayoutError> {
        check_unit("begin", begin)?;
        check_unit("end", end)?;
        if begin >= end {
            return Err(LayoutError::UnorderedFractions { begin, end });
        }
        Ok(Self { begin, end })
    }

    pub fn begin(&self) -> f32 {
        self.begin
    }

    pub fn end(&self) -> f32 {
        self.end
    }
}

impl Default for Fractions {
    fn default() -> Self {
        Self::FULL
    }
}

fn check_unit(name: &'static str, value: f32) -> Result<(), LayoutError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(LayoutError::FractionOutOfRange { name, value })
    }
}

/// Cross-axis thickness of a line, in pixels. Always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Thickness(f32);

impl Thickness {
    /// Hairline connector.
    pub const THIN: Thickness = Thickness(1.0);
    /// Timeline and step-list rails.
    pub const MEDIUM: Thickness = Thickness(2.0);
    /// Progress bar of the line variant.
    pub const BAR: Thickness = Thickness(4.0);

    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidThickness`] for negative or non-finite values.
    pub fn new(pixels: f32) -> Result<Self, LayoutError> {
        if pixels.is_finite() && pixels >= 0.0 {
            Ok(Self(pixels))
        } else {
            Err(LayoutError::InvalidThickness(pixels))
        }
    }

    pub fn pixels(self) -> f32 {
        self.0
    }
}

/// Concrete placement of a line along one axis.
///
/// For a horizontal line `offset_start`/`length` are the left margin and the
/// width; for a vertical line they are the top margin and the height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSegment {
    pub offset_start: f32,
    pub length: f32,
    pub thickness: f32,
}

/// Maps fractions onto a container extent.
///
/// A length that collapses to zero or below (zero-size containers, rounding)
/// is rendered as a single pixel so the line never disappears.
///
/// # Examples
///
/// ```
/// use ayumi::{compute_segment, Fractions, Thickness};
///
/// let segment = compute_segment(200.0, Fractions::new(0.1, 0.9)?, Thickness::THIN);
/// assert!((segment.offset_start - 20.0).abs() < 1e-3);
/// assert!((segment.length - 160.0).abs() < 1e-3);
///
/// let collapsed = compute_segment(0.0, Fractions::FULL, Thickness::THIN);
/// assert_eq!(collapsed.length, 1.0);
/// # Ok::<(), ayumi::LayoutError>(())
/// ```
pub fn compute_segment(
    container_extent: f32,
    fractions: Fractions,
    thickness: Thickness,
) -> AxisSegment {
    let extent = container_extent.max(0.0);
    let offset_start = extent * fractions.begin;
    let length = extent * fractions.end - offset_start;
    AxisSegment {
        offset_start,
        length: if length > 0.0 {
            length
        } else {
            MIN_SEGMENT_LENGTH
        },
        thickness: thickness.0,
    }
}

/// A straight line placed by fractions of its container: connectors, rails
/// and dividers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectingLine {
    pub axis: Axis,
    pub fractions: Fractions,
    pub thickness: Thickness,
    pub color: Color,
}

impl ConnectingLine {
    pub fn new(axis: Axis, fractions: Fractions, thickness: Thickness, color: Color) -> Self {
        Self {
            axis,
            fractions,
            thickness,
            color,
        }
    }

    /// A line spanning the whole container.
    pub fn full(axis: Axis, thickness: Thickness, color: Color) -> Self {
        Self::new(axis, Fractions::FULL, thickness, color)
    }

    pub fn segment(&self, container_extent: f32) -> AxisSegment {
        compute_segment(container_extent, self.fractions, self.thickness)
    }

    /// Places the line inside `container`, centered on the cross axis.
    pub fn layout(&self, container: Size) -> Rect {
        let segment = self.segment(container.extent(self.axis));
        let cross = ((container.extent(self.axis.cross()) - segment.thickness) / 2.0).max(0.0);
        match self.axis {
            Axis::Horizontal => Rect {
                x: segment.offset_start,
                y: cross,
                width: segment.length,
                height: segment.thickness,
            },
            Axis::Vertical => Rect {
                x: cross,
                y: segment.offset_start,
                width: segment.thickness,
                height: segment.length,
            },
        }
    }

    /// Vertical lines are always fully rounded; horizontal ones may be thick
    /// bars and only get a small radius.
    pub fn corner_radius(&self) -> f32 {
        match self.axis {
            Axis::Horizontal => HORIZONTAL_CORNER_RADIUS,
            Axis::Vertical => self.thickness.0 / 2.0,
        }
    }
}
