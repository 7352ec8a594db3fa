//! Commonly used types and traits

pub use crate::controller::StepperController;
pub use crate::element::{Element, Glyph, IndicatorContent};
pub use crate::geometry::{Axis, Fractions, Thickness};
pub use crate::state::StepperState;
pub use crate::step::StepDescriptor;
pub use crate::stepper::{Stepper, StepperView};
pub use crate::steps;
pub use crate::theme::{Color, StepperSize, ThemeData, ThemeLookup};
pub use crate::variant::StepperVariant;
