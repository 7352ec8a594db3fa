//! # Ayumi (歩み)
//!
//! A layout engine for steppers, timelines and numbered step lists.
//!
//! The name "Ayumi" (歩み) means "progress" or "a walk" in Japanese,
//! which is what a stepper shows: how far along a sequence of steps the
//! user has come.
//!
//! Widgets do not draw anything themselves. They turn a step list and a
//! [`StepperState`] into a declarative [`Element`] tree that a host toolkit
//! walks and paints.
//!
//! ## Features
//!
//! - **Three layouts**: circle, circle with centered titles, and bars, each
//!   horizontal or vertical
//! - **Reactive**: [`StepperController`] owns the state and notifies
//!   subscribers; an async [`watch`](StepperController::watch) channel is
//!   also available
//! - **Themeable**: per-stepper overrides fall back to an ambient
//!   [`ThemeData`] and then to defaults
//! - **Validated geometry**: [`Fractions`] and [`Thickness`] are checked
//!   once at construction, so layout math never fails
//!
//! ## Quick Start
//!
//! ```rust
//! use ayumi::prelude::*;
//! use std::rc::Rc;
//!
//! let controller = Rc::new(StepperController::new());
//! let stepper = Stepper::builder()
//!     .steps(steps!["Cart", "Shipping", "Payment"])
//!     .variant(StepperVariant::Circle)
//!     .build();
//! let view = StepperView::new(stepper, Rc::clone(&controller));
//!
//! controller.next();
//! controller.set_failed(1, true);
//!
//! let tree = view.render(&());
//! let indicators = tree.indicators();
//! assert_eq!(indicators.len(), 3);
//! assert_eq!(indicators[0].content, IndicatorContent::Glyph(Glyph::Check));
//! assert_eq!(indicators[1].content, IndicatorContent::Glyph(Glyph::Cross));
//! assert_eq!(indicators[2].content, IndicatorContent::Number(3));
//! ```
//!
//! ## Theming
//!
//! ```rust
//! use ayumi::prelude::*;
//! use ayumi::keys;
//!
//! let mut theme = ThemeData::new();
//! theme.insert(keys::ACTIVE_COLOR, Color::from_hex("#4CAF50")?);
//! theme.insert(keys::ORIENTATION, Axis::Vertical);
//!
//! let stepper = Stepper::new(steps!["Draft", "Review"]);
//! let config = stepper.resolve_config(&theme);
//! assert_eq!(config.axis, Axis::Vertical);
//! assert_eq!(config.colors.active.to_hex(), "#4CAF50");
//! # Ok::<(), ayumi::LayoutError>(())
//! ```
//!
//! ## Watching State
//!
//! ```rust
//! use ayumi::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let controller = StepperController::new();
//! let mut rx = controller.watch();
//!
//! controller.jump_to(2);
//! rx.changed().await.expect("controller alive");
//! assert_eq!(rx.borrow().current_step(), 2);
//! # }
//! ```

mod controller;
mod element;
mod error;
mod geometry;
mod observer;
mod state;
mod step;
mod step_list;
mod stepper;
mod theme;
mod timeline;
mod variant;
mod visual;

pub mod prelude;

pub use controller::StepperController;
pub use element::{
    ContentSlot, CrossAlign, Element, Flex, FontWeight, Glyph, Indicator, IndicatorContent, Insets,
    MainAlign, TextAlign, TextBlock,
};
pub use error::LayoutError;
pub use geometry::{
    compute_segment, Axis, AxisSegment, ConnectingLine, Fractions, Rect, Size, Thickness,
    HORIZONTAL_CORNER_RADIUS,
};
pub use observer::{Publisher, Subscription};
pub use state::StepperState;
pub use step::{ContentProducer, IconName, StepDescriptor};
pub use step_list::{NumberedStep, StepList, StepListStyle};
pub use stepper::{Stepper, StepperBuilder, StepperView};
pub use theme::{
    keys, Color, SizeMetrics, StepperColors, StepperConfig, StepperOverrides, StepperSize,
    ThemeData, ThemeKey, ThemeLookup, ThemeValue, CROSSFADE_DURATION,
};
pub use timeline::{rail_fractions, Timeline, TimelineEntry, TimelineStyle};
pub use variant::{
    renderer_for, RenderFn, RenderInput, StepperVariant, STEP_SPACING, SUBTITLE_TEXT_SIZE,
    TITLE_TEXT_SIZE,
};
pub use visual::{
    classify, classify_edge, resolve_visual, EdgeState, StepVisual, StepVisualClass,
    CURRENT_FILL_OPACITY,
};

/// Builds a `Vec<StepDescriptor>` from step titles.
///
/// # Example
///
/// ```rust
/// use ayumi::steps;
///
/// let steps = steps!["Account", "Profile", "Done"];
/// assert_eq!(steps.len(), 3);
/// assert_eq!(steps[1].title(), "Profile");
/// ```
#[macro_export]
macro_rules! steps {
    () => {
        ::std::vec::Vec::<$crate::StepDescriptor>::new()
    };
    ($($title:expr),+ $(,)?) => {
        ::std::vec![$($crate::StepDescriptor::new($title)),+]
    };
}
