use crate::controller::StepperController;
use crate::element::Element;
use crate::geometry::Axis;
use crate::observer::Subscription;
use crate::state::StepperState;
use crate::step::StepDescriptor;
use crate::theme::{Color, StepperConfig, StepperOverrides, StepperSize, ThemeLookup};
use crate::variant::{renderer_for, RenderInput, StepperVariant};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace};

/// An ordered list of steps plus per-stepper overrides.
///
/// # Examples
///
/// ```
/// use ayumi::prelude::*;
///
/// let stepper = Stepper::builder()
///     .steps(steps!["Account", "Profile", "Confirm"])
///     .variant(StepperVariant::Line)
///     .orientation(Axis::Vertical)
///     .build();
///
/// let tree = stepper.render(&StepperState::new(1), &());
/// assert_eq!(tree.lines().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Stepper {
    steps: Vec<StepDescriptor>,
    overrides: StepperOverrides,
}

impl Stepper {
    pub fn new(steps: Vec<StepDescriptor>) -> Self {
        Self {
            steps,
            overrides: StepperOverrides::default(),
        }
    }

    pub fn builder() -> StepperBuilder {
        StepperBuilder::new()
    }

    pub fn steps(&self) -> &[StepDescriptor] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn overrides(&self) -> &StepperOverrides {
        &self.overrides
    }

    /// Resolves colors, orientation, variant and size against `ambient`.
    pub fn resolve_config(&self, ambient: &dyn ThemeLookup) -> StepperConfig {
        StepperConfig::resolve(&self.overrides, ambient)
    }

    /// Renders one frame, resolving the ambient theme once for the pass.
    pub fn render(&self, state: &StepperState, ambient: &dyn ThemeLookup) -> Element {
        self.render_with(state, &self.resolve_config(ambient))
    }

    /// Renders one frame with an already resolved configuration.
    ///
    /// An empty step list renders [`Element::Empty`].
    pub fn render_with(&self, state: &StepperState, config: &StepperConfig) -> Element {
        if self.steps.is_empty() {
            trace!("Rendering empty stepper");
            return Element::Empty;
        }
        let render = renderer_for(config.variant, config.axis);
        trace!(
            steps = self.steps.len(),
            current_step = state.current_step(),
            "Rendering stepper"
        );
        render(&RenderInput {
            steps: &self.steps,
            state,
            config,
        })
    }
}

pub struct StepperBuilder {
    steps: Vec<StepDescriptor>,
    overrides: StepperOverrides,
}

impl Default for StepperBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StepperBuilder {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            overrides: StepperOverrides::default(),
        }
    }

    /// Appends one step.
    pub fn step(mut self, step: impl Into<StepDescriptor>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Appends several steps.
    pub fn steps(mut self, steps: impl IntoIterator<Item = StepDescriptor>) -> Self {
        self.steps.extend(steps);
        self
    }

    pub fn variant(mut self, variant: StepperVariant) -> Self {
        self.overrides.variant = Some(variant);
        self
    }

    pub fn orientation(mut self, axis: Axis) -> Self {
        self.overrides.orientation = Some(axis);
        self
    }

    pub fn size(mut self, size: StepperSize) -> Self {
        self.overrides.size = Some(size);
        self
    }

    pub fn active_color(mut self, color: Color) -> Self {
        self.overrides.active_color = Some(color);
        self
    }

    pub fn inactive_color(mut self, color: Color) -> Self {
        self.overrides.inactive_color = Some(color);
        self
    }

    pub fn error_color(mut self, color: Color) -> Self {
        self.overrides.error_color = Some(color);
        self
    }

    /// Replaces every override at once, e.g. with deserialized settings.
    pub fn overrides(mut self, overrides: StepperOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn build(self) -> Stepper {
        Stepper {
            steps: self.steps,
            overrides: self.overrides,
        }
    }
}

/// A [`Stepper`] bound to a shared [`StepperController`].
///
/// State changes only mark the view dirty; the host re-renders when it next
/// draws. Dropping the view unsubscribes it.
///
/// # Examples
///
/// ```
/// use ayumi::prelude::*;
/// use std::rc::Rc;
///
/// let controller = Rc::new(StepperController::new());
/// let view = StepperView::new(Stepper::new(steps!["One", "Two"]), Rc::clone(&controller));
///
/// let _ = view.render(&());
/// assert!(!view.needs_render());
///
/// controller.next();
/// assert!(view.needs_render());
/// ```
pub struct StepperView {
    stepper: Stepper,
    controller: Rc<StepperController>,
    dirty: Rc<Cell<bool>>,
    subscription: Option<Subscription>,
}

impl fmt::Debug for StepperView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepperView")
            .field("stepper", &self.stepper)
            .field("dirty", &self.dirty.get())
            .field("attached", &self.subscription.is_some())
            .finish()
    }
}

impl StepperView {
    pub fn new(stepper: Stepper, controller: Rc<StepperController>) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        let subscription = controller.subscribe(move |_| flag.set(true));
        Self {
            stepper,
            controller,
            dirty,
            subscription: Some(subscription),
        }
    }

    pub fn stepper(&self) -> &Stepper {
        &self.stepper
    }

    pub fn controller(&self) -> &Rc<StepperController> {
        &self.controller
    }

    /// `true` until the first render and after every state change since the
    /// last one.
    pub fn needs_render(&self) -> bool {
        self.dirty.get()
    }

    /// Renders the controller's current state and clears the dirty flag.
    pub fn render(&self, ambient: &dyn ThemeLookup) -> Element {
        self.dirty.set(false);
        self.stepper.render(&self.controller.state(), ambient)
    }

    /// Stops listening to the controller.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            debug!("Stepper view detached");
        }
    }
}

impl Drop for StepperView {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps;
    use crate::theme::{keys, StepperColors, ThemeData};

    #[test]
    fn test_builder_collects_steps_and_overrides() {
        let stepper = Stepper::builder()
            .step("First")
            .steps(steps!["Second", "Third"])
            .size(StepperSize::Large)
            .error_color(Color::BLACK)
            .build();

        assert_eq!(stepper.len(), 3);
        assert_eq!(stepper.steps()[1].title(), "Second");
        assert_eq!(stepper.overrides().size, Some(StepperSize::Large));
        assert_eq!(stepper.overrides().error_color, Some(Color::BLACK));
    }

    #[test]
    fn test_empty_stepper_renders_nothing() {
        let stepper = Stepper::new(Vec::new());
        assert!(stepper.is_empty());
        for current in [-1, 0, 3] {
            assert!(stepper.render(&StepperState::new(current), &()).is_empty());
        }
    }

    #[test]
    fn test_ambient_theme_picks_layout() {
        let mut ambient = ThemeData::new();
        ambient.insert(keys::VARIANT, StepperVariant::Line);
        ambient.insert(keys::ORIENTATION, Axis::Vertical);

        let stepper = Stepper::new(steps!["A", "B", "C"]);
        let tree = stepper.render(&StepperState::new(0), &ambient);

        assert!(tree.indicators().is_empty());
        assert!(tree.lines().iter().all(|line| line.axis == Axis::Vertical));
    }

    #[test]
    fn test_override_beats_ambient() {
        let mut ambient = ThemeData::new();
        ambient.insert(keys::VARIANT, StepperVariant::Line);

        let stepper = Stepper::builder()
            .steps(steps!["A", "B"])
            .variant(StepperVariant::Circle)
            .build();
        let tree = stepper.render(&StepperState::new(0), &ambient);
        assert_eq!(tree.indicators().len(), 2);
    }

    #[test]
    fn test_view_tracks_controller() {
        let controller = Rc::new(StepperController::new());
        let view = StepperView::new(Stepper::new(steps!["A", "B"]), Rc::clone(&controller));
        assert!(view.needs_render());

        let first = view.render(&());
        assert!(!view.needs_render());
        assert!(first.content_slots()[0].visible);

        controller.next();
        assert!(view.needs_render());
        let second = view.render(&());
        assert!(second.content_slots()[1].visible);
    }

    #[test]
    fn test_view_detach() {
        let controller = Rc::new(StepperController::new());
        let mut view = StepperView::new(Stepper::new(steps!["A"]), Rc::clone(&controller));
        let _ = view.render(&());

        view.detach();
        controller.next();
        assert!(!view.needs_render());

        drop(view);
        controller.next();
        assert_eq!(controller.current_step(), 2);
    }

    #[test]
    fn test_render_uses_resolved_colors() {
        let stepper = Stepper::builder()
            .steps(steps!["A", "B"])
            .active_color(Color::BLACK)
            .build();
        let config = stepper.resolve_config(&());
        assert_eq!(config.colors.active, Color::BLACK);
        assert_eq!(config.colors.inactive, StepperColors::default().inactive);

        let tree = stepper.render_with(&StepperState::new(1), &config);
        assert_eq!(tree.indicators()[0].background, Color::BLACK);
    }
}
