//! Classification of steps and connectors, and the colors/content derived
//! from it.

use crate::element::{Glyph, IndicatorContent};
use crate::state::{step_index, StepperState};
use crate::step::IconName;
use crate::theme::{Color, StepperColors};

/// Opacity of the active color used to fill the current step's indicator.
pub const CURRENT_FILL_OPACITY: f32 = 0.1;

/// How a single step is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepVisualClass {
    Pending,
    Current,
    Completed,
    Failed,
}

impl StepVisualClass {
    /// Color for the step's title and subtitle.
    pub fn text_color(self, colors: &StepperColors) -> Color {
        match self {
            StepVisualClass::Failed => colors.error,
            StepVisualClass::Current | StepVisualClass::Completed => colors.active,
            StepVisualClass::Pending => colors.inactive,
        }
    }
}

/// Classifies step `index`. Failed wins over completed, completed over
/// current, current over pending.
///
/// # Examples
///
/// ```
/// use ayumi::{classify, StepVisualClass, StepperState};
///
/// let state = StepperState::new(3).with_failed(1, true);
/// assert_eq!(classify(&state, 0), StepVisualClass::Completed);
/// assert_eq!(classify(&state, 1), StepVisualClass::Failed);
/// assert_eq!(classify(&state, 3), StepVisualClass::Current);
/// assert_eq!(classify(&state, 4), StepVisualClass::Pending);
/// ```
pub fn classify(state: &StepperState, index: usize) -> StepVisualClass {
    let index = step_index(index);
    let current = state.current_step();
    if state.is_failed(index) {
        StepVisualClass::Failed
    } else if current > index {
        StepVisualClass::Completed
    } else if current == index {
        StepVisualClass::Current
    } else {
        StepVisualClass::Pending
    }
}

/// How the connector between step `i` and `i + 1` is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeState {
    Inactive,
    Active,
    Failed,
}

impl EdgeState {
    pub fn color(self, colors: &StepperColors) -> Color {
        match self {
            EdgeState::Inactive => colors.inactive,
            EdgeState::Active => colors.active,
            EdgeState::Failed => colors.error,
        }
    }
}

/// Classifies the edge whose lower endpoint is step `lower`.
///
/// The edge is failed while some step at or before `lower` is failed and the
/// current pointer has not moved beyond `lower`. Otherwise it is active once
/// the pointer reaches `lower`, inactive before that.
///
/// # Examples
///
/// ```
/// use ayumi::{classify_edge, EdgeState, StepperState};
///
/// let state = StepperState::new(1);
/// assert_eq!(classify_edge(&state, 0), EdgeState::Active);
/// assert_eq!(classify_edge(&state, 1), EdgeState::Active);
/// assert_eq!(classify_edge(&state, 2), EdgeState::Inactive);
///
/// let failed = state.with_failed(1, true);
/// assert_eq!(classify_edge(&failed, 0), EdgeState::Active);
/// assert_eq!(classify_edge(&failed, 1), EdgeState::Failed);
/// ```
pub fn classify_edge(state: &StepperState, lower: usize) -> EdgeState {
    let lower = step_index(lower);
    let current = state.current_step();
    let failure_behind = state.first_failed().is_some_and(|failed| failed <= lower);
    if failure_behind && current <= lower {
        EdgeState::Failed
    } else if current >= lower {
        EdgeState::Active
    } else {
        EdgeState::Inactive
    }
}

/// Resolved appearance of one step indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepVisual {
    pub class: StepVisualClass,
    pub background: Color,
    pub border: Color,
    pub foreground: Color,
    pub content: IndicatorContent,
}

/// Resolves colors and content of the indicator for step `index`.
///
/// Completed and failed steps always show the check / cross glyph; a custom
/// `icon` only replaces the step number while pending or current.
pub fn resolve_visual(
    state: &StepperState,
    index: usize,
    icon: Option<&IconName>,
    colors: &StepperColors,
) -> StepVisual {
    let class = classify(state, index);
    let numbered = || match icon {
        Some(icon) => IndicatorContent::Icon(icon.clone()),
        None => IndicatorContent::Number(index.saturating_add(1)),
    };
    let (background, border, foreground, content) = match class {
        StepVisualClass::Failed => (
            Color::TRANSPARENT,
            colors.error,
            colors.error,
            IndicatorContent::Glyph(Glyph::Cross),
        ),
        StepVisualClass::Completed => (
            colors.active,
            colors.active,
            Color::WHITE,
            IndicatorContent::Glyph(Glyph::Check),
        ),
        StepVisualClass::Current => (
            colors.active.with_opacity(CURRENT_FILL_OPACITY),
            colors.active,
            colors.active,
            numbered(),
        ),
        StepVisualClass::Pending => (
            Color::TRANSPARENT,
            colors.inactive,
            colors.inactive,
            numbered(),
        ),
    };
    StepVisual {
        class,
        background,
        border,
        foreground,
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_progression() {
        let state = StepperState::new(2);
        let classes: Vec<_> = (0..4).map(|i| classify(&state, i)).collect();
        assert_eq!(
            classes,
            vec![
                StepVisualClass::Completed,
                StepVisualClass::Completed,
                StepVisualClass::Current,
                StepVisualClass::Pending,
            ]
        );
    }

    #[test]
    fn test_failed_overrides_everything() {
        for current in [-1, 0, 1, 2, 10] {
            let state = StepperState::new(current).with_failed(1, true);
            assert_eq!(classify(&state, 1), StepVisualClass::Failed);
        }
    }

    #[test]
    fn test_classify_is_pure() {
        let state = StepperState::new(1).with_failed(3, true);
        for index in 0..5 {
            assert_eq!(classify(&state, index), classify(&state, index));
        }
    }

    #[test]
    fn test_out_of_range_pointer() {
        let before = StepperState::new(-1);
        assert!((0..3).all(|i| classify(&before, i) == StepVisualClass::Pending));

        let after = StepperState::new(99);
        assert!((0..3).all(|i| classify(&after, i) == StepVisualClass::Completed));
    }

    #[test]
    fn test_edge_progressive_fill() {
        let state = StepperState::new(2);
        let edges: Vec<_> = (0..4).map(|i| classify_edge(&state, i)).collect();
        assert_eq!(
            edges,
            vec![
                EdgeState::Active,
                EdgeState::Active,
                EdgeState::Active,
                EdgeState::Inactive,
            ]
        );
    }

    #[test]
    fn test_edge_failure_clears_once_pointer_moves_past() {
        let stuck = StepperState::new(1).with_failed(1, true);
        assert_eq!(classify_edge(&stuck, 0), EdgeState::Active);
        assert_eq!(classify_edge(&stuck, 1), EdgeState::Failed);
        assert_eq!(classify_edge(&stuck, 2), EdgeState::Failed);

        let moved_on = stuck.with_current_step(3);
        assert_eq!(classify_edge(&moved_on, 1), EdgeState::Active);
        assert_eq!(classify_edge(&moved_on, 2), EdgeState::Active);
        assert_eq!(classify_edge(&moved_on, 3), EdgeState::Failed);
    }

    #[test]
    fn test_edge_colors() {
        let colors = StepperColors::default();
        assert_eq!(EdgeState::Active.color(&colors), colors.active);
        assert_eq!(EdgeState::Inactive.color(&colors), colors.inactive);
        assert_eq!(EdgeState::Failed.color(&colors), colors.error);
    }

    #[test]
    fn test_resolve_visual_per_class() {
        let colors = StepperColors::default();
        let state = StepperState::new(2).with_failed(0, true);

        let failed = resolve_visual(&state, 0, None, &colors);
        assert_eq!(failed.class, StepVisualClass::Failed);
        assert_eq!(failed.foreground, colors.error);
        assert_eq!(failed.content, IndicatorContent::Glyph(Glyph::Cross));

        let completed = resolve_visual(&state, 1, None, &colors);
        assert_eq!(completed.background, colors.active);
        assert_eq!(completed.content, IndicatorContent::Glyph(Glyph::Check));

        let current = resolve_visual(&state, 2, None, &colors);
        assert_eq!(current.background, colors.active.with_opacity(0.1));
        assert_eq!(current.border, colors.active);
        assert_eq!(current.content, IndicatorContent::Number(3));

        let pending = resolve_visual(&state, 3, None, &colors);
        assert_eq!(pending.background, Color::TRANSPARENT);
        assert_eq!(pending.border, colors.inactive);
        assert_eq!(pending.content, IndicatorContent::Number(4));
    }

    #[test]
    fn test_custom_icon_only_for_pending_and_current() {
        let colors = StepperColors::default();
        let icon = IconName::new("star");
        let state = StepperState::new(1).with_failed(3, true);

        let content = |index| resolve_visual(&state, index, Some(&icon), &colors).content;
        assert_eq!(content(0), IndicatorContent::Glyph(Glyph::Check));
        assert_eq!(content(1), IndicatorContent::Icon(icon.clone()));
        assert_eq!(content(2), IndicatorContent::Icon(icon.clone()));
        assert_eq!(content(3), IndicatorContent::Glyph(Glyph::Cross));
    }

    #[test]
    fn test_text_color() {
        let colors = StepperColors::default();
        assert_eq!(StepVisualClass::Failed.text_color(&colors), colors.error);
        assert_eq!(StepVisualClass::Pending.text_color(&colors), colors.inactive);
        assert_eq!(StepVisualClass::Current.text_color(&colors), colors.active);
    }
}
